use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Tag names the specialized nodes and the table generator build.
///
/// Any other tag is still representable through [`Node::new`](crate::Node::new);
/// this enum only names the ones the toolkit itself relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TagName {
    /// Hyperlink.
    A,
    /// Generic block container.
    Div,
    /// Embedded image.
    Img,
    /// List item.
    Li,
    /// Generic inline container; the usual shape of a resolved display value.
    Span,
    /// Table root.
    Table,
    /// Table body section.
    Tbody,
    /// Table data cell.
    Td,
    /// Table header cell.
    Th,
    /// Table header section.
    Thead,
    /// Table row.
    Tr,
    /// Unordered list.
    Ul,
}

impl From<TagName> for String {
    fn from(tag: TagName) -> Self {
        tag.as_ref().to_owned()
    }
}
