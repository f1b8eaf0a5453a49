use serde_json::Value;
use trellis_tags::{Image, Link, List, Node, Table};

/// What a raw transformation column produced for one record.
///
/// Decided once per cell: a node becomes the cell's only child, text
/// becomes its text content, and `Empty` renders an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// A pre-built fragment, inserted as the cell's child.
    Node(Node),
    /// Plain text, set as the cell's text content.
    Text(String),
    /// Nothing to show; the cell gets empty text.
    Empty,
}

impl CellValue {
    /// Text from anything displayable (numbers, dates, ...).
    pub fn display(value: impl std::fmt::Display) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Node> for CellValue {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Image> for CellValue {
    fn from(image: Image) -> Self {
        Self::Node(image.into())
    }
}

impl From<Link> for CellValue {
    fn from(link: Link) -> Self {
        Self::Node(link.into())
    }
}

impl From<List> for CellValue {
    fn from(list: List) -> Self {
        Self::Node(list.into())
    }
}

impl From<Table> for CellValue {
    fn from(table: Table) -> Self {
        Self::Node(table.into())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
