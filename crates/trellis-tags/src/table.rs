use std::ops::{Deref, DerefMut};

use crate::{Node, TagName};

/// A `table` element with a `thead` and a `tbody` section.
///
/// Both sections exist from construction, so a table that never gets a
/// header row still renders an (empty) `thead`.
///
/// ```
/// use trellis_tags::Table;
///
/// let mut table = Table::new();
/// table.add_header_row().header_text("Name");
/// table.add_body_row().cell_text("DVR");
///
/// assert_eq!(
///     table.render(),
///     "<table><thead><tr><th>Name</th></tr></thead><tbody><tr><td>DVR</td></tr></tbody></table>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table(Node);

impl Table {
    /// An empty table with empty header and body sections.
    #[must_use]
    pub fn new() -> Self {
        let mut node = Node::new(TagName::Table);
        node.append(TagName::Thead).append(TagName::Tbody);
        Self(node)
    }

    /// The header row, created on first call.
    ///
    /// Calling this again returns the same row; the header section never
    /// holds more than the one row this creates.
    pub fn add_header_row(&mut self) -> TableRow<'_> {
        let head = self.section_mut(TagName::Thead);
        let index = match head.children.iter().position(|c| c.is(TagName::Tr)) {
            Some(index) => index,
            None => {
                head.children.push(Node::new(TagName::Tr));
                head.children.len() - 1
            }
        };
        TableRow::new(&mut head.children[index])
    }

    /// Append a new row to the body section.
    pub fn add_body_row(&mut self) -> TableRow<'_> {
        let body = self.section_mut(TagName::Tbody);
        TableRow::new(body.add_child(TagName::Tr))
    }

    /// The `thead` section, if it is still attached.
    #[must_use]
    pub fn head(&self) -> Option<&Node> {
        self.section(TagName::Thead)
    }

    /// The `tbody` section, if it is still attached.
    #[must_use]
    pub fn body(&self) -> Option<&Node> {
        self.section(TagName::Tbody)
    }

    /// The header row, if one was added.
    #[must_use]
    pub fn header_row(&self) -> Option<&Node> {
        self.head()?.children.iter().find(|c| c.is(TagName::Tr))
    }

    /// Rows of the body section, in order.
    #[must_use]
    pub fn body_rows(&self) -> &[Node] {
        self.body()
            .map(|body| body.children.as_slice())
            .unwrap_or_default()
    }

    /// Unwrap into the underlying `table` node.
    #[must_use]
    pub fn into_node(self) -> Node {
        self.0
    }

    fn section(&self, tag: TagName) -> Option<&Node> {
        self.0.children.iter().find(|c| c.is(tag))
    }

    /// Find a section, re-creating it if a caller detached it. `thead` goes
    /// first, `tbody` last.
    fn section_mut(&mut self, tag: TagName) -> &mut Node {
        let children = &mut self.0.children;
        let index = match children.iter().position(|c| c.is(tag)) {
            Some(index) => index,
            None if tag == TagName::Thead => {
                children.insert(0, Node::new(tag));
                0
            }
            None => {
                children.push(Node::new(tag));
                children.len() - 1
            }
        };
        &mut children[index]
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Table {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl DerefMut for Table {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.0
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        table.0
    }
}

/// Mutable view of a `tr` element inside a [`Table`].
///
/// Handed out by [`Table::add_header_row`] and [`Table::add_body_row`], and
/// passed to row transformers. Dereferences to the row [`Node`] for classes
/// and attributes.
#[derive(Debug)]
pub struct TableRow<'a> {
    row: &'a mut Node,
}

impl<'a> TableRow<'a> {
    fn new(row: &'a mut Node) -> Self {
        Self { row }
    }

    /// Append an empty header cell (`th`) and return it.
    pub fn header(&mut self) -> &mut Node {
        self.row.add_child(TagName::Th)
    }

    /// Append a header cell holding `text` and return it.
    pub fn header_text(&mut self, text: impl Into<String>) -> &mut Node {
        let cell = self.header();
        cell.set_text(text);
        cell
    }

    /// Append an empty data cell (`td`) and return it.
    pub fn cell(&mut self) -> &mut Node {
        self.row.add_child(TagName::Td)
    }

    /// Append a data cell holding `text` and return it.
    pub fn cell_text(&mut self, text: impl Into<String>) -> &mut Node {
        let cell = self.cell();
        cell.set_text(text);
        cell
    }

    /// Give up the view, keeping the mutable borrow of the row node.
    #[must_use]
    pub fn into_node(self) -> &'a mut Node {
        self.row
    }
}

impl Deref for TableRow<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        &*self.row
    }
}

impl DerefMut for TableRow<'_> {
    fn deref_mut(&mut self) -> &mut Node {
        &mut *self.row
    }
}
