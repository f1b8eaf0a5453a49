use std::ops::{Deref, DerefMut};

use crate::{Node, TagName};

/// A `ul` element whose items are added through [`List::add_item`] and
/// friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List(Node);

impl List {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(Node::new(TagName::Ul))
    }

    /// Add an item holding `text`.
    pub fn add_item(&mut self, text: impl Into<String>) -> &mut Node {
        let item = self.0.child::<ListItem>();
        item.set_text(text);
        item
    }

    /// Add an item wrapping `child`.
    pub fn add_item_node(&mut self, child: impl Into<Node>) -> &mut Node {
        let item = self.0.child::<ListItem>();
        item.append(child);
        item
    }

    /// Add an item and hand it to `configure` before returning it.
    pub fn add_item_with<F>(&mut self, configure: F) -> &mut Node
    where
        F: FnOnce(&mut Node),
    {
        let item = self.0.child::<ListItem>();
        configure(item);
        item
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for List {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl DerefMut for List {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.0
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        list.0
    }
}

/// An `li` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem(Node);

impl Default for ListItem {
    fn default() -> Self {
        Self(Node::new(TagName::Li))
    }
}

impl Deref for ListItem {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl DerefMut for ListItem {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.0
    }
}

impl From<ListItem> for Node {
    fn from(item: ListItem) -> Self {
        item.0
    }
}
