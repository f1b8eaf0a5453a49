use std::fmt;

use trellis_common::warning::warn_once;

use crate::TagName;
use crate::render;

/// Ordered list of attribute names to values for an element.
///
/// Insertion order is rendering order; a repeated name overwrites the
/// existing entry in place.
pub type AttributesList = Vec<(String, String)>;

/// A markup element: tag name, attributes, classes, text and children.
///
/// The tag name is fixed at construction. Children are owned, so appending a
/// node moves it into this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag_name: String,
    pub(crate) attrs: AttributesList,
    pub(crate) classes: Vec<String>,
    pub(crate) children: Vec<Node>,
    pub(crate) text: Option<String>,
}

impl Node {
    /// Create an empty element with the given tag name.
    ///
    /// The name is not validated.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Whether this element has the given well-known tag name.
    #[must_use]
    pub fn is(&self, tag: TagName) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag.as_ref())
    }

    /// The tag name as a [`TagName`], if it is one the toolkit knows.
    #[must_use]
    pub fn known_tag(&self) -> Option<TagName> {
        self.tag_name.parse().ok()
    }

    /// Get an attribute value.
    ///
    /// Class names are not attributes here; see [`Node::classes`].
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, overwriting any previous value for the same name.
    ///
    /// Setting `class` replaces the class list with the whitespace-separated
    /// names in `value`.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();

        if name == "class" {
            warn_once("tags", "`class` set as an attribute; use add_class instead");
            self.classes.clear();
            for class in value.split_whitespace() {
                self.add_class(class);
            }
            return self;
        }

        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(index).1)
    }

    /// Iterate attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add a class name. Adding a name that is already present is a no-op.
    pub fn add_class(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.has_class(&name) {
            self.classes.push(name);
        }
        self
    }

    /// Add several class names in order.
    pub fn add_classes<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_class(name);
        }
        self
    }

    /// Whether the class set contains `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Class names in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Text content, if any was set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text content, replacing any previous text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child and return it for further configuration.
    pub fn add_child(&mut self, child: impl Into<Node>) -> &mut Node {
        let index = self.children.len();
        self.children.push(child.into());
        &mut self.children[index]
    }

    /// Append a child and return `self`, for adding several children in a row.
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Create a default `V`, append it and return it for configuration.
    ///
    /// The child comes back as a plain [`Node`], so variant helpers such as
    /// [`List::add_item`](crate::List::add_item) are out of reach; use
    /// [`Node::child_with`] for those.
    ///
    /// ```
    /// use trellis_tags::{List, ListItem};
    ///
    /// let mut list = List::new();
    /// list.child::<ListItem>().set_text("one");
    /// assert_eq!(list.render(), "<ul><li>one</li></ul>");
    /// ```
    pub fn child<V>(&mut self) -> &mut Node
    where
        V: Default + Into<Node>,
    {
        self.add_child(V::default())
    }

    /// Create a default `V`, configure it through its own API, then append
    /// it and return it.
    ///
    /// ```
    /// use trellis_tags::{List, Node};
    ///
    /// let mut nav = Node::new("nav");
    /// nav.child_with(|menu: &mut List| {
    ///     menu.add_item("home");
    ///     menu.add_item("about");
    /// })
    /// .add_class("menu");
    ///
    /// assert_eq!(
    ///     nav.render(),
    ///     r#"<nav><ul class="menu"><li>home</li><li>about</li></ul></nav>"#
    /// );
    /// ```
    pub fn child_with<V, F>(&mut self, configure: F) -> &mut Node
    where
        V: Default + Into<Node>,
        F: FnOnce(&mut V),
    {
        let mut child = V::default();
        configure(&mut child);
        self.add_child(child)
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children in document order.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// First child, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Last child, if any.
    #[must_use]
    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    /// Children whose tag name equals `tag`.
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children
            .iter()
            .filter(move |c| c.tag_name.eq_ignore_ascii_case(tag))
    }

    /// Detach and return all children, leaving this node empty of them.
    ///
    /// The returned nodes can be appended to another parent.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Whether this node renders in the self-closing `<tag />` form.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    /// Render as compact markup.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        render::write_compact(self, &mut out);
        out
    }

    /// Render with each child element on its own line, indented two spaces
    /// per level.
    #[must_use]
    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        render::write_pretty(self, 0, &mut out);
        out
    }
}

impl From<TagName> for Node {
    fn from(tag: TagName) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
