use std::ops::{Deref, DerefMut};

use crate::{Node, TagName};

/// An `a` element with an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link(Node);

impl Link {
    /// A link whose content is plain text.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        let mut node = Node::new(TagName::A);
        node.set_text(text).set_attr("href", url);
        Self(node)
    }

    /// A link wrapping another node (an image, a span...) as its only child.
    pub fn with_child(child: impl Into<Node>, url: impl Into<String>) -> Self {
        let mut node = Node::new(TagName::A);
        node.append(child).set_attr("href", url);
        Self(node)
    }

    /// Add class names, consuming and returning the link.
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.add_classes(classes);
        self
    }

    /// The `href` attribute.
    #[must_use]
    pub fn href(&self) -> &str {
        self.0.attr("href").unwrap_or_default()
    }

    /// Replace the `href` attribute.
    pub fn set_href(&mut self, url: impl Into<String>) -> &mut Self {
        self.0.set_attr("href", url);
        self
    }
}

impl Deref for Link {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl DerefMut for Link {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.0
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        link.0
    }
}
