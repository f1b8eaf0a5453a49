use std::ops::Deref;

use crate::{Node, TagName};

/// An `img` element.
///
/// Always renders self-closing. There is no mutable access to the inner
/// node, so children cannot be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image(Node);

impl Image {
    /// Create an image with the given source and alternate text.
    ///
    /// `alt` is written before `src`, which fixes their rendering order.
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        let mut node = Node::new(TagName::Img);
        node.set_attr("alt", alt_text).set_attr("src", source);
        Self(node)
    }

    /// The `src` attribute.
    #[must_use]
    pub fn src(&self) -> &str {
        self.0.attr("src").unwrap_or_default()
    }

    /// The `alt` attribute.
    #[must_use]
    pub fn alt(&self) -> &str {
        self.0.attr("alt").unwrap_or_default()
    }

    /// Replace the `src` attribute.
    pub fn set_src(&mut self, source: impl Into<String>) -> &mut Self {
        self.0.set_attr("src", source);
        self
    }

    /// Replace the `alt` attribute.
    pub fn set_alt(&mut self, alt_text: impl Into<String>) -> &mut Self {
        self.0.set_attr("alt", alt_text);
        self
    }

    /// Set any other attribute (`width`, `title`, ...).
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.set_attr(name, value);
        self
    }

    /// Add a class name.
    pub fn add_class(&mut self, name: impl Into<String>) -> &mut Self {
        self.0.add_class(name);
        self
    }
}

impl Deref for Image {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl From<Image> for Node {
    fn from(image: Image) -> Self {
        image.0
    }
}
