//! Markup tree construction for the Trellis toolkit.
//!
//! # Scope
//!
//! This crate provides:
//! - **Markup Node** ([`Node`]) - a mutable element with ordered attributes,
//!   an ordered class set, optional text and owned children
//! - **Specialized Nodes** - [`Image`], [`Link`], [`List`]/[`ListItem`] and
//!   [`Table`]/[`TableRow`], each a node with a fixed tag name and helpers
//!   for its well-known attributes or structure
//! - **Rendering** - canonical compact markup and an indented pretty form
//!
//! # Design
//!
//! Children are owned by value. Appending a node moves it into its parent,
//! so a node is never shared between two parents; detach with
//! [`Node::take_children`] to move a subtree elsewhere.
//!
//! ```
//! use trellis_tags::{Link, List, Node};
//!
//! let mut list = List::new();
//! list.add_item("plain");
//! list.add_item_node(Link::new("home", "/"));
//! list.add_item_with(|li| {
//!     li.add_class("active").set_text("current");
//! });
//!
//! assert_eq!(
//!     list.render(),
//!     r#"<ul><li>plain</li><li><a href="/">home</a></li><li class="active">current</li></ul>"#
//! );
//! ```

mod image;
mod link;
mod list;
mod node;
mod render;
mod table;
mod tag_name;

pub use image::Image;
pub use link::Link;
pub use list::{List, ListItem};
pub use node::{AttributesList, Node};
pub use render::{escape_attr, escape_text};
pub use table::{Table, TableRow};
pub use tag_name::TagName;
