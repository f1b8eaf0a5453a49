//! Tests for the markup node: attributes, classes, text, children and rendering.

use trellis_tags::{Image, Link, List, ListItem, Node, TagName, Table};

// ========== attributes and classes ==========

#[test]
fn test_tag_name_is_kept() {
    let node = Node::new("section");
    assert_eq!(node.tag_name(), "section");
    assert_eq!(node.known_tag(), None);
    assert!(Node::new("TD").is(TagName::Td));
}

#[test]
fn test_attr_get_and_overwrite() {
    let mut node = Node::new("input");
    assert_eq!(node.attr("name"), None);

    node.set_attr("name", "first");
    node.set_attr("name", "second");

    assert_eq!(node.attr("name"), Some("second"));
    assert_eq!(node.attrs().count(), 1);
}

#[test]
fn test_remove_attr() {
    let mut node = Node::new("div");
    node.set_attr("id", "main");
    assert_eq!(node.remove_attr("id"), Some("main".to_string()));
    assert_eq!(node.remove_attr("id"), None);
    assert_eq!(node.render(), "<div />");
}

#[test]
fn test_add_class_is_idempotent() {
    let mut node = Node::new("td");
    node.add_class("number").add_class("wide").add_class("number");

    assert_eq!(node.classes(), &["number".to_string(), "wide".to_string()]);
    assert!(node.has_class("wide"));
    assert!(!node.has_class("narrow"));
}

#[test]
fn test_text_get_and_set() {
    let mut node = Node::new("span");
    assert_eq!(node.text(), None);
    node.set_text("hello");
    assert_eq!(node.text(), Some("hello"));
}

// ========== children ==========

#[test]
fn test_add_child_returns_child() {
    let mut parent = Node::new("div");
    parent.add_child(Node::new("p")).set_text("inner");

    assert_eq!(parent.children().len(), 1);
    assert_eq!(parent.first_child().and_then(Node::text), Some("inner"));
}

#[test]
fn test_append_returns_parent() {
    let mut parent = Node::new("div");
    parent.append(Node::new("a")).append(Node::new("b"));

    let tags: Vec<&str> = parent.children().iter().map(Node::tag_name).collect();
    assert_eq!(tags, vec!["a", "b"]);
    assert_eq!(parent.last_child().map(Node::tag_name), Some("b"));
}

#[test]
fn test_typed_child_is_created_and_returned() {
    let mut parent = Node::new("ul");
    parent.child::<ListItem>().add_class("first");

    let item = &parent.children()[0];
    assert_eq!(item.tag_name(), "li");
    assert!(item.has_class("first"));
}

#[test]
fn test_typed_child_configured_through_variant_api() {
    let mut parent = Node::new("div");
    parent
        .child_with(|list: &mut List| {
            list.add_item("one");
            list.add_item_node(Link::new("two", "/two"));
        })
        .add_class("items");
    parent.child_with(|table: &mut Table| {
        table.add_body_row().cell_text("x");
    });

    assert_eq!(parent.children().len(), 2);
    assert_eq!(
        parent.children()[0].render(),
        r#"<ul class="items"><li>one</li><li><a href="/two">two</a></li></ul>"#
    );
    assert_eq!(
        parent.children()[1].render(),
        "<table><thead /><tbody><tr><td>x</td></tr></tbody></table>"
    );
}

#[test]
fn test_children_by_tag() {
    let mut parent = Node::new("div");
    parent
        .append(Node::new("p"))
        .append(Node::new("span"))
        .append(Node::new("p"));

    assert_eq!(parent.children_by_tag("p").count(), 2);
    assert_eq!(parent.children_by_tag("img").count(), 0);
}

#[test]
fn test_take_children_moves_subtree() {
    let mut from = Node::new("div");
    from.append(Node::new("a")).append(Node::new("b"));
    let mut to = Node::new("section");

    for child in from.take_children() {
        to.append(child);
    }

    assert!(from.children().is_empty());
    assert_eq!(to.render(), "<section><a /><b /></section>");
}

#[test]
fn test_children_mut_allows_editing_in_place() {
    let mut parent = Node::new("tr");
    parent.append(Node::new("td")).append(Node::new("td"));

    for cell in parent.children_mut() {
        cell.add_class("cell");
    }

    assert!(parent.children().iter().all(|c| c.has_class("cell")));
}

// ========== rendering ==========

#[test]
fn test_render_self_closing_when_empty() {
    assert_eq!(Node::new("br").render(), "<br />");
}

#[test]
fn test_render_attributes_in_insertion_order_then_class() {
    let mut node = Node::new("div");
    node.add_class("b").add_class("a");
    node.set_attr("id", "x").set_attr("data-role", "grid");
    node.set_text("t");

    assert_eq!(
        node.render(),
        r#"<div id="x" data-role="grid" class="b a">t</div>"#
    );
}

#[test]
fn test_render_empty_text_is_not_self_closing() {
    let mut node = Node::new("td");
    node.set_text("");
    assert_eq!(node.render(), "<td></td>");
}

#[test]
fn test_render_text_before_children() {
    let mut node = Node::new("p");
    node.append(Node::new("b")).set_text("lead");
    assert_eq!(node.render(), "<p>lead<b /></p>");
}

#[test]
fn test_render_escapes_text_and_attribute_values() {
    let mut node = Node::new("a");
    node.set_attr("title", r#"5 > 3 & "quoted""#);
    node.set_text("<script>");

    assert_eq!(
        node.render(),
        r#"<a title="5 &gt; 3 &amp; &quot;quoted&quot;">&lt;script&gt;</a>"#
    );
}

#[test]
fn test_render_is_deterministic() {
    let mut node = Node::new("ul");
    node.add_class("menu");
    node.child::<ListItem>().set_text("one");
    node.add_child(Image::new("a.png", "a"));

    assert_eq!(node.render(), node.render());
    assert_eq!(node.to_string(), node.render());
}

#[test]
fn test_render_pretty_indents_nested_elements() {
    let mut list = Node::new("ul");
    list.child::<ListItem>().set_text("one");
    list.child::<ListItem>()
        .append(Node::new("span"))
        .set_text("two");

    assert_eq!(
        list.render_pretty(),
        "<ul>\n  <li>one</li>\n  <li>two\n    <span />\n  </li>\n</ul>"
    );
}

#[test]
fn test_render_pretty_leaf_matches_compact() {
    let image = Image::new("foo.jpg", "foo");
    assert_eq!(image.render_pretty(), image.render());
}
