//! Tests for the specialized nodes: image, link and list.

use trellis_tags::{Image, Link, List, Node};

// ========== Image ==========

#[test]
fn test_image_has_img_tag_and_attributes() {
    let image = Image::new("foo.jpg", "foo");

    assert_eq!(image.tag_name(), "img");
    assert_eq!(image.attr("src"), Some("foo.jpg"));
    assert_eq!(image.attr("alt"), Some("foo"));
    assert_eq!(image.src(), "foo.jpg");
    assert_eq!(image.alt(), "foo");
}

#[test]
fn test_image_renders_fully_formed_img() {
    let image = Image::new("foo.jpg", "foo");
    assert_eq!(image.render(), r#"<img alt="foo" src="foo.jpg" />"#);
}

#[test]
fn test_image_setters_keep_attribute_positions() {
    let mut image = Image::new("a.png", "a");
    image.set_src("b.png").set_alt("b").add_class("thumb");

    assert_eq!(image.render(), r#"<img alt="b" src="b.png" class="thumb" />"#);
}

// ========== Link ==========

fn text_link() -> Link {
    Link::new("some text", "href").with_classes(["class1", "class2"])
}

#[test]
fn test_link_has_text_and_href() {
    let link = text_link();
    assert_eq!(link.text(), Some("some text"));
    assert_eq!(link.href(), "href");
    assert_eq!(link.attr("href"), Some("href"));
}

#[test]
fn test_link_has_each_class_once() {
    let link = text_link().with_classes(["class1"]);
    assert_eq!(link.classes().iter().filter(|c| *c == "class1").count(), 1);
    assert_eq!(link.classes().iter().filter(|c| *c == "class2").count(), 1);
}

#[test]
fn test_link_with_child_contains_child() {
    let image = Image::new("image.jpg", "its an image");
    let link = Link::with_child(image.clone(), "href");

    assert_eq!(link.first_child(), Some(&Node::from(image)));
    assert_eq!(link.text(), None);
}

#[test]
fn test_link_renders_with_text() {
    assert_eq!(
        text_link().render(),
        r#"<a href="href" class="class1 class2">some text</a>"#
    );
}

#[test]
fn test_link_renders_with_child() {
    let image = Image::new("image.jpg", "its an image");
    let expected_child = image.render();
    let link = Link::with_child(image, "href").with_classes(["class1", "class2"]);

    assert_eq!(
        link.render(),
        format!(r#"<a href="href" class="class1 class2">{expected_child}</a>"#)
    );
}

#[test]
fn test_link_set_href() {
    let mut link = Link::new("x", "/old");
    link.set_href("/new");
    assert_eq!(link.href(), "/new");
}

// ========== List ==========

#[test]
fn test_list_has_ul_tag() {
    assert_eq!(List::new().tag_name(), "ul");
}

#[test]
fn test_list_add_item_text() {
    let mut list = List::new();
    list.add_item("an item");

    assert_eq!(list.children().len(), 1);
    let item = &list.children()[0];
    assert_eq!(item.tag_name(), "li");
    assert_eq!(item.text(), Some("an item"));
}

#[test]
fn test_list_add_item_node() {
    let child = Link::new("foo", "url");
    let mut list = List::new();
    list.add_item_node(child.clone());

    let item = &list.children()[0];
    assert_eq!(item.tag_name(), "li");
    assert_eq!(item.children(), &[Node::from(child)]);
}

#[test]
fn test_list_add_item_with_configure() {
    let mut list = List::new();
    let item = list.add_item_with(|li| {
        li.set_text("text");
    });
    item.add_class("returned");

    let item = &list.children()[0];
    assert_eq!(item.text(), Some("text"));
    assert!(item.has_class("returned"));
}
