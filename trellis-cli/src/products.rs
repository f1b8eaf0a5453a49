//! The product catalogue the CLI renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trellis_tables::{
    Accessor, ColumnDef, ColumnError, ConventionResolver, TableGenerator, display_text,
};
use trellis_tags::{Link, Node, TagName};

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub parts: Vec<ProductPart>,
}

/// A replacement part belonging to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPart {
    pub part_number: String,
}

impl Product {
    fn sample(code: &str, name: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
            parts: (1..=3)
                .map(|n| ProductPart {
                    part_number: format!("{code}- {n}"),
                })
                .collect(),
        }
    }
}

/// Products shown when no input file is given.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::sample("1111", "TV Remote Control"),
        Product::sample("2222", "DVR Unit"),
        Product::sample("3333", "HD Antenna"),
    ]
}

/// Standard conventions, with the `parts` column shown as its part numbers.
pub fn resolver() -> ConventionResolver {
    ConventionResolver::new()
        .for_column("parts", part_numbers)
        .with_standard()
}

/// The products table: a "Code" link column, the name, and the part list.
///
/// Codes link to `<item_url>?Code=<code>`, with the code percent-encoded.
pub fn products_table_generator(
    item_url: &str,
    show_header: bool,
) -> Result<TableGenerator<Product, ConventionResolver>, ColumnError> {
    let item_url = item_url.to_owned();
    let code = ColumnDef::transform(move |p: &Product| {
        Link::new(p.code.as_str(), item_link(&item_url, &p.code))
    })
    .header("Code")
    .build()?;

    let builder = TableGenerator::builder(resolver())
        .column(code)
        .display_column_titled(Accessor::field("name"), "This is the name")
        .display_column(Accessor::field("parts"));

    Ok(if show_header {
        builder.build()
    } else {
        builder.no_header().build()
    })
}

fn item_link(item_url: &str, code: &str) -> String {
    format!("{item_url}?Code={}", urlencoding::encode(code))
}

fn part_numbers(value: &Value) -> Node {
    let numbers: Vec<String> = value
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("part_number"))
                .map(display_text)
                .collect()
        })
        .unwrap_or_default();

    let mut node = Node::new(TagName::Span);
    node.set_text(numbers.join(", "));
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_products() {
        let products = sample_products();
        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.parts.len() == 3));
        assert_eq!(products[1].parts[2].part_number, "2222- 3");
    }

    #[test]
    fn test_part_numbers_span() {
        let value = json!([{"part_number": "a"}, {"part_number": "b"}, {"other": 1}]);
        assert_eq!(part_numbers(&value).render(), "<span>a, b</span>");
        assert_eq!(part_numbers(&json!(null)).render(), "<span></span>");
    }

    #[test]
    fn test_products_table() {
        let generator = products_table_generator("/item", true).unwrap();
        let table = generator.generate_table(&sample_products()).unwrap();

        assert_eq!(
            table.header_row().unwrap().render(),
            "<tr><th>Code</th><th>This is the name</th><th>parts</th></tr>"
        );
        assert_eq!(table.body_rows().len(), 3);
        assert_eq!(
            table.body_rows()[0].render(),
            "<tr><td><a href=\"/item?Code=1111\">1111</a></td>\
             <td><span>TV Remote Control</span></td>\
             <td><span>1111- 1, 1111- 2, 1111- 3</span></td></tr>"
        );
    }

    #[test]
    fn test_item_link_encodes_code() {
        assert_eq!(item_link("/item", "1111"), "/item?Code=1111");
        assert_eq!(item_link("/item", "A&B #1"), "/item?Code=A%26B%20%231");
    }

    #[test]
    fn test_code_link_survives_reserved_characters() {
        let products = vec![Product {
            code: "A&B #1".to_owned(),
            name: "Splitter".to_owned(),
            parts: Vec::new(),
        }];
        let generator = products_table_generator("/item", true).unwrap();
        let table = generator.generate_table(&products).unwrap();

        let link = &table.body_rows()[0].children()[0].children()[0];
        assert_eq!(link.attr("href"), Some("/item?Code=A%26B%20%231"));
        assert_eq!(link.text(), Some("A&B #1"));
        assert_eq!(
            link.render(),
            r#"<a href="/item?Code=A%26B%20%231">A&amp;B #1</a>"#
        );
    }

    #[test]
    fn test_products_table_without_header() {
        let generator = products_table_generator("/item", false).unwrap();
        let table = generator.generate_table(&sample_products()).unwrap();

        assert!(table.header_row().is_none());
        assert_eq!(table.body_rows().len(), 3);
    }

    #[test]
    fn test_products_from_json_without_parts() {
        let products: Vec<Product> =
            serde_json::from_str(r#"[{"code": "9", "name": "Cable"}]"#).unwrap();
        assert_eq!(products[0].parts, Vec::new());

        let generator = products_table_generator("/p", true).unwrap();
        let table = generator.generate_table(&products).unwrap();
        assert_eq!(
            table.body_rows()[0].children()[2].render(),
            "<td><span></span></td>"
        );
    }
}
