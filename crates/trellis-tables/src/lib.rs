//! Table generation from typed records for the Trellis toolkit.
//!
//! # Scope
//!
//! This crate provides:
//! - **Accessors** ([`Accessor`]) - named extraction of one value from a
//!   record
//! - **Columns** ([`ColumnDef`]) - a value source (display-resolved accessor
//!   or raw transformation), a header and per-cell transformers
//! - **Display resolution** ([`DisplayResolver`], [`ConventionResolver`]) -
//!   turning extracted values into nodes
//! - **Generation** ([`TableGenerator`]) - one body row per record, one cell
//!   per column, with header-row and row transformers
//!
//! # Example
//!
//! ```
//! use serde::Serialize;
//! use trellis_tables::{Accessor, ColumnDef, ConventionResolver, TableGenerator};
//! use trellis_tags::Link;
//!
//! #[derive(Serialize)]
//! struct Product { code: String, name: String }
//!
//! let code = ColumnDef::transform(|p: &Product| {
//!     Link::new(p.code.as_str(), format!("/item?Code={}", p.code))
//! })
//! .header("Code")
//! .build()
//! .unwrap();
//!
//! let generator = TableGenerator::builder(ConventionResolver::standard())
//!     .column(code)
//!     .display_column_titled(Accessor::field("name"), "Name")
//!     .row_transformer(|row| {
//!         row.add_class("product");
//!     })
//!     .build();
//!
//! let products = vec![Product { code: "1111".into(), name: "Remote".into() }];
//! let table = generator.generate_table(&products).unwrap();
//!
//! assert_eq!(
//!     table.body_rows()[0].render(),
//!     r#"<tr class="product"><td><a href="/item?Code=1111">1111</a></td><td><span>Remote</span></td></tr>"#
//! );
//! ```

mod accessor;
mod cell;
mod column;
mod conventions;
mod generator;
mod resolver;
mod table_for;

pub use accessor::{Accessor, RowCache};
pub use cell::CellValue;
pub use column::{
    CellTransformer, ColumnDef, ColumnDefBuilder, ColumnError, Header, TransformFn, ValueSource,
};
pub use conventions::{ConventionResolver, display_text, span};
pub use generator::{RowTransformer, TableError, TableGenerator, TableGeneratorBuilder};
pub use resolver::{DisplayResolver, ResolveError, ValueKind};
pub use table_for::{table_for, table_generator_for};
