//! Property tests for the shape of generated tables.

use quickcheck_macros::quickcheck;
use serde_json::json;
use trellis_tables::{Accessor, ConventionResolver, TableGenerator};

/// Builds a generator with `columns` display columns over plain numbers.
fn generator(columns: usize, show_header: bool) -> TableGenerator<u16, ConventionResolver> {
    let builder = (0..columns).fold(
        TableGenerator::builder(ConventionResolver::standard()),
        |builder, i| builder.display_column(Accessor::new(format!("c{i}"), |n: &u16| json!(n))),
    );
    if show_header {
        builder.build()
    } else {
        builder.no_header().build()
    }
}

#[quickcheck]
fn prop_rows_times_columns(records: Vec<u16>, columns: u8, show_header: bool) -> bool {
    let columns = usize::from(columns % 8);
    let Ok(table) = generator(columns, show_header).generate_table(&records) else {
        return false;
    };

    let header_cells = table.header_row().map_or(0, |r| r.children().len());
    let expected_header = if show_header { columns } else { 0 };

    table.body_rows().len() == records.len()
        && table.body_rows().iter().all(|r| r.children().len() == columns)
        && header_cells == expected_header
}

#[quickcheck]
fn prop_cells_follow_record_order(records: Vec<u16>) -> bool {
    let Ok(table) = generator(1, true).generate_table(&records) else {
        return false;
    };

    table
        .body_rows()
        .iter()
        .zip(&records)
        .all(|(row, n)| row.children()[0].children()[0].text() == Some(n.to_string().as_str()))
}
