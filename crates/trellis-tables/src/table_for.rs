//! One-call table generation from a list of accessors.

use trellis_tags::Table;

use crate::{Accessor, DisplayResolver, TableError, TableGenerator};

/// A generator with one display-resolved column per accessor, each headed by
/// the accessor's name.
pub fn table_generator_for<T, R, I>(resolver: R, accessors: I) -> TableGenerator<T, R>
where
    R: DisplayResolver<T>,
    I: IntoIterator<Item = Accessor<T>>,
{
    accessors
        .into_iter()
        .fold(TableGenerator::builder(resolver), |builder, accessor| {
            builder.display_column(accessor)
        })
        .build()
}

/// Generate a table for `items` with one display-resolved column per
/// accessor.
///
/// ```
/// use serde::Serialize;
/// use trellis_tables::{table_for, Accessor, ConventionResolver};
///
/// #[derive(Serialize)]
/// struct Part { number: u32 }
///
/// let parts = [Part { number: 1 }, Part { number: 2 }];
/// let table = table_for(
///     ConventionResolver::standard(),
///     &parts,
///     [Accessor::field("number")],
/// )
/// .unwrap();
///
/// assert_eq!(table.body_rows().len(), 2);
/// ```
///
/// # Errors
///
/// Propagates the first [`TableError`] from generation.
pub fn table_for<'a, T, R, D, I>(resolver: R, items: D, accessors: I) -> Result<Table, TableError>
where
    T: 'a,
    R: DisplayResolver<T>,
    D: IntoIterator<Item = &'a T>,
    I: IntoIterator<Item = Accessor<T>>,
{
    table_generator_for(resolver, accessors).generate_table(items)
}
