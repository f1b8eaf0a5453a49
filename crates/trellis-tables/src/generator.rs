use std::fmt;

use log::{debug, trace};
use thiserror::Error;
use trellis_tags::{Node, Table, TableRow};

use crate::column::{ColumnDef, Header, ValueSource};
use crate::resolver::{DisplayResolver, ResolveError};
use crate::{Accessor, CellValue};

/// Mutation applied to a whole row (header or body) after its cells exist.
pub type RowTransformer = Box<dyn Fn(&mut TableRow<'_>)>;

/// Why a table could not be generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The display resolver failed on one cell.
    #[error("row {row}, column `{column}`: {source}")]
    Cell {
        /// Zero-based index of the record in the data sequence.
        row: usize,
        /// Name of the failing column.
        column: String,
        /// The resolver's error.
        #[source]
        source: ResolveError,
    },
}

/// Builds a [`Table`] from a sequence of records, one body row per record
/// and one cell per column.
///
/// Configured once through [`TableGeneratorBuilder`]; generating never
/// changes the generator, so it can produce any number of independent
/// tables.
///
/// ```
/// use serde::Serialize;
/// use trellis_tables::{Accessor, ConventionResolver, TableGenerator};
///
/// #[derive(Serialize)]
/// struct Product { code: String, name: String }
///
/// let generator = TableGenerator::builder(ConventionResolver::standard())
///     .transform_column_titled(|p: &Product| p.code.clone(), "Code")
///     .display_column(Accessor::field("name"))
///     .build();
///
/// let products = [Product { code: "2222".into(), name: "DVR".into() }];
/// let table = generator.generate_table(&products).unwrap();
///
/// assert_eq!(table.body_rows().len(), 1);
/// assert_eq!(
///     table.render(),
///     "<table><thead><tr><th>Code</th><th>name</th></tr></thead>\
///      <tbody><tr><td>2222</td><td><span>DVR</span></td></tr></tbody></table>"
/// );
/// ```
pub struct TableGenerator<T, R> {
    resolver: R,
    show_header: bool,
    columns: Vec<ColumnDef<T>>,
    header_row_transformers: Vec<RowTransformer>,
    row_transformers: Vec<RowTransformer>,
}

impl<T, R: DisplayResolver<T>> TableGenerator<T, R> {
    /// Start configuring a generator that resolves display columns with
    /// `resolver`.
    #[must_use]
    pub fn builder(resolver: R) -> TableGeneratorBuilder<T, R> {
        TableGeneratorBuilder::new(resolver)
    }

    /// Generate a table for `data`.
    ///
    /// The header row (when enabled) gets one cell per column; each record
    /// then gets a body row with one cell per column, followed by the row
    /// transformers. An empty sequence yields a table without body rows.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Cell`] for the first cell the resolver fails
    /// on. No partially built table is returned.
    pub fn generate_table<'a, I>(&self, data: I) -> Result<Table, TableError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        debug!(
            "generating table: {} columns, header {}",
            self.columns.len(),
            if self.show_header { "on" } else { "off" }
        );

        let mut table = Table::new();
        if self.show_header {
            self.add_header_row(&mut table);
        }

        let mut rows = 0;
        for (index, record) in data.into_iter().enumerate() {
            self.add_body_row(&mut table, index, record)?;
            rows += 1;
        }

        debug!("generated table with {rows} body rows");
        Ok(table)
    }

    /// Whether a header row is generated.
    #[must_use]
    pub const fn show_header(&self) -> bool {
        self.show_header
    }

    /// The columns, in order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    /// The display resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    fn add_header_row(&self, table: &mut Table) {
        let mut row = table.add_header_row();
        for column in &self.columns {
            column.add_header_cell(&mut row);
        }
        for transform in &self.header_row_transformers {
            transform(&mut row);
        }
    }

    fn add_body_row(&self, table: &mut Table, index: usize, record: &T) -> Result<(), TableError> {
        trace!("row {index}");
        let mut row = table.add_body_row();
        let mut entered = false;

        let filled = self.columns.iter().try_for_each(|column| {
            if column.is_display_resolved() && !entered {
                self.resolver.enter_record(record);
                entered = true;
            }
            column
                .add_body_cell(&mut row, record, &self.resolver)
                .map_err(|source| TableError::Cell {
                    row: index,
                    column: column.name().to_string(),
                    source,
                })
        });
        if entered {
            self.resolver.leave_record(record);
        }
        filled?;

        for transform in &self.row_transformers {
            transform(&mut row);
        }
        Ok(())
    }
}

impl<T, R> fmt::Debug for TableGenerator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableGenerator")
            .field("show_header", &self.show_header)
            .field("columns", &self.columns)
            .field("header_row_transformers", &self.header_row_transformers.len())
            .field("row_transformers", &self.row_transformers.len())
            .finish_non_exhaustive()
    }
}

/// Collects columns and transformers for a [`TableGenerator`].
///
/// Columns appear in the order they are added; transformers run in the order
/// they are registered.
pub struct TableGeneratorBuilder<T, R> {
    resolver: R,
    show_header: bool,
    columns: Vec<ColumnDef<T>>,
    header_row_transformers: Vec<RowTransformer>,
    row_transformers: Vec<RowTransformer>,
}

impl<T, R: DisplayResolver<T>> TableGeneratorBuilder<T, R> {
    /// A builder with no columns and the header row enabled.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            show_header: true,
            columns: Vec::new(),
            header_row_transformers: Vec::new(),
            row_transformers: Vec::new(),
        }
    }

    /// Skip header cells. The table keeps its (empty) header section.
    #[must_use]
    pub fn no_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: ColumnDef<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Add several columns in order.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDef<T>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Display-resolved column headed by the accessor's name.
    #[must_use]
    pub fn display_column(self, accessor: Accessor<T>) -> Self {
        let header = Header::Text(accessor.name().to_string());
        self.display_column_with(accessor, header)
    }

    /// Display-resolved column with an empty header cell.
    #[must_use]
    pub fn display_column_untitled(self, accessor: Accessor<T>) -> Self {
        self.display_column_with(accessor, Header::Text(String::new()))
    }

    /// Display-resolved column with the given header text.
    #[must_use]
    pub fn display_column_titled(self, accessor: Accessor<T>, header: impl Into<String>) -> Self {
        self.display_column_with(accessor, Header::Text(header.into()))
    }

    /// Display-resolved column with a node inside the header cell.
    #[must_use]
    pub fn display_column_with_header(self, accessor: Accessor<T>, header: impl Into<Node>) -> Self {
        self.display_column_with(accessor, Header::Node(header.into()))
    }

    /// Transformation column with an empty header cell.
    #[must_use]
    pub fn transform_column<F, V>(self, transform: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue> + 'static,
    {
        self.transform_column_with(transform, Header::Text(String::new()))
    }

    /// Transformation column with the given header text.
    #[must_use]
    pub fn transform_column_titled<F, V>(self, transform: F, header: impl Into<String>) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue> + 'static,
    {
        self.transform_column_with(transform, Header::Text(header.into()))
    }

    /// Transformation column with a node inside the header cell.
    #[must_use]
    pub fn transform_column_with_header<F, V>(self, transform: F, header: impl Into<Node>) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue> + 'static,
    {
        self.transform_column_with(transform, Header::Node(header.into()))
    }

    /// Mutate the header row after its cells are added.
    #[must_use]
    pub fn header_row_transformer<F>(mut self, transform: F) -> Self
    where
        F: Fn(&mut TableRow<'_>) + 'static,
    {
        self.header_row_transformers.push(Box::new(transform));
        self
    }

    /// Mutate every body row after its cells are added.
    #[must_use]
    pub fn row_transformer<F>(mut self, transform: F) -> Self
    where
        F: Fn(&mut TableRow<'_>) + 'static,
    {
        self.row_transformers.push(Box::new(transform));
        self
    }

    /// Finish configuration.
    #[must_use]
    pub fn build(self) -> TableGenerator<T, R> {
        TableGenerator {
            resolver: self.resolver,
            show_header: self.show_header,
            columns: self.columns,
            header_row_transformers: self.header_row_transformers,
            row_transformers: self.row_transformers,
        }
    }

    fn display_column_with(self, accessor: Accessor<T>, header: Header) -> Self {
        self.column(ColumnDef::from_parts(ValueSource::Display(accessor), header))
    }

    fn transform_column_with<F, V>(self, transform: F, header: Header) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue> + 'static,
    {
        let source = ValueSource::Transform(Box::new(move |record: &T| transform(record).into()));
        self.column(ColumnDef::from_parts(source, header))
    }
}
