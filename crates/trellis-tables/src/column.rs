use std::fmt;

use thiserror::Error;
use trellis_tags::{Node, TableRow};

use crate::resolver::{DisplayResolver, ResolveError};
use crate::{Accessor, CellValue};

/// Mutation applied to a single cell (`td` or `th`) after it is filled.
pub type CellTransformer = Box<dyn Fn(&mut Node)>;

/// Raw transformation from a record to cell content.
pub type TransformFn<T> = Box<dyn Fn(&T) -> CellValue>;

/// Where a column's cell content comes from.
pub enum ValueSource<T> {
    /// Extract with the accessor and render through the display resolver.
    Display(Accessor<T>),
    /// Call the function and insert its result directly; the display
    /// resolver is never involved.
    Transform(TransformFn<T>),
}

impl<T> fmt::Debug for ValueSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display(accessor) => f.debug_tuple("Display").field(accessor).finish(),
            Self::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Content of a column's header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Text set on the `th`.
    Text(String),
    /// A node appended as the `th`'s child.
    Node(Node),
}

impl From<&str> for Header {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Header {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Header {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// Rejected column configuration, reported by [`ColumnDefBuilder::build`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    /// Neither an accessor nor a transformation was given.
    #[error("column has neither a display accessor nor a transformation")]
    MissingValueSource,
    /// Both an accessor and a transformation were given.
    #[error("column `{accessor}` has both a display accessor and a transformation")]
    ConflictingValueSource {
        /// Name of the accessor that was given alongside a transformation.
        accessor: String,
    },
    /// Both header text and a header node were given.
    #[error("column header has both text `{text}` and a node")]
    ConflictingHeader {
        /// The header text that was given alongside a node.
        text: String,
    },
    /// A transformation column without a header; there is no accessor name
    /// to fall back on.
    #[error("transformation column needs header text or a header node")]
    MissingHeader,
}

/// One table column: where its values come from, its header, and the
/// transformers applied to its cells.
///
/// Immutable once built; create one with [`ColumnDef::builder`],
/// [`ColumnDef::display`] or [`ColumnDef::transform`].
pub struct ColumnDef<T> {
    source: ValueSource<T>,
    header: Header,
    column_transformers: Vec<CellTransformer>,
    header_transformers: Vec<CellTransformer>,
}

impl<T> ColumnDef<T> {
    /// An empty builder.
    #[must_use]
    pub fn builder() -> ColumnDefBuilder<T> {
        ColumnDefBuilder::default()
    }

    /// A builder for a display-resolved column.
    ///
    /// Without an explicit header, the header text is the accessor's name.
    #[must_use]
    pub fn display(accessor: Accessor<T>) -> ColumnDefBuilder<T> {
        Self::builder().display(accessor)
    }

    /// A builder for a raw transformation column.
    #[must_use]
    pub fn transform<F, V>(transform: F) -> ColumnDefBuilder<T>
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue> + 'static,
    {
        Self::builder().transform(transform)
    }

    /// Unchecked construction for callers that cannot produce an invalid
    /// combination.
    pub(crate) fn from_parts(source: ValueSource<T>, header: Header) -> Self {
        Self {
            source,
            header,
            column_transformers: Vec::new(),
            header_transformers: Vec::new(),
        }
    }

    /// Where the cell content comes from.
    #[must_use]
    pub const fn source(&self) -> &ValueSource<T> {
        &self.source
    }

    /// The resolved header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Whether cells go through the display resolver.
    #[must_use]
    pub const fn is_display_resolved(&self) -> bool {
        matches!(self.source, ValueSource::Display(_))
    }

    /// A label for diagnostics: the accessor name, else the header text.
    #[must_use]
    pub fn name(&self) -> &str {
        match (&self.source, &self.header) {
            (ValueSource::Display(accessor), _) => accessor.name(),
            (ValueSource::Transform(_), Header::Text(text)) => text.as_str(),
            (ValueSource::Transform(_), Header::Node(node)) => node.tag_name(),
        }
    }

    /// Append this column's header cell to `row`.
    pub(crate) fn add_header_cell(&self, row: &mut TableRow<'_>) {
        let cell = match &self.header {
            Header::Node(node) => row.header().append(node.clone()),
            Header::Text(text) => row.header_text(text.as_str()),
        };
        for transform in &self.header_transformers {
            transform(&mut *cell);
        }
    }

    /// Append this column's cell for `record` to `row`.
    ///
    /// The cell is only created once its content is available, so a
    /// resolver error leaves the row untouched.
    pub(crate) fn add_body_cell<R>(
        &self,
        row: &mut TableRow<'_>,
        record: &T,
        resolver: &R,
    ) -> Result<(), ResolveError>
    where
        R: DisplayResolver<T> + ?Sized,
    {
        let cell = match &self.source {
            ValueSource::Display(accessor) => {
                let rendered = resolver.resolve(record, accessor)?;
                row.cell().append(rendered)
            }
            ValueSource::Transform(transform) => match transform(record) {
                CellValue::Node(node) => row.cell().append(node),
                CellValue::Text(text) => row.cell_text(text),
                CellValue::Empty => row.cell_text(""),
            },
        };
        for transform in &self.column_transformers {
            transform(&mut *cell);
        }
        Ok(())
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("source", &self.source)
            .field("header", &self.header)
            .field("column_transformers", &self.column_transformers.len())
            .field("header_transformers", &self.header_transformers.len())
            .finish()
    }
}

/// Accumulates a column's configuration; [`ColumnDefBuilder::build`]
/// validates it.
pub struct ColumnDefBuilder<T> {
    accessor: Option<Accessor<T>>,
    transform: Option<TransformFn<T>>,
    header_text: Option<String>,
    header_node: Option<Node>,
    column_transformers: Vec<CellTransformer>,
    header_transformers: Vec<CellTransformer>,
}

impl<T> Default for ColumnDefBuilder<T> {
    fn default() -> Self {
        Self {
            accessor: None,
            transform: None,
            header_text: None,
            header_node: None,
            column_transformers: Vec::new(),
            header_transformers: Vec::new(),
        }
    }
}

impl<T> ColumnDefBuilder<T> {
    /// Resolve cells by extracting with `accessor` and displaying the value.
    #[must_use]
    pub fn display(mut self, accessor: Accessor<T>) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Fill cells with whatever `transform` returns for the record.
    #[must_use]
    pub fn transform<F, V>(mut self, transform: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue> + 'static,
    {
        self.transform = Some(Box::new(move |record: &T| transform(record).into()));
        self
    }

    /// Header text.
    #[must_use]
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header_text = Some(text.into());
        self
    }

    /// A node placed inside the header cell instead of text.
    #[must_use]
    pub fn header_node(mut self, node: impl Into<Node>) -> Self {
        self.header_node = Some(node.into());
        self
    }

    /// Mutate each body cell of this column after it is filled.
    #[must_use]
    pub fn column_transformer<F>(mut self, transform: F) -> Self
    where
        F: Fn(&mut Node) + 'static,
    {
        self.column_transformers.push(Box::new(transform));
        self
    }

    /// Mutate this column's header cell after it is filled.
    #[must_use]
    pub fn header_transformer<F>(mut self, transform: F) -> Self
    where
        F: Fn(&mut Node) + 'static,
    {
        self.header_transformers.push(Box::new(transform));
        self
    }

    /// Validate and build the column.
    ///
    /// # Errors
    ///
    /// Returns a [`ColumnError`] when the value source is missing or
    /// doubled, when both header forms are given, or when a transformation
    /// column has no header.
    pub fn build(self) -> Result<ColumnDef<T>, ColumnError> {
        let source = match (self.accessor, self.transform) {
            (Some(accessor), None) => ValueSource::Display(accessor),
            (None, Some(transform)) => ValueSource::Transform(transform),
            (Some(accessor), Some(_)) => {
                return Err(ColumnError::ConflictingValueSource {
                    accessor: accessor.name().to_string(),
                });
            }
            (None, None) => return Err(ColumnError::MissingValueSource),
        };

        let header = match (self.header_text, self.header_node, &source) {
            (Some(text), Some(_), _) => return Err(ColumnError::ConflictingHeader { text }),
            (Some(text), None, _) => Header::Text(text),
            (None, Some(node), _) => Header::Node(node),
            (None, None, ValueSource::Display(accessor)) => {
                Header::Text(accessor.name().to_string())
            }
            (None, None, ValueSource::Transform(_)) => return Err(ColumnError::MissingHeader),
        };

        Ok(ColumnDef {
            source,
            header,
            column_transformers: self.column_transformers,
            header_transformers: self.header_transformers,
        })
    }
}
