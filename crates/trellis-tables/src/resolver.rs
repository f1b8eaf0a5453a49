use serde_json::Value;
use strum_macros::Display;
use thiserror::Error;
use trellis_tags::Node;

use crate::Accessor;

/// Turns one record's value for a column into a rendered fragment.
///
/// How a value is displayed (formatting, conventions per type or per
/// column) is entirely the resolver's business; the generator only asks for
/// a node and inserts it into the cell.
///
/// The record is passed to every call. [`DisplayResolver::enter_record`]
/// and [`DisplayResolver::leave_record`] additionally bracket each row, for
/// resolvers that keep per-record state.
pub trait DisplayResolver<T> {
    /// Called once per row, before the row's first [`DisplayResolver::resolve`].
    ///
    /// Rows without display-resolved columns never trigger it.
    fn enter_record(&self, _record: &T) {}

    /// Called once per entered row after its last cell, also when a cell
    /// failed.
    fn leave_record(&self, _record: &T) {}

    /// Render `accessor`'s value for `record`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when the value cannot be displayed; the
    /// generator aborts the table and hands the error to its caller.
    fn resolve(&self, record: &T, accessor: &Accessor<T>) -> Result<Node, ResolveError>;
}

impl<T, R: DisplayResolver<T> + ?Sized> DisplayResolver<T> for &R {
    fn enter_record(&self, record: &T) {
        (**self).enter_record(record);
    }

    fn leave_record(&self, record: &T) {
        (**self).leave_record(record);
    }

    fn resolve(&self, record: &T, accessor: &Accessor<T>) -> Result<Node, ResolveError> {
        (**self).resolve(record, accessor)
    }
}

impl<T, R: DisplayResolver<T> + ?Sized> DisplayResolver<T> for Box<R> {
    fn enter_record(&self, record: &T) {
        (**self).enter_record(record);
    }

    fn leave_record(&self, record: &T) {
        (**self).leave_record(record);
    }

    fn resolve(&self, record: &T, accessor: &Accessor<T>) -> Result<Node, ResolveError> {
        (**self).resolve(record, accessor)
    }
}

/// The JSON shape of an extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl ValueKind {
    /// Classify a value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// Why a value could not be displayed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No registered convention applies to the value.
    #[error("no display convention for column `{column}` ({kind} value)")]
    NoConvention {
        /// Name of the accessor being resolved.
        column: String,
        /// Shape of the value that found no convention.
        kind: ValueKind,
    },
    /// A field accessor's path does not exist on the record.
    #[error("column `{column}`: no field `{path}` on record")]
    UnknownField {
        /// Name of the accessor being resolved.
        column: String,
        /// The path that was not found.
        path: String,
    },
    /// The resolver recognised the value but failed to render it.
    #[error("cannot display column `{column}`: {message}")]
    Failed {
        /// Name of the accessor being resolved.
        column: String,
        /// What went wrong.
        message: String,
    },
}
