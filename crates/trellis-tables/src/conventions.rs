//! Convention-based display resolution.
//!
//! A [`ConventionResolver`] holds an ordered list of conventions, each a
//! matcher (column name, value kind or predicate) paired with a builder that
//! turns the matched value into a node. The first matching convention wins;
//! an optional fallback catches everything else.
//!
//! ```
//! use serde_json::json;
//! use trellis_tables::{Accessor, ConventionResolver, DisplayResolver};
//!
//! struct Product { name: String }
//!
//! let resolver = ConventionResolver::standard();
//! let name = Accessor::new("name", |p: &Product| json!(p.name));
//! let node = resolver.resolve(&Product { name: "DVR".into() }, &name).unwrap();
//! assert_eq!(node.render(), "<span>DVR</span>");
//! ```

use serde_json::Value;
use trellis_tags::{Node, TagName};

use crate::resolver::{DisplayResolver, ResolveError, ValueKind};
use crate::{Accessor, RowCache};

type BuildFn = Box<dyn Fn(&Value) -> Node>;
type PredicateFn = Box<dyn Fn(&Value) -> bool>;

enum Matcher {
    Column(String),
    Kind(ValueKind),
    Predicate(PredicateFn),
}

impl Matcher {
    fn matches(&self, column: &str, value: &Value) -> bool {
        match self {
            Self::Column(name) => name == column,
            Self::Kind(kind) => *kind == ValueKind::of(value),
            Self::Predicate(predicate) => predicate(value),
        }
    }
}

struct Convention {
    matcher: Matcher,
    build: BuildFn,
}

/// Display resolver driven by registered conventions.
///
/// Works for any record type: conventions look only at the accessor's name
/// and the extracted value. Between `enter_record` and `leave_record` the
/// record's serialization is shared by all field accessors of the row.
#[derive(Default)]
pub struct ConventionResolver {
    conventions: Vec<Convention>,
    fallback: Option<BuildFn>,
    row: RowCache,
}

impl ConventionResolver {
    /// A resolver with no conventions; every value fails to resolve until
    /// some are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver preloaded with conventions for every value kind except
    /// objects:
    ///
    /// - strings, booleans: `<span>` with the text
    /// - numbers: `<span class="number">`
    /// - arrays: `<span>` with the elements joined by `", "`
    /// - null: an empty `<span>`
    #[must_use]
    pub fn standard() -> Self {
        Self::new().with_standard()
    }

    /// Append the [`ConventionResolver::standard`] conventions after those
    /// already registered, so earlier column conventions take precedence.
    #[must_use]
    pub fn with_standard(self) -> Self {
        self.for_kind(ValueKind::String, span)
            .for_kind(ValueKind::Bool, span)
            .for_kind(ValueKind::Number, |value| {
                let mut node = span(value);
                node.add_class("number");
                node
            })
            .for_kind(ValueKind::Array, span)
            .for_kind(ValueKind::Null, span)
    }

    /// Display a specific column with `build`.
    #[must_use]
    pub fn for_column<F>(self, column: impl Into<String>, build: F) -> Self
    where
        F: Fn(&Value) -> Node + 'static,
    {
        self.push(Matcher::Column(column.into()), build)
    }

    /// Display every value of the given kind with `build`.
    #[must_use]
    pub fn for_kind<F>(self, kind: ValueKind, build: F) -> Self
    where
        F: Fn(&Value) -> Node + 'static,
    {
        self.push(Matcher::Kind(kind), build)
    }

    /// Display values accepted by `predicate` with `build`.
    #[must_use]
    pub fn when<P, F>(self, predicate: P, build: F) -> Self
    where
        P: Fn(&Value) -> bool + 'static,
        F: Fn(&Value) -> Node + 'static,
    {
        self.push(Matcher::Predicate(Box::new(predicate)), build)
    }

    /// Display anything no convention matched with `build`.
    #[must_use]
    pub fn fallback<F>(mut self, build: F) -> Self
    where
        F: Fn(&Value) -> Node + 'static,
    {
        self.fallback = Some(Box::new(build));
        self
    }

    /// Number of registered conventions (the fallback not included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    /// Whether no conventions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    fn push<F>(mut self, matcher: Matcher, build: F) -> Self
    where
        F: Fn(&Value) -> Node + 'static,
    {
        self.conventions.push(Convention {
            matcher,
            build: Box::new(build),
        });
        self
    }
}

impl<T> DisplayResolver<T> for ConventionResolver {
    fn enter_record(&self, _record: &T) {
        self.row.open();
    }

    fn leave_record(&self, _record: &T) {
        self.row.close();
    }

    fn resolve(&self, record: &T, accessor: &Accessor<T>) -> Result<Node, ResolveError> {
        let value = accessor.extract_in(record, &self.row)?;
        let build = self
            .conventions
            .iter()
            .find(|c| c.matcher.matches(accessor.name(), &value))
            .map(|c| &c.build)
            .or(self.fallback.as_ref())
            .ok_or_else(|| ResolveError::NoConvention {
                column: accessor.name().to_string(),
                kind: ValueKind::of(&value),
            })?;
        Ok(build(&value))
    }
}

/// Plain display text for a value: strings unquoted, null empty, arrays
/// joined with `", "`, everything else in JSON form.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// A `<span>` holding the value's [`display_text`].
#[must_use]
pub fn span(value: &Value) -> Node {
    let mut node = Node::new(TagName::Span);
    node.set_text(display_text(value));
    node
}
