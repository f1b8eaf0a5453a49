use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::ResolveError;

type ExtractFn<T> = dyn Fn(&T) -> Value;
type SerializeFn<T> = dyn Fn(&T) -> Result<Value, serde_json::Error>;

enum Source<T> {
    Function(Rc<ExtractFn<T>>),
    Field {
        path: Rc<str>,
        serialize: Rc<SerializeFn<T>>,
    },
}

/// A named way of reading one value out of a record.
///
/// The name doubles as the column's default header text and as the key
/// display conventions match on. Clones share the same extraction function,
/// and [`Accessor::same_as`] tells whether two handles are the same accessor.
pub struct Accessor<T> {
    name: Rc<str>,
    source: Source<T>,
}

impl<T> Accessor<T> {
    /// Create an accessor from a name and an extraction function.
    ///
    /// ```
    /// use serde_json::json;
    /// use trellis_tables::Accessor;
    ///
    /// struct Product { code: String }
    ///
    /// let code = Accessor::new("Code", |p: &Product| json!(p.code));
    /// assert_eq!(code.extract(&Product { code: "1111".into() }), Ok(json!("1111")));
    /// ```
    pub fn new<F>(name: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> Value + 'static,
    {
        Self {
            name: Rc::from(name.into()),
            source: Source::Function(Rc::new(extract)),
        }
    }

    /// The accessor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dot-separated path of a [`Accessor::field`] accessor.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match &self.source {
            Source::Function(_) => None,
            Source::Field { path, .. } => Some(&**path),
        }
    }

    /// Read this accessor's value from `record`.
    ///
    /// # Errors
    ///
    /// Field accessors fail with [`ResolveError::UnknownField`] when the path
    /// does not exist on the record, and with [`ResolveError::Failed`] when
    /// the record cannot be serialized. A field that exists and is null
    /// yields `Value::Null`.
    pub fn extract(&self, record: &T) -> Result<Value, ResolveError> {
        match &self.source {
            Source::Function(extract) => Ok(extract(record)),
            Source::Field { path, serialize } => {
                let data = self.serialize(&**serialize, record)?;
                self.lookup(&data, path)
            }
        }
    }

    /// Like [`Accessor::extract`], reusing the record serialization held in
    /// `row` while a row is open.
    ///
    /// # Errors
    ///
    /// Same as [`Accessor::extract`].
    pub fn extract_in(&self, record: &T, row: &RowCache) -> Result<Value, ResolveError> {
        let Source::Field { path, serialize } = &self.source else {
            return self.extract(record);
        };
        if !row.open.get() {
            return self.extract(record);
        }

        let mut slot = row.data.borrow_mut();
        let data = match slot.take() {
            Some(data) => data,
            None => self.serialize(&**serialize, record)?,
        };
        let value = self.lookup(&data, path);
        *slot = Some(data);
        value
    }

    /// Whether `other` is a clone of this accessor (not merely equal by name).
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Source::Function(a), Source::Function(b)) => Rc::ptr_eq(a, b),
            (Source::Field { serialize: a, .. }, Source::Field { serialize: b, .. }) => {
                Rc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    fn serialize(&self, serialize: &SerializeFn<T>, record: &T) -> Result<Value, ResolveError> {
        serialize(record).map_err(|e| ResolveError::Failed {
            column: self.name.to_string(),
            message: format!("cannot serialize record: {e}"),
        })
    }

    fn lookup(&self, data: &Value, path: &str) -> Result<Value, ResolveError> {
        lookup(data, path)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownField {
                column: self.name.to_string(),
                path: path.to_owned(),
            })
    }
}

impl<T: Serialize + 'static> Accessor<T> {
    /// An accessor reading a serialized field by dot-separated path
    /// (`"author.name"`); the path is also the accessor's name.
    pub fn field(path: impl Into<String>) -> Self {
        let path: Rc<str> = Rc::from(path.into());
        Self {
            name: Rc::clone(&path),
            source: Source::Field {
                path,
                serialize: Rc::new(|record: &T| serde_json::to_value(record)),
            },
        }
    }
}

/// Walk nested objects along a dot-separated path.
fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |current, part| match current {
        Value::Object(map) => map.get(part),
        _ => None,
    })
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            Source::Function(extract) => Source::Function(Rc::clone(extract)),
            Source::Field { path, serialize } => Source::Field {
                path: Rc::clone(path),
                serialize: Rc::clone(serialize),
            },
        };
        Self {
            name: Rc::clone(&self.name),
            source,
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The serialized form of the record whose row is being rendered.
///
/// Field accessors share it so a record is serialized once per row rather
/// than once per cell. Outside an open row it holds nothing and accessors
/// serialize on every call.
#[derive(Debug, Default)]
pub struct RowCache {
    open: Cell<bool>,
    data: RefCell<Option<Value>>,
}

impl RowCache {
    /// Start a row; the next field lookup serializes the record.
    pub fn open(&self) {
        self.open.set(true);
        self.data.borrow_mut().take();
    }

    /// End the row and drop its serialization.
    pub fn close(&self) {
        self.open.set(false);
        self.data.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_path() {
        let data = json!({"author": {"name": "ada"}, "n": 1});
        assert_eq!(lookup(&data, "author.name"), Some(&json!("ada")));
        assert_eq!(lookup(&data, "n"), Some(&json!(1)));
    }

    #[test]
    fn test_lookup_missing_or_through_scalar() {
        let data = json!({"n": 1, "empty": null});
        assert_eq!(lookup(&data, "missing"), None);
        assert_eq!(lookup(&data, "n.deeper"), None);
        assert_eq!(lookup(&data, "empty"), Some(&Value::Null));
    }

    #[test]
    fn test_closed_cache_keeps_nothing() {
        let cache = RowCache::default();
        cache.open();
        *cache.data.borrow_mut() = Some(json!({"n": 1}));
        cache.close();
        assert!(cache.data.borrow().is_none());
        assert!(!cache.open.get());
    }
}
