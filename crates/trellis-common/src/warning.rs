//! Toolkit warnings, deduplicated and emitted through the `log` facade.
//!
//! Used by the tag and table components to report lenient handling of
//! caller input (a misplaced `class` attribute, a field path that does not
//! exist on a record) without flooding the log once per row.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about lenient handling of input (emits once per unique message)
///
/// Warnings go to the `trellis` log target, prefixed with `[component]`.
///
/// # Example
/// ```
/// trellis_common::warning::warn_once("tables", "field `sku` not found on record");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_emit = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_emit {
        log::warn!(target: "trellis", "[{component}] {message}");
    }
}

/// Whether `warn_once` has already emitted this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call between independent rendering passes)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
