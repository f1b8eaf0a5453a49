//! Common utilities for the Trellis markup toolkit.
//!
//! This crate provides shared infrastructure used by all Trellis components:
//! - **Warning System** - deduplicated warnings routed through the `log` facade

pub mod warning;
