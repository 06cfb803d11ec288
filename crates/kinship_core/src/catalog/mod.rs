//! Relation catalog: atom registry and built-in data.
//!
//! # See also
//! - `crate::resolve` for the rules that read this catalog.

pub mod builtin;
pub mod registry;
