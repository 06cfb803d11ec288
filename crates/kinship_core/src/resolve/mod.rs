//! Kinship resolution engine.
//!
//! # Responsibility
//! - Prepare raw chains (segment, clean, normalize).
//! - Resolve chains through curated fast paths and single-step rules.
//! - Answer reverse, reciprocity and simplification queries.
//!
//! # Invariants
//! - Every function here is pure over an immutable catalog and tables.
//! - Results are canonical atom ids or an ordered disjunction of them.

pub mod chain;
pub mod error;
pub mod evaluate;
pub mod fast_path;
pub mod reciprocal;
pub mod reverse;
pub mod simplify;
pub mod step;
