//! Kinship domain model.
//!
//! # Responsibility
//! - Define relation atoms, their closed kind set, and resolution outcomes.
//!
//! # Invariants
//! - Atoms describe relation *types*, never individual people.
//! - Every atom is identified by its canonical title.

pub mod atom;
pub mod kind;
pub mod resolution;
