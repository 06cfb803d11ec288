//! Core use-case services.
//!
//! # Responsibility
//! - Expose kinship queries as use-case level APIs.
//! - Keep UI/FFI layers decoupled from catalog and rule details.

pub mod kinship_service;
