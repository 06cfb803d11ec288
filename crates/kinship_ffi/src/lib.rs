//! Flutter-facing bindings for the kinship engine.

pub mod api;
