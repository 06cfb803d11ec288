//! Core domain logic for kinship-title resolution.
//! This crate is the single source of truth for kinship invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod service;

pub use catalog::builtin::{build_builtin_catalog, builtin_catalog, SELF_ATOM_ID};
pub use catalog::registry::{CatalogError, RelationCatalog};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::atom::{
    AtomId, AtomValidationError, Gender, LineageBranch, RelationAtom, RelationCategory,
};
pub use model::kind::RelationKind;
pub use model::resolution::Resolution;
pub use resolve::chain::{clean, normalize, segment_chain};
pub use resolve::error::ResolveError;
pub use resolve::evaluate::ChainEvaluator;
pub use resolve::fast_path::{builtin_fast_paths, FastPathTable};
pub use resolve::reverse::{builtin_reverse_index, ReverseIndex};
pub use service::kinship_service::{
    get_all_relations, get_relation_info, get_relations_by_generation, get_relations_by_type,
    get_relationship, is_reciprocal, resolve, reverse_query, simplify_chain, KinshipService,
    CALCULATION_ERROR, UNKNOWN_RELATION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
