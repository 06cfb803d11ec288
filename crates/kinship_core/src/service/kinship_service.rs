//! Kinship use-case service.
//!
//! # Responsibility
//! - Provide the public query surface: resolve, reverse lookup,
//!   reciprocity, listing and simplification.
//! - Map engine outcomes onto the display strings callers expect.
//!
//! # Invariants
//! - `get_relationship` never panics and always returns a non-empty string.
//! - Unknown or unresolvable chains yield `UNKNOWN_RELATION`; engine faults
//!   (including a catalog that failed to build) yield `CALCULATION_ERROR`.
//! - Listing APIs return canonical ids in catalog registration order.

use crate::catalog::builtin::builtin_catalog;
use crate::catalog::registry::{CatalogError, RelationCatalog};
use crate::model::atom::{AtomId, RelationAtom, RelationCategory};
use crate::model::resolution::Resolution;
use crate::resolve::error::ResolveError;
use crate::resolve::evaluate::ChainEvaluator;
use crate::resolve::fast_path::{builtin_fast_paths, FastPathTable};
use crate::resolve::reciprocal;
use crate::resolve::reverse::{builtin_reverse_index, ReverseIndex};
use crate::resolve::simplify;
use log::{error, info};
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Result text for chains the model cannot name.
pub const UNKNOWN_RELATION: &str = "未知关系";
/// Result text for internal faults.
pub const CALCULATION_ERROR: &str = "计算错误";

static BUILTIN_SERVICE: OnceCell<KinshipService<'static>> = OnceCell::new();

/// Query facade over one catalog and its curated tables.
#[derive(Debug, Clone, Copy)]
pub struct KinshipService<'a> {
    catalog: &'a RelationCatalog,
    fast_paths: &'a FastPathTable,
    reverse: &'a ReverseIndex,
}

impl<'a> KinshipService<'a> {
    /// Creates a service without cross-checking the tables.
    pub fn new(
        catalog: &'a RelationCatalog,
        fast_paths: &'a FastPathTable,
        reverse: &'a ReverseIndex,
    ) -> Self {
        Self {
            catalog,
            fast_paths,
            reverse,
        }
    }

    /// Creates a service after checking every fast-path target and reverse
    /// chain against the catalog.
    pub fn validated(
        catalog: &'a RelationCatalog,
        fast_paths: &'a FastPathTable,
        reverse: &'a ReverseIndex,
    ) -> Result<Self, CatalogError> {
        fast_paths.validate(catalog)?;
        reverse.validate(catalog)?;
        Ok(Self::new(catalog, fast_paths, reverse))
    }

    /// Returns the shared service over the built-in data.
    pub fn builtin() -> Result<&'static KinshipService<'static>, CatalogError> {
        BUILTIN_SERVICE.get_or_try_init(|| {
            let catalog = builtin_catalog()?;
            KinshipService::validated(catalog, builtin_fast_paths(), builtin_reverse_index())
                .map_err(|err| {
                    error!("event=service_init module=service status=error error={err}");
                    err
                })
        })
    }

    pub fn catalog(&self) -> &'a RelationCatalog {
        self.catalog
    }

    /// Resolves a chain to its full ordered result.
    pub fn resolve<S: AsRef<str>>(&self, chain: &[S]) -> Result<Resolution, ResolveError> {
        ChainEvaluator::new(self.catalog, self.fast_paths).evaluate(chain)
    }

    /// Resolves a chain to one display title.
    ///
    /// # Contract
    /// - Ambiguous results return the first candidate.
    /// - A panic during resolution is caught and reported as
    ///   `CALCULATION_ERROR`.
    pub fn get_relationship<S: AsRef<str>>(&self, chain: &[S]) -> String {
        contained_relationship(|| self.resolve(chain))
    }

    /// Returns the chains known to produce `title`.
    pub fn reverse_query(&self, title: &str) -> Vec<Vec<AtomId>> {
        self.reverse.reverse_query(self.catalog, title)
    }

    /// Returns the atom for a title or synonym.
    pub fn get_relation_info(&self, title: &str) -> Option<&'a RelationAtom> {
        self.catalog.resolve_alias(title.trim())
    }

    pub fn is_reciprocal(&self, a: &str, b: &str) -> bool {
        reciprocal::is_reciprocal(self.catalog, a, b)
    }

    /// Lists one representative title per relation kind.
    pub fn get_all_relations(&self) -> Vec<AtomId> {
        let mut seen = BTreeSet::new();
        self.catalog
            .atoms()
            .filter(|atom| seen.insert(atom.kind))
            .map(|atom| atom.id.clone())
            .collect()
    }

    /// Lists every title at a generation offset from self.
    pub fn get_relations_by_generation(&self, generation: i32) -> Vec<AtomId> {
        self.catalog
            .atoms()
            .filter(|atom| atom.generation == generation)
            .map(|atom| atom.id.clone())
            .collect()
    }

    /// Lists every title of a category (`direct`, `collateral`, `spouse`,
    /// `in_law`). Unknown categories yield an empty list.
    pub fn get_relations_by_type(&self, category: &str) -> Vec<AtomId> {
        let Some(category) = RelationCategory::parse(category.trim()) else {
            info!("event=relations_by_type module=service status=unknown_category");
            return Vec::new();
        };
        self.catalog
            .atoms()
            .filter(|atom| atom.category == category)
            .map(|atom| atom.id.clone())
            .collect()
    }

    pub fn simplify_chain<S: AsRef<str>>(&self, chain: &[S]) -> Vec<String> {
        simplify::simplify_chain(self.catalog, chain)
    }
}

/// Runs `resolve` under `catch_unwind` and maps its outcome to display text.
fn contained_relationship<F>(resolve: F) -> String
where
    F: FnOnce() -> Result<Resolution, ResolveError>,
{
    match catch_unwind(AssertUnwindSafe(resolve)) {
        Ok(Ok(resolution)) => resolution.primary().to_string(),
        Ok(Err(err)) if err.is_internal() => CALCULATION_ERROR.to_string(),
        Ok(Err(_)) => UNKNOWN_RELATION.to_string(),
        Err(_) => {
            error!("event=chain_resolve module=service status=panic");
            CALCULATION_ERROR.to_string()
        }
    }
}

fn builtin_service() -> Option<&'static KinshipService<'static>> {
    KinshipService::builtin().ok()
}

/// Resolves a chain with the built-in data.
///
/// A catalog that failed to build is reported as `ResolveError::Internal`.
pub fn resolve<S: AsRef<str>>(chain: &[S]) -> Result<Resolution, ResolveError> {
    let service = KinshipService::builtin()
        .map_err(|err| ResolveError::Internal(format!("catalog unavailable: {err}")))?;
    service.resolve(chain)
}

/// Resolves a chain to one display title with the built-in data.
pub fn get_relationship<S: AsRef<str>>(chain: &[S]) -> String {
    builtin_service()
        .map(|service| service.get_relationship(chain))
        .unwrap_or_else(|| CALCULATION_ERROR.to_string())
}

pub fn reverse_query(title: &str) -> Vec<Vec<AtomId>> {
    builtin_service()
        .map(|service| service.reverse_query(title))
        .unwrap_or_default()
}

pub fn get_relation_info(title: &str) -> Option<&'static RelationAtom> {
    builtin_service().and_then(|service| service.get_relation_info(title))
}

pub fn is_reciprocal(a: &str, b: &str) -> bool {
    builtin_service().is_some_and(|service| service.is_reciprocal(a, b))
}

pub fn get_all_relations() -> Vec<AtomId> {
    builtin_service()
        .map(|service| service.get_all_relations())
        .unwrap_or_default()
}

pub fn get_relations_by_generation(generation: i32) -> Vec<AtomId> {
    builtin_service()
        .map(|service| service.get_relations_by_generation(generation))
        .unwrap_or_default()
}

pub fn get_relations_by_type(category: &str) -> Vec<AtomId> {
    builtin_service()
        .map(|service| service.get_relations_by_type(category))
        .unwrap_or_default()
}

pub fn simplify_chain<S: AsRef<str>>(chain: &[S]) -> Vec<String> {
    builtin_service()
        .map(|service| service.simplify_chain(chain))
        .unwrap_or_else(|| chain.iter().map(|token| token.as_ref().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::{contained_relationship, KinshipService, CALCULATION_ERROR, UNKNOWN_RELATION};
    use crate::catalog::builtin::build_builtin_catalog;
    use crate::catalog::registry::RelationCatalog;
    use crate::model::resolution::Resolution;
    use crate::resolve::error::ResolveError;
    use crate::resolve::fast_path::FastPathTable;
    use crate::resolve::reverse::ReverseIndex;

    fn builtin() -> &'static KinshipService<'static> {
        KinshipService::builtin().expect("builtin service initializes")
    }

    #[test]
    fn relationship_takes_first_candidate() {
        assert_eq!(builtin().get_relationship(&["爸爸", "姐姐", "儿子"]), "表哥");
        assert_eq!(builtin().get_relationship(&["爸爸", "儿子"]), "哥哥");
    }

    #[test]
    fn relationship_reports_unknown_chains() {
        assert_eq!(builtin().get_relationship(&["不存在的词"]), UNKNOWN_RELATION);
        assert_eq!(builtin().get_relationship(&["表哥", "儿子"]), UNKNOWN_RELATION);
    }

    #[test]
    fn relationship_reports_internal_faults() {
        let catalog = RelationCatalog::new();
        let fast_paths = FastPathTable::new();
        let reverse = ReverseIndex::new();
        let service = KinshipService::new(&catalog, &fast_paths, &reverse);
        assert_eq!(service.get_relationship(&["爸爸"]), CALCULATION_ERROR);
    }

    #[test]
    fn panicking_resolution_is_reported_as_calculation_error() {
        let text = contained_relationship(|| -> Result<Resolution, ResolveError> {
            panic!("rule table out of sync with catalog")
        });
        assert_eq!(text, CALCULATION_ERROR);
    }

    #[test]
    fn contained_outcomes_map_to_display_text() {
        assert_eq!(
            contained_relationship(|| Ok(Resolution::Ambiguous(vec![
                "表哥".to_string(),
                "表弟".to_string(),
            ]))),
            "表哥"
        );
        assert_eq!(
            contained_relationship(|| Err(ResolveError::UnknownToken("阿姨丈".to_string()))),
            UNKNOWN_RELATION
        );
        assert_eq!(
            contained_relationship(|| Err(ResolveError::Internal("missing atom".to_string()))),
            CALCULATION_ERROR
        );
    }

    #[test]
    fn validated_rejects_dangling_table_entries() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        let mut fast_paths = FastPathTable::new();
        fast_paths.insert(&["爸爸", "表叔"], &["表叔公"]);
        let reverse = ReverseIndex::new();
        assert!(KinshipService::validated(&catalog, &fast_paths, &reverse).is_err());
    }

    #[test]
    fn all_relations_keep_one_title_per_kind() {
        let all = builtin().get_all_relations();
        assert!(all.iter().any(|id| id == "爷爷"));
        assert!(!all.iter().any(|id| id == "外公"));
        assert!(all.iter().any(|id| id == "自己"));
    }

    #[test]
    fn relations_by_generation_follow_registration_order() {
        assert_eq!(
            builtin().get_relations_by_generation(2),
            vec![
                "爷爷", "奶奶", "外公", "外婆", "伯祖父", "叔祖父", "姑祖母", "舅公", "姨婆",
                "外伯祖父", "外叔祖父", "外姑祖母", "外舅公", "外姨婆",
            ]
        );
        assert!(builtin().get_relations_by_generation(9).is_empty());
    }

    #[test]
    fn relations_by_type_filter_on_category() {
        let spouses = builtin().get_relations_by_type("spouse");
        assert_eq!(spouses, vec!["丈夫", "妻子"]);
        assert!(builtin().get_relations_by_type("in_law").iter().any(|id| id == "岳父"));
        assert!(builtin().get_relations_by_type("friend").is_empty());
    }

    #[test]
    fn relation_info_accepts_synonyms() {
        let atom = builtin().get_relation_info("姥姥").expect("maternal grandmother");
        assert_eq!(atom.id, "外婆");
        assert!(builtin().get_relation_info("不存在的词").is_none());
    }
}
