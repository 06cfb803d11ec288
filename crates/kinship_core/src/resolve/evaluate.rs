//! Chain evaluation.
//!
//! # Responsibility
//! - Turn a raw relation chain into a `Resolution`:
//!   clean, normalize, fast path, then left-to-right step folding from self.
//!
//! # Invariants
//! - An empty chain (after cleaning) resolves to the self anchor.
//! - Fast-path hits short-circuit the fold.
//! - A disjunction reached mid-chain is carried forward candidate by
//!   candidate; the surviving order is the order of the input candidates.

use crate::catalog::registry::RelationCatalog;
use crate::model::atom::AtomId;
use crate::model::resolution::Resolution;
use crate::resolve::chain::{clean, normalize_all};
use crate::resolve::error::ResolveError;
use crate::resolve::fast_path::FastPathTable;
use crate::resolve::step::step;
use log::{debug, error, info};

/// Evaluates chains against one catalog and fast-path table.
#[derive(Debug, Clone, Copy)]
pub struct ChainEvaluator<'a> {
    catalog: &'a RelationCatalog,
    fast_paths: &'a FastPathTable,
}

impl<'a> ChainEvaluator<'a> {
    pub fn new(catalog: &'a RelationCatalog, fast_paths: &'a FastPathTable) -> Self {
        Self {
            catalog,
            fast_paths,
        }
    }

    /// Resolves a raw chain of relation words.
    pub fn evaluate<S: AsRef<str>>(&self, chain: &[S]) -> Result<Resolution, ResolveError> {
        let cleaned = clean(chain);
        let result = self.evaluate_cleaned(&cleaned);
        match &result {
            Ok(resolution) => debug!(
                "event=chain_resolve module=resolve status=ok tokens={} candidates={}",
                cleaned.len(),
                resolution.candidates().len()
            ),
            Err(err) if err.is_internal() => error!(
                "event=chain_resolve module=resolve status=error reason={} tokens={} error={err}",
                err.reason(),
                cleaned.len()
            ),
            Err(err) => info!(
                "event=chain_resolve module=resolve status=unknown reason={} tokens={}",
                err.reason(),
                cleaned.len()
            ),
        }
        result
    }

    fn evaluate_cleaned(&self, cleaned: &[String]) -> Result<Resolution, ResolveError> {
        if cleaned.is_empty() {
            let anchor = self
                .catalog
                .self_atom()
                .ok_or_else(|| ResolveError::Internal("catalog has no self atom".to_string()))?;
            return Ok(Resolution::Resolved(anchor.id.clone()));
        }

        let normalized = normalize_all(self.catalog, cleaned);
        if let Some(hit) = self.fast_paths.lookup(self.catalog, &normalized) {
            for candidate in hit.resolution.candidates() {
                if self.catalog.get_atom(candidate).is_none() {
                    return Err(ResolveError::Internal(format!(
                        "fast-path target `{candidate}` is not registered"
                    )));
                }
            }
            debug!(
                "event=fast_path_hit module=resolve route={} tokens={}",
                hit.route.as_str(),
                normalized.len()
            );
            return Ok(hit.resolution);
        }

        self.fold(&normalized)
    }

    fn fold(&self, normalized: &[String]) -> Result<Resolution, ResolveError> {
        let anchor = self
            .catalog
            .self_atom()
            .ok_or_else(|| ResolveError::Internal("catalog has no self atom".to_string()))?;
        let mut current: Vec<AtomId> = vec![anchor.id.clone()];

        for token in normalized {
            let mut next: Vec<AtomId> = Vec::new();
            let mut first_error: Option<ResolveError> = None;

            for from in &current {
                match step(self.catalog, from, token) {
                    Ok(resolution) => {
                        for candidate in resolution.candidates() {
                            if !next.contains(candidate) {
                                next.push(candidate.clone());
                            }
                        }
                    }
                    Err(err) if err.is_internal() => return Err(err),
                    Err(err) => {
                        first_error.get_or_insert(err);
                    }
                }
            }

            if next.is_empty() {
                return Err(first_error.unwrap_or_else(|| {
                    ResolveError::Internal(format!("no candidates while stepping `{token}`"))
                }));
            }
            current = next;
        }

        Resolution::from_candidates(current)
            .ok_or_else(|| ResolveError::Internal("fold produced no candidates".to_string()))
    }
}
