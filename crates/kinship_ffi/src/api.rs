//! FFI use-case API for Flutter-facing kinship calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level kinship queries to Dart via FRB.
//! - Join ambiguous results into display strings at this boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Inputs and outputs are plain UTF-8 strings and string lists.

use kinship_core::{
    core_version as core_version_inner, get_all_relations, get_relation_info,
    get_relations_by_generation, get_relations_by_type, get_relationship as get_relationship_inner,
    init_logging as init_logging_inner, is_reciprocal as is_reciprocal_inner,
    resolve as resolve_inner, reverse_query as reverse_query_inner, segment_chain,
    simplify_chain as simplify_chain_inner, Gender, LineageBranch, RelationAtom, Resolution,
    ResolveError, CALCULATION_ERROR, UNKNOWN_RELATION,
};
use log::{error, info};

/// Separator used when an ambiguous result is shown as one string.
const DISPLAY_SEPARATOR: &str = "或";

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Resolves a pre-segmented chain to one title.
///
/// # FFI contract
/// - Ambiguous results return the first candidate.
/// - Returns `未知关系` or `计算错误` instead of failing.
#[flutter_rust_bridge::frb(sync)]
pub fn get_relationship(chain: Vec<String>) -> String {
    get_relationship_inner(&chain)
}

/// Resolves a free-text phrase such as `爸爸的姐姐的儿子`.
#[flutter_rust_bridge::frb(sync)]
pub fn get_relationship_text(text: String) -> String {
    get_relationship_inner(&segment_chain(text.as_str()))
}

/// Returns every candidate title for a chain, in preference order.
///
/// Empty when the chain cannot be resolved, whatever the cause. Use
/// `get_relationship_display` when faults must be told apart.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_candidates(chain: Vec<String>) -> Vec<String> {
    match resolve_inner(&chain) {
        Ok(resolution) => resolution.candidates().to_vec(),
        Err(err) => {
            log_failure(&err);
            Vec::new()
        }
    }
}

/// Resolves a chain and joins every candidate for display (`表哥或表弟`).
///
/// # FFI contract
/// - Unknown or unresolvable chains return `未知关系`.
/// - Engine faults return `计算错误`.
#[flutter_rust_bridge::frb(sync)]
pub fn get_relationship_display(chain: Vec<String>) -> String {
    display_text(resolve_inner(&chain))
}

fn display_text(outcome: Result<Resolution, ResolveError>) -> String {
    match outcome {
        Ok(resolution) => resolution.candidates().join(DISPLAY_SEPARATOR),
        Err(err) => {
            log_failure(&err);
            if err.is_internal() {
                CALCULATION_ERROR.to_string()
            } else {
                UNKNOWN_RELATION.to_string()
            }
        }
    }
}

fn log_failure(err: &ResolveError) {
    if err.is_internal() {
        error!(
            "event=ffi_resolve module=ffi status=error reason={}",
            err.reason()
        );
    } else {
        info!(
            "event=ffi_resolve module=ffi status=unknown reason={}",
            err.reason()
        );
    }
}

/// Returns the chains known to produce `title`.
#[flutter_rust_bridge::frb(sync)]
pub fn reverse_query(title: String) -> Vec<Vec<String>> {
    reverse_query_inner(title.as_str())
}

/// Flat relation metadata for UI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationInfo {
    /// Canonical title.
    pub id: String,
    /// `male|female|unknown`.
    pub gender: String,
    /// Kebab-case relation kind.
    pub relation: String,
    /// Generation offset from self.
    pub generation: i32,
    /// `paternal|maternal|both|self|spouse|in_law`.
    pub branch: String,
    /// `direct|collateral|spouse|in_law`.
    pub category: String,
    pub reverse: Vec<String>,
    pub spouse: Option<String>,
    pub parents: Vec<String>,
    pub synonyms: Vec<String>,
}

impl From<&RelationAtom> for RelationInfo {
    fn from(atom: &RelationAtom) -> Self {
        Self {
            id: atom.id.clone(),
            gender: gender_name(atom),
            relation: atom.kind.as_str().to_string(),
            generation: atom.generation,
            branch: branch_name(atom.branch).to_string(),
            category: atom.category.as_str().to_string(),
            reverse: atom.reverse_atoms.clone(),
            spouse: atom.spouse_atom.clone(),
            parents: atom.parent_atoms.clone(),
            synonyms: atom.synonyms.clone(),
        }
    }
}

fn gender_name(atom: &RelationAtom) -> String {
    match atom.gender {
        Gender::Male => "male",
        Gender::Female => "female",
        Gender::Unknown => "unknown",
    }
    .to_string()
}

fn branch_name(branch: LineageBranch) -> &'static str {
    match branch {
        LineageBranch::Paternal => "paternal",
        LineageBranch::Maternal => "maternal",
        LineageBranch::Both => "both",
        LineageBranch::SelfLine => "self",
        LineageBranch::Spouse => "spouse",
        LineageBranch::InLaw => "in_law",
    }
}

/// Looks up a title or synonym.
///
/// # FFI contract
/// - Returns `None` for unknown titles.
#[flutter_rust_bridge::frb(sync)]
pub fn relation_info(title: String) -> Option<RelationInfo> {
    get_relation_info(title.as_str()).map(RelationInfo::from)
}

#[flutter_rust_bridge::frb(sync)]
pub fn is_reciprocal(a: String, b: String) -> bool {
    is_reciprocal_inner(a.as_str(), b.as_str())
}

/// One representative title per relation kind.
#[flutter_rust_bridge::frb(sync)]
pub fn list_relations() -> Vec<String> {
    get_all_relations()
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_relations_by_generation(generation: i32) -> Vec<String> {
    get_relations_by_generation(generation)
}

/// Titles of one category; unknown categories yield an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn list_relations_by_type(category: String) -> Vec<String> {
    get_relations_by_type(category.as_str())
}

#[flutter_rust_bridge::frb(sync)]
pub fn simplify_chain(chain: Vec<String>) -> Vec<String> {
    simplify_chain_inner(&chain)
}
