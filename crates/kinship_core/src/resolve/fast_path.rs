//! Curated shortcuts for idiomatic compounds.
//!
//! # Responsibility
//! - Map specific normalized chains straight to a result, ahead of stepwise
//!   inference.
//!
//! # Invariants
//! - Lookup order is fixed: direct concatenation first, then the
//!   connector-joined path.
//! - Entries are curated by hand; they are not derived from step rules and
//!   may cover chains the step rules cannot (e.g. `妻子的姐姐的丈夫`).
//! - Keys may use the collective sibling tokens `兄弟`/`姐妹`, which are not
//!   catalog atoms and only ever match here.

use crate::catalog::registry::{CatalogError, RelationCatalog};
use crate::model::atom::AtomId;
use crate::model::resolution::Resolution;
use crate::resolve::chain::PATH_CONNECTOR;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const BUILTIN_FAST_PATHS: &[(&[&str], &[&str])] = &[
    (&["爸爸", "爸爸"], &["爷爷"]),
    (&["爸爸", "妈妈"], &["奶奶"]),
    (&["妈妈", "爸爸"], &["外公"]),
    (&["妈妈", "妈妈"], &["外婆"]),
    (&["爸爸", "哥哥"], &["伯伯"]),
    (&["爸爸", "弟弟"], &["叔叔"]),
    (&["爸爸", "兄弟"], &["伯伯", "叔叔"]),
    (&["爸爸", "姐妹"], &["姑姑"]),
    (&["妈妈", "兄弟"], &["舅舅"]),
    (&["妈妈", "姐妹"], &["姨妈"]),
    (&["爷爷", "兄弟"], &["伯祖父", "叔祖父"]),
    (&["爷爷", "姐妹"], &["姑祖母"]),
    (&["奶奶", "兄弟"], &["舅公"]),
    (&["奶奶", "姐妹"], &["姨婆"]),
    (&["外公", "兄弟"], &["外伯祖父", "外叔祖父"]),
    (&["外公", "姐妹"], &["外姑祖母"]),
    (&["外婆", "兄弟"], &["外舅公"]),
    (&["外婆", "姐妹"], &["外姨婆"]),
    (&["伯伯", "儿子"], &["堂哥", "堂弟"]),
    (&["伯伯", "女儿"], &["堂姐", "堂妹"]),
    (&["叔叔", "儿子"], &["堂哥", "堂弟"]),
    (&["叔叔", "女儿"], &["堂姐", "堂妹"]),
    (&["姑姑", "儿子"], &["表哥", "表弟"]),
    (&["姑姑", "女儿"], &["表姐", "表妹"]),
    (&["舅舅", "儿子"], &["表哥", "表弟"]),
    (&["舅舅", "女儿"], &["表姐", "表妹"]),
    (&["姨妈", "儿子"], &["表哥", "表弟"]),
    (&["姨妈", "女儿"], &["表姐", "表妹"]),
    (&["哥哥", "儿子"], &["侄子"]),
    (&["哥哥", "女儿"], &["侄女"]),
    (&["弟弟", "儿子"], &["侄子"]),
    (&["弟弟", "女儿"], &["侄女"]),
    (&["姐姐", "儿子"], &["外甥"]),
    (&["姐姐", "女儿"], &["外甥女"]),
    (&["妹妹", "儿子"], &["外甥"]),
    (&["妹妹", "女儿"], &["外甥女"]),
    (&["妻子", "姐姐", "丈夫"], &["连襟"]),
    (&["妻子", "妹妹", "丈夫"], &["连襟"]),
    (&["丈夫", "哥哥", "妻子"], &["妯娌"]),
    (&["丈夫", "弟弟", "妻子"], &["妯娌"]),
];

static BUILTIN_TABLE: Lazy<FastPathTable> = Lazy::new(FastPathTable::builtin);

/// Which key matched a fast-path lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastPathRoute {
    /// The concatenated tokens form a catalog title or a curated key.
    Concatenation,
    /// The connector-joined path matched a curated key.
    Path,
}

impl FastPathRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Concatenation => "concatenation",
            Self::Path => "path",
        }
    }
}

/// Successful fast-path lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastPathHit {
    pub route: FastPathRoute,
    pub resolution: Resolution,
}

/// Curated chain-to-result shortcuts.
#[derive(Debug, Default)]
pub struct FastPathTable {
    by_concat: BTreeMap<String, Vec<AtomId>>,
    by_path: BTreeMap<String, Vec<AtomId>>,
}

impl FastPathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from the built-in curated entries.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (tokens, candidates) in BUILTIN_FAST_PATHS {
            table.insert(tokens, candidates);
        }
        table
    }

    /// Adds one curated entry; a later entry for the same key replaces it.
    pub fn insert(&mut self, tokens: &[&str], candidates: &[&str]) {
        let candidates: Vec<AtomId> = candidates.iter().map(|id| id.to_string()).collect();
        self.by_concat.insert(tokens.concat(), candidates.clone());
        self.by_path
            .insert(tokens.join(PATH_CONNECTOR), candidates);
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Looks up a normalized chain.
    ///
    /// The concatenation route first asks the catalog whether the joined
    /// tokens already form a title (covers over-segmented input such as
    /// `["外孙", "女"]`), then the curated concatenation keys. The path route
    /// is tried last.
    pub fn lookup(&self, catalog: &RelationCatalog, normalized: &[String]) -> Option<FastPathHit> {
        if normalized.is_empty() {
            return None;
        }

        let concatenated = normalized.concat();
        if let Some(atom) = catalog.resolve_alias(concatenated.as_str()) {
            return Some(FastPathHit {
                route: FastPathRoute::Concatenation,
                resolution: Resolution::Resolved(atom.id.clone()),
            });
        }
        if let Some(resolution) = self
            .by_concat
            .get(concatenated.as_str())
            .and_then(|candidates| Resolution::from_candidates(candidates.iter().cloned()))
        {
            return Some(FastPathHit {
                route: FastPathRoute::Concatenation,
                resolution,
            });
        }

        let path = normalized.join(PATH_CONNECTOR);
        self.by_path
            .get(path.as_str())
            .and_then(|candidates| Resolution::from_candidates(candidates.iter().cloned()))
            .map(|resolution| FastPathHit {
                route: FastPathRoute::Path,
                resolution,
            })
    }

    /// Checks that every curated result names a registered atom.
    pub fn validate(&self, catalog: &RelationCatalog) -> Result<(), CatalogError> {
        for (path, candidates) in &self.by_path {
            for candidate in candidates {
                catalog.require_atom(path, candidate)?;
            }
        }
        Ok(())
    }
}

/// Returns the shared built-in fast-path table.
pub fn builtin_fast_paths() -> &'static FastPathTable {
    &BUILTIN_TABLE
}
