//! Structured outcome of resolving a chain.
//!
//! # Invariants
//! - `Ambiguous` always holds at least two distinct candidates, in order.
//! - The first candidate is the tie-break choice, always.

use crate::model::atom::AtomId;
use serde::Serialize;

/// Either a single title or an ordered disjunction of equally valid titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "candidates", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(AtomId),
    Ambiguous(Vec<AtomId>),
}

impl Resolution {
    /// Builds a resolution from ordered candidates.
    ///
    /// Duplicates are collapsed keeping the first occurrence. Returns `None`
    /// when no candidate is left.
    pub fn from_candidates<I, S>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<AtomId>,
    {
        let mut ordered: Vec<AtomId> = Vec::new();
        for candidate in candidates {
            let candidate = candidate.into();
            if !ordered.contains(&candidate) {
                ordered.push(candidate);
            }
        }
        match ordered.len() {
            0 => None,
            1 => ordered.pop().map(Self::Resolved),
            _ => Some(Self::Ambiguous(ordered)),
        }
    }

    /// Ordered candidate titles; a single element for `Resolved`.
    pub fn candidates(&self) -> &[AtomId] {
        match self {
            Self::Resolved(id) => std::slice::from_ref(id),
            Self::Ambiguous(ids) => ids.as_slice(),
        }
    }

    /// The tie-broken title: the first candidate.
    pub fn primary(&self) -> &str {
        self.candidates()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }
}
