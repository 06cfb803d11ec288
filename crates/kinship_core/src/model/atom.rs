//! Relation atom domain model.
//!
//! # Responsibility
//! - Define the canonical record for one kinship relation type.
//! - Validate per-atom invariants before an atom enters a catalog.
//!
//! # Invariants
//! - `id` is the canonical display title and is never empty.
//! - `generation` equals `kind.generation()` and `gender` equals
//!   `kind.gender()`.
//! - `reverse_atoms` is a best-effort inverse and is not required to be
//!   symmetric across atoms.
//! - `parent_atoms` is informational only; nothing resolves through it.

use crate::model::kind::RelationKind;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical display title of an atom, e.g. `舅舅`.
pub type AtomId = String;

/// Gender carried by an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// Side of the family through which a relation is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineageBranch {
    Paternal,
    Maternal,
    Both,
    #[serde(rename = "self")]
    SelfLine,
    Spouse,
    InLaw,
}

/// Coarse relation category used for listing (`getRelationsByType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCategory {
    /// Lineal ancestors/descendants and self.
    Direct,
    /// Siblings and their lines, uncles, aunts, cousins.
    Collateral,
    /// Husband or wife.
    Spouse,
    /// Relations established through a marriage.
    InLaw,
}

impl RelationCategory {
    /// Stable string id used by listing callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Collateral => "collateral",
            Self::Spouse => "spouse",
            Self::InLaw => "in_law",
        }
    }

    /// Parses a category id. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "direct" => Some(Self::Direct),
            "collateral" => Some(Self::Collateral),
            "spouse" => Some(Self::Spouse),
            "in_law" => Some(Self::InLaw),
            _ => None,
        }
    }
}

/// One named kinship relation type with fixed attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAtom {
    /// Canonical display title; every synonym normalizes to it.
    pub id: AtomId,
    pub gender: Gender,
    /// Serialized as `relation` to match the UI schema naming.
    #[serde(rename = "relation")]
    pub kind: RelationKind,
    /// Signed distance from self's generation (ancestors positive).
    pub generation: i32,
    pub branch: LineageBranch,
    /// Serialized as `type` to match the UI schema naming.
    #[serde(rename = "type")]
    pub category: RelationCategory,
    /// Titles reachable by inverting this relation.
    #[serde(rename = "reverse")]
    pub reverse_atoms: Vec<AtomId>,
    #[serde(rename = "spouse")]
    pub spouse_atom: Option<AtomId>,
    #[serde(rename = "parents")]
    pub parent_atoms: Vec<AtomId>,
    pub synonyms: Vec<String>,
}

impl RelationAtom {
    /// Creates an atom whose gender and generation are taken from `kind`.
    pub fn new(
        id: impl Into<AtomId>,
        kind: RelationKind,
        branch: LineageBranch,
        category: RelationCategory,
    ) -> Self {
        Self {
            id: id.into(),
            gender: kind.gender(),
            kind,
            generation: kind.generation(),
            branch,
            category,
            reverse_atoms: Vec::new(),
            spouse_atom: None,
            parent_atoms: Vec::new(),
            synonyms: Vec::new(),
        }
    }

    pub fn with_reverse(mut self, ids: &[&str]) -> Self {
        self.reverse_atoms = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_spouse(mut self, id: &str) -> Self {
        self.spouse_atom = Some(id.to_string());
        self
    }

    pub fn with_parents(mut self, ids: &[&str]) -> Self {
        self.parent_atoms = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_synonyms(mut self, aliases: &[&str]) -> Self {
        self.synonyms = aliases.iter().map(|alias| alias.to_string()).collect();
        self
    }

    /// Whether this atom is the "self" anchor every chain starts from.
    pub fn is_self(&self) -> bool {
        self.kind == RelationKind::Myself
    }

    /// Validates per-atom invariants.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `GenerationMismatch` when `generation` disagrees with the kind.
    /// - `GenderMismatch` when `gender` disagrees with the kind.
    /// - `EmptySynonym` when an alias is blank.
    pub fn validate(&self) -> Result<(), AtomValidationError> {
        if self.id.trim().is_empty() {
            return Err(AtomValidationError::EmptyId);
        }
        let expected_generation = self.kind.generation();
        if self.generation != expected_generation {
            return Err(AtomValidationError::GenerationMismatch {
                id: self.id.clone(),
                expected: expected_generation,
                actual: self.generation,
            });
        }
        if self.gender != self.kind.gender() {
            return Err(AtomValidationError::GenderMismatch {
                id: self.id.clone(),
                kind: self.kind,
            });
        }
        if self.synonyms.iter().any(|alias| alias.trim().is_empty()) {
            return Err(AtomValidationError::EmptySynonym(self.id.clone()));
        }
        Ok(())
    }
}

/// Per-atom invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomValidationError {
    EmptyId,
    GenerationMismatch {
        id: AtomId,
        expected: i32,
        actual: i32,
    },
    GenderMismatch {
        id: AtomId,
        kind: RelationKind,
    },
    EmptySynonym(AtomId),
}

impl Display for AtomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "atom id must not be empty"),
            Self::GenerationMismatch {
                id,
                expected,
                actual,
            } => write!(
                f,
                "atom `{id}` has generation {actual}, expected {expected} for its kind"
            ),
            Self::GenderMismatch { id, kind } => write!(
                f,
                "atom `{id}` gender disagrees with kind `{}`",
                kind.as_str()
            ),
            Self::EmptySynonym(id) => write!(f, "atom `{id}` declares an empty synonym"),
        }
    }
}

impl Error for AtomValidationError {}
