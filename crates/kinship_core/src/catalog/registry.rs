//! Relation catalog registry.
//!
//! # Responsibility
//! - Hold every registered atom and its alias lookup tables.
//! - Reject conflicting registrations at construction time.
//!
//! # Invariants
//! - Every alias maps to exactly one atom id.
//! - An atom id is never also an alias of a different atom.
//! - Registration order is preserved for listing.
//! - `lookup_by_relation_kind` returns one representative per kind: the first
//!   registered.

use crate::model::atom::{AtomId, AtomValidationError, RelationAtom};
use crate::model::kind::RelationKind;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Immutable-after-build registry of relation atoms.
#[derive(Debug, Default)]
pub struct RelationCatalog {
    atoms: Vec<RelationAtom>,
    by_id: BTreeMap<AtomId, usize>,
    aliases: BTreeMap<String, usize>,
    kind_index: BTreeMap<RelationKind, usize>,
}

impl RelationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one atom and its synonyms.
    ///
    /// The registry is left untouched when an error is returned.
    ///
    /// # Errors
    /// - `InvalidAtom` when the atom fails its own validation.
    /// - `DuplicateAtomId` when the id is already registered.
    /// - `AliasCollision` when the id or a synonym is already claimed by a
    ///   different atom.
    pub fn register_atom(&mut self, atom: RelationAtom) -> Result<(), CatalogError> {
        atom.validate().map_err(CatalogError::InvalidAtom)?;
        if self.by_id.contains_key(atom.id.as_str()) {
            return Err(CatalogError::DuplicateAtomId(atom.id));
        }
        if let Some(existing) = self.aliases.get(atom.id.as_str()) {
            return Err(CatalogError::AliasCollision {
                alias: atom.id.clone(),
                existing: self.atoms[*existing].id.clone(),
                incoming: atom.id,
            });
        }

        let mut new_aliases: Vec<String> = Vec::new();
        for synonym in &atom.synonyms {
            let alias = synonym.trim();
            if alias == atom.id || new_aliases.iter().any(|seen| seen == alias) {
                continue;
            }
            let claimed_by = self
                .by_id
                .get(alias)
                .or_else(|| self.aliases.get(alias))
                .map(|index| self.atoms[*index].id.clone());
            if let Some(existing) = claimed_by {
                return Err(CatalogError::AliasCollision {
                    alias: alias.to_string(),
                    existing,
                    incoming: atom.id.clone(),
                });
            }
            new_aliases.push(alias.to_string());
        }

        let index = self.atoms.len();
        self.by_id.insert(atom.id.clone(), index);
        for alias in new_aliases {
            self.aliases.insert(alias, index);
        }
        self.kind_index.entry(atom.kind).or_insert(index);
        self.atoms.push(atom);
        Ok(())
    }

    /// Returns the atom registered under a canonical id.
    pub fn get_atom(&self, id: &str) -> Option<&RelationAtom> {
        self.by_id.get(id).map(|index| &self.atoms[*index])
    }

    /// Returns the atom for a canonical id or any of its synonyms.
    pub fn resolve_alias(&self, token: &str) -> Option<&RelationAtom> {
        self.by_id
            .get(token)
            .or_else(|| self.aliases.get(token))
            .map(|index| &self.atoms[*index])
    }

    /// Returns the representative id for a kind (first registered).
    pub fn lookup_by_relation_kind(&self, kind: RelationKind) -> Option<&str> {
        self.kind_index
            .get(&kind)
            .map(|index| self.atoms[*index].id.as_str())
    }

    /// Returns the registered self anchor, if any.
    pub fn self_atom(&self) -> Option<&RelationAtom> {
        self.kind_index
            .get(&RelationKind::Myself)
            .map(|index| &self.atoms[*index])
    }

    /// Iterates atoms in registration order.
    pub fn atoms(&self) -> impl Iterator<Item = &RelationAtom> {
        self.atoms.iter()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Checks that every reverse and spouse reference names a registered id.
    ///
    /// Parent references are informational and are not checked.
    pub fn validate_references(&self) -> Result<(), CatalogError> {
        for atom in &self.atoms {
            let targets = atom.reverse_atoms.iter().chain(atom.spouse_atom.iter());
            for target in targets {
                self.require_atom(atom.id.as_str(), target)?;
            }
        }
        Ok(())
    }

    /// Returns `UnknownReference` unless `target` is a canonical id.
    pub fn require_atom(&self, owner: &str, target: &str) -> Result<(), CatalogError> {
        if self.by_id.contains_key(target) {
            Ok(())
        } else {
            Err(CatalogError::UnknownReference {
                owner: owner.to_string(),
                target: target.to_string(),
            })
        }
    }
}

/// Construction-time catalog errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidAtom(AtomValidationError),
    DuplicateAtomId(AtomId),
    AliasCollision {
        alias: String,
        existing: AtomId,
        incoming: AtomId,
    },
    UnknownReference {
        owner: String,
        target: String,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAtom(err) => write!(f, "invalid relation atom: {err}"),
            Self::DuplicateAtomId(id) => write!(f, "atom id already registered: {id}"),
            Self::AliasCollision {
                alias,
                existing,
                incoming,
            } => write!(
                f,
                "alias `{alias}` of `{incoming}` is already claimed by `{existing}`"
            ),
            Self::UnknownReference { owner, target } => {
                write!(f, "`{owner}` references unregistered atom `{target}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAtom(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, RelationCatalog};
    use crate::model::atom::{LineageBranch, RelationAtom, RelationCategory};
    use crate::model::kind::RelationKind;

    fn father() -> RelationAtom {
        RelationAtom::new(
            "爸爸",
            RelationKind::Father,
            LineageBranch::Paternal,
            RelationCategory::Direct,
        )
        .with_synonyms(&["父亲", "爸"])
    }

    #[test]
    fn registers_atom_and_aliases() {
        let mut catalog = RelationCatalog::new();
        catalog.register_atom(father()).expect("father registers");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_atom("爸爸").map(|a| a.id.as_str()), Some("爸爸"));
        assert!(catalog.get_atom("爸").is_none());
        assert_eq!(
            catalog.resolve_alias("父亲").map(|a| a.id.as_str()),
            Some("爸爸")
        );
    }

    #[test]
    fn rejects_duplicate_atom_id() {
        let mut catalog = RelationCatalog::new();
        catalog.register_atom(father()).expect("first registration");
        let err = catalog
            .register_atom(father())
            .expect_err("duplicate registration must fail");
        assert_eq!(err, CatalogError::DuplicateAtomId("爸爸".to_string()));
    }

    #[test]
    fn rejects_alias_claimed_by_other_atom_and_leaves_registry_untouched() {
        let mut catalog = RelationCatalog::new();
        catalog.register_atom(father()).expect("father registers");

        let clash = RelationAtom::new(
            "爹地",
            RelationKind::Father,
            LineageBranch::Paternal,
            RelationCategory::Direct,
        )
        .with_synonyms(&["老爸", "爸"]);
        let err = catalog
            .register_atom(clash)
            .expect_err("alias collision must fail");
        assert!(matches!(
            err,
            CatalogError::AliasCollision { ref alias, ref existing, .. }
                if alias == "爸" && existing == "爸爸"
        ));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.resolve_alias("老爸").is_none());
    }

    #[test]
    fn rejects_id_that_is_already_an_alias() {
        let mut catalog = RelationCatalog::new();
        catalog.register_atom(father()).expect("father registers");
        let err = catalog
            .register_atom(RelationAtom::new(
                "父亲",
                RelationKind::Father,
                LineageBranch::Paternal,
                RelationCategory::Direct,
            ))
            .expect_err("id shadowing an alias must fail");
        assert!(matches!(err, CatalogError::AliasCollision { .. }));
    }

    #[test]
    fn keeps_first_registered_atom_as_kind_representative() {
        let mut catalog = RelationCatalog::new();
        catalog
            .register_atom(RelationAtom::new(
                "爷爷",
                RelationKind::Grandfather,
                LineageBranch::Paternal,
                RelationCategory::Direct,
            ))
            .expect("paternal grandfather registers");
        catalog
            .register_atom(RelationAtom::new(
                "外公",
                RelationKind::Grandfather,
                LineageBranch::Maternal,
                RelationCategory::Direct,
            ))
            .expect("maternal grandfather registers");

        assert_eq!(
            catalog.lookup_by_relation_kind(RelationKind::Grandfather),
            Some("爷爷")
        );
        assert_eq!(catalog.lookup_by_relation_kind(RelationKind::Son), None);
    }

    #[test]
    fn validate_references_reports_dangling_reverse_atom() {
        let mut catalog = RelationCatalog::new();
        catalog
            .register_atom(father().with_reverse(&["儿子"]))
            .expect("father registers");
        let err = catalog
            .validate_references()
            .expect_err("dangling reverse must fail");
        assert_eq!(
            err,
            CatalogError::UnknownReference {
                owner: "爸爸".to_string(),
                target: "儿子".to_string(),
            }
        );
    }
}
