//! Reciprocity check between two titles.
//!
//! Reverse data is curated and not symmetric, so the check accepts either
//! direction: `b` listed among `a`'s reverse atoms, or `a`'s kind reachable
//! from `b`'s reverse atoms.

use crate::catalog::registry::RelationCatalog;

/// Returns `true` when `a` and `b` are each other's inverse.
///
/// Both titles may be synonyms. Unknown titles are never reciprocal.
pub fn is_reciprocal(catalog: &RelationCatalog, a: &str, b: &str) -> bool {
    let (Some(first), Some(second)) = (
        catalog.resolve_alias(a.trim()),
        catalog.resolve_alias(b.trim()),
    ) else {
        return false;
    };

    if first.reverse_atoms.iter().any(|id| *id == second.id) {
        return true;
    }
    second
        .reverse_atoms
        .iter()
        .filter_map(|id| catalog.get_atom(id))
        .any(|atom| atom.kind == first.kind)
}
