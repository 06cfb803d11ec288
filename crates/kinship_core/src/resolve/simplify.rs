//! Chain simplification without evaluation.
//!
//! # Invariants
//! - Only the tail of the chain is rewritten, in a single pass; the prefix
//!   is returned cleaned and normalized but otherwise untouched.
//! - Nothing here consults step rules or the fast-path table.

use crate::catalog::registry::RelationCatalog;
use crate::resolve::chain::{clean, normalize_all};

const GRANDPARENT_PAIRS: &[(&str, &str, &str)] = &[
    ("爸爸", "爸爸", "爷爷"),
    ("爸爸", "妈妈", "奶奶"),
    ("妈妈", "爸爸", "外公"),
    ("妈妈", "妈妈", "外婆"),
];

/// Collapses a known trailing compound of `chain`.
///
/// Tried in order:
/// 1. four trailing single-character tokens spelling two parents
///    (`爸 爸 妈 妈`) become the grandparent;
/// 2. two trailing tokens that concatenate to a catalog title become it;
/// 3. two trailing parent tokens become the grandparent.
pub fn simplify_chain<S: AsRef<str>>(catalog: &RelationCatalog, chain: &[S]) -> Vec<String> {
    let cleaned = clean(chain);
    let normalized = normalize_all(catalog, &cleaned);

    if let Some(title) = spelled_grandparent(&cleaned) {
        let mut simplified = normalized[..normalized.len() - 4].to_vec();
        simplified.push(title.to_string());
        return simplified;
    }

    if normalized.len() >= 2 {
        let split = normalized.len() - 2;
        let (first, second) = (&normalized[split], &normalized[split + 1]);
        let concatenated = format!("{first}{second}");
        let title = catalog
            .resolve_alias(concatenated.as_str())
            .map(|atom| atom.id.as_str())
            .or_else(|| grandparent(first, second));
        if let Some(title) = title {
            let mut simplified = normalized[..split].to_vec();
            simplified.push(title.to_string());
            return simplified;
        }
    }

    normalized
}

fn spelled_grandparent(cleaned: &[String]) -> Option<&'static str> {
    if cleaned.len() < 4 {
        return None;
    }
    let tail = &cleaned[cleaned.len() - 4..];
    if tail.iter().any(|token| token.chars().count() != 1) {
        return None;
    }
    let first = format!("{}{}", tail[0], tail[1]);
    let second = format!("{}{}", tail[2], tail[3]);
    grandparent(&first, &second)
}

fn grandparent(first: &str, second: &str) -> Option<&'static str> {
    GRANDPARENT_PAIRS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, title)| *title)
}
