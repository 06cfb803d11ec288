//! Chain preparation: segmentation, connector cleaning, synonym normalization.
//!
//! # Invariants
//! - Cleaning only removes whole connector tokens and keeps relative order.
//! - Normalization is best-effort: unknown tokens pass through unchanged and
//!   are rejected later by catalog lookup.

use crate::catalog::registry::RelationCatalog;
use once_cell::sync::Lazy;
use regex::Regex;

/// Connector words dropped from a chain before resolution.
pub const CONNECTOR_TOKENS: &[&str] = &["的", "与", "和", "或", "又", "且"];

/// Connector used to join normalized tokens into a path key.
pub const PATH_CONNECTOR: &str = "的";

static CONNECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[的与和或又且\s]+").expect("valid connector regex"));

/// Splits a free-text phrase such as `爸爸的姐姐的儿子` into raw tokens.
///
/// Empty pieces are dropped. Callers that already segment their input do
/// not need this.
pub fn segment_chain(text: &str) -> Vec<String> {
    CONNECTOR_RE
        .split(text.trim())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes connector tokens, preserving the order of the rest.
pub fn clean<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| token.as_ref().trim())
        .filter(|token| !token.is_empty() && !CONNECTOR_TOKENS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Maps an alias to its canonical atom id; returns `token` when unknown.
pub fn normalize<'a>(catalog: &'a RelationCatalog, token: &'a str) -> &'a str {
    catalog
        .resolve_alias(token)
        .map(|atom| atom.id.as_str())
        .unwrap_or(token)
}

/// Normalizes every token of an already cleaned chain.
pub fn normalize_all(catalog: &RelationCatalog, tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| normalize(catalog, token.as_str()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{clean, normalize, segment_chain};
    use crate::catalog::builtin::build_builtin_catalog;

    #[test]
    fn clean_removes_connectors_in_order() {
        assert_eq!(clean(&["爸爸", "的", "妈妈"]), vec!["爸爸", "妈妈"]);
        assert_eq!(
            clean(&["和", "哥哥", "又", "且", "弟弟", "或"]),
            vec!["哥哥", "弟弟"]
        );
    }

    #[test]
    fn clean_keeps_connector_characters_inside_tokens() {
        assert_eq!(clean(&["不存在的词"]), vec!["不存在的词"]);
    }

    #[test]
    fn segment_splits_on_connectors_and_whitespace() {
        assert_eq!(
            segment_chain(" 爸爸的姐姐 的儿子 "),
            vec!["爸爸", "姐姐", "儿子"]
        );
        assert!(segment_chain("的的").is_empty());
    }

    #[test]
    fn normalize_maps_aliases_and_passes_unknown_through() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        assert_eq!(normalize(&catalog, "父亲"), "爸爸");
        assert_eq!(normalize(&catalog, "姥姥"), "外婆");
        assert_eq!(normalize(&catalog, "爸爸"), "爸爸");
        assert_eq!(normalize(&catalog, "不存在的词"), "不存在的词");
    }
}
