//! Reverse lookup: which chains produce a given title.
//!
//! # Responsibility
//! - Answer `reverse_query(title)` from hand-curated chain data.
//!
//! # Invariants
//! - Curated chains are kept separate from the forward rules; they are not
//!   derived from them.
//! - Every curated chain is written in canonical atom ids and, evaluated
//!   forward, yields a resolution that contains its title.
//! - Titles with several origins list every known chain (the `表` cousins
//!   have six).
//! - A registered title without curated data answers with the one-step
//!   chain `[title]`; the self anchor answers with the empty chain.

use crate::catalog::registry::{CatalogError, RelationCatalog};
use crate::model::atom::AtomId;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

type Chains = &'static [&'static [&'static str]];

const BUILTIN_REVERSE_CHAINS: &[(&str, Chains)] = &[
    ("曾祖父", &[&["爸爸", "爸爸", "爸爸"]]),
    ("曾祖母", &[&["爸爸", "爸爸", "妈妈"]]),
    ("外曾祖父", &[&["妈妈", "爸爸", "爸爸"]]),
    ("外曾祖母", &[&["妈妈", "爸爸", "妈妈"]]),
    ("爷爷", &[&["爸爸", "爸爸"]]),
    ("奶奶", &[&["爸爸", "妈妈"]]),
    ("外公", &[&["妈妈", "爸爸"]]),
    ("外婆", &[&["妈妈", "妈妈"]]),
    ("伯祖父", &[&["爸爸", "爸爸", "哥哥"]]),
    ("叔祖父", &[&["爸爸", "爸爸", "弟弟"]]),
    ("姑祖母", &[&["爸爸", "爸爸", "姐姐"], &["爸爸", "爸爸", "妹妹"]]),
    ("舅公", &[&["爸爸", "妈妈", "哥哥"], &["爸爸", "妈妈", "弟弟"]]),
    ("姨婆", &[&["爸爸", "妈妈", "姐姐"], &["爸爸", "妈妈", "妹妹"]]),
    ("外伯祖父", &[&["妈妈", "爸爸", "哥哥"]]),
    ("外叔祖父", &[&["妈妈", "爸爸", "弟弟"]]),
    ("外姑祖母", &[&["妈妈", "爸爸", "姐姐"], &["妈妈", "爸爸", "妹妹"]]),
    ("外舅公", &[&["妈妈", "妈妈", "哥哥"], &["妈妈", "妈妈", "弟弟"]]),
    ("外姨婆", &[&["妈妈", "妈妈", "姐姐"], &["妈妈", "妈妈", "妹妹"]]),
    ("伯伯", &[&["爸爸", "哥哥"]]),
    ("叔叔", &[&["爸爸", "弟弟"]]),
    ("姑姑", &[&["爸爸", "姐姐"], &["爸爸", "妹妹"]]),
    ("舅舅", &[&["妈妈", "哥哥"], &["妈妈", "弟弟"]]),
    ("姨妈", &[&["妈妈", "姐姐"], &["妈妈", "妹妹"]]),
    ("伯母", &[&["爸爸", "哥哥", "妻子"]]),
    ("婶婶", &[&["爸爸", "弟弟", "妻子"]]),
    ("姑父", &[&["爸爸", "姐姐", "丈夫"], &["爸爸", "妹妹", "丈夫"]]),
    ("舅妈", &[&["妈妈", "哥哥", "妻子"], &["妈妈", "弟弟", "妻子"]]),
    ("姨父", &[&["妈妈", "姐姐", "丈夫"], &["妈妈", "妹妹", "丈夫"]]),
    ("堂哥", &[&["爸爸", "哥哥", "儿子"], &["爸爸", "弟弟", "儿子"]]),
    ("堂弟", &[&["爸爸", "哥哥", "儿子"], &["爸爸", "弟弟", "儿子"]]),
    ("堂姐", &[&["爸爸", "哥哥", "女儿"], &["爸爸", "弟弟", "女儿"]]),
    ("堂妹", &[&["爸爸", "哥哥", "女儿"], &["爸爸", "弟弟", "女儿"]]),
    ("表哥", COUSIN_VIA_SON),
    ("表弟", COUSIN_VIA_SON),
    ("表姐", COUSIN_VIA_DAUGHTER),
    ("表妹", COUSIN_VIA_DAUGHTER),
    ("侄子", &[&["哥哥", "儿子"], &["弟弟", "儿子"]]),
    ("侄女", &[&["哥哥", "女儿"], &["弟弟", "女儿"]]),
    ("外甥", &[&["姐姐", "儿子"], &["妹妹", "儿子"]]),
    ("外甥女", &[&["姐姐", "女儿"], &["妹妹", "女儿"]]),
    ("孙子", &[&["儿子", "儿子"]]),
    ("孙女", &[&["儿子", "女儿"]]),
    ("外孙", &[&["女儿", "儿子"]]),
    ("外孙女", &[&["女儿", "女儿"]]),
    ("曾孙", &[&["儿子", "儿子", "儿子"]]),
    ("曾孙女", &[&["儿子", "儿子", "女儿"]]),
    (
        "曾外孙",
        &[&["儿子", "女儿", "儿子"], &["女儿", "儿子", "儿子"], &["女儿", "女儿", "儿子"]],
    ),
    (
        "曾外孙女",
        &[&["儿子", "女儿", "女儿"], &["女儿", "儿子", "女儿"], &["女儿", "女儿", "女儿"]],
    ),
    ("岳父", &[&["妻子", "爸爸"]]),
    ("岳母", &[&["妻子", "妈妈"]]),
    ("公公", &[&["丈夫", "爸爸"]]),
    ("婆婆", &[&["丈夫", "妈妈"]]),
    ("女婿", &[&["女儿", "丈夫"]]),
    ("儿媳", &[&["儿子", "妻子"]]),
    ("嫂子", &[&["哥哥", "妻子"]]),
    ("弟媳", &[&["弟弟", "妻子"]]),
    ("姐夫", &[&["姐姐", "丈夫"]]),
    ("妹夫", &[&["妹妹", "丈夫"]]),
    ("大伯子", &[&["丈夫", "哥哥"]]),
    ("小叔子", &[&["丈夫", "弟弟"]]),
    ("大姑子", &[&["丈夫", "姐姐"]]),
    ("小姑子", &[&["丈夫", "妹妹"]]),
    ("连襟", &[&["妻子", "姐姐", "丈夫"], &["妻子", "妹妹", "丈夫"]]),
    ("妯娌", &[&["丈夫", "哥哥", "妻子"], &["丈夫", "弟弟", "妻子"]]),
];

const COUSIN_VIA_SON: Chains = &[
    &["爸爸", "姐姐", "儿子"],
    &["爸爸", "妹妹", "儿子"],
    &["妈妈", "哥哥", "儿子"],
    &["妈妈", "弟弟", "儿子"],
    &["妈妈", "姐姐", "儿子"],
    &["妈妈", "妹妹", "儿子"],
];

const COUSIN_VIA_DAUGHTER: Chains = &[
    &["爸爸", "姐姐", "女儿"],
    &["爸爸", "妹妹", "女儿"],
    &["妈妈", "哥哥", "女儿"],
    &["妈妈", "弟弟", "女儿"],
    &["妈妈", "姐姐", "女儿"],
    &["妈妈", "妹妹", "女儿"],
];

static BUILTIN_INDEX: Lazy<ReverseIndex> = Lazy::new(ReverseIndex::builtin);

/// Curated reverse chains keyed by canonical atom id.
#[derive(Debug, Default)]
pub struct ReverseIndex {
    chains: BTreeMap<AtomId, Vec<Vec<AtomId>>>,
}

impl ReverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut index = Self::new();
        for (title, chains) in BUILTIN_REVERSE_CHAINS {
            for chain in chains.iter() {
                index.insert(title, chain);
            }
        }
        index
    }

    /// Appends one curated chain for `title`; duplicates are ignored.
    pub fn insert(&mut self, title: &str, chain: &[&str]) {
        let chain: Vec<AtomId> = chain.iter().map(|id| id.to_string()).collect();
        let entry = self.chains.entry(title.to_string()).or_default();
        if !entry.contains(&chain) {
            entry.push(chain);
        }
    }

    /// Iterates `(title, chains)` pairs in title order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[Vec<AtomId>])> {
        self.chains
            .iter()
            .map(|(title, chains)| (title.as_str(), chains.as_slice()))
    }

    /// Returns the chains known to produce `title`.
    ///
    /// `title` may be a synonym. Unregistered titles yield an empty list.
    pub fn reverse_query(&self, catalog: &RelationCatalog, title: &str) -> Vec<Vec<AtomId>> {
        let Some(atom) = catalog.resolve_alias(title.trim()) else {
            return Vec::new();
        };
        if let Some(chains) = self.chains.get(atom.id.as_str()) {
            return chains.clone();
        }
        if atom.is_self() {
            return vec![Vec::new()];
        }
        vec![vec![atom.id.clone()]]
    }

    /// Checks that every title and chain element is a registered id.
    pub fn validate(&self, catalog: &RelationCatalog) -> Result<(), CatalogError> {
        for (title, chains) in &self.chains {
            catalog.require_atom("reverse index", title)?;
            for chain in chains {
                for id in chain {
                    catalog.require_atom(title, id)?;
                }
            }
        }
        Ok(())
    }
}

/// Returns the shared built-in reverse index.
pub fn builtin_reverse_index() -> &'static ReverseIndex {
    &BUILTIN_INDEX
}

#[cfg(test)]
mod tests {
    use super::{builtin_reverse_index, ReverseIndex};
    use crate::catalog::builtin::build_builtin_catalog;

    #[test]
    fn builtin_chains_reference_registered_atoms() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        builtin_reverse_index()
            .validate(&catalog)
            .expect("reverse chains are registered");
    }

    #[test]
    fn maternal_uncle_lists_both_brothers() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        let chains = builtin_reverse_index().reverse_query(&catalog, "舅父");
        assert_eq!(
            chains,
            vec![vec!["妈妈", "哥哥"], vec!["妈妈", "弟弟"]]
        );
    }

    #[test]
    fn cousins_list_every_origin() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        assert_eq!(builtin_reverse_index().reverse_query(&catalog, "表哥").len(), 6);
        assert_eq!(builtin_reverse_index().reverse_query(&catalog, "表妹").len(), 6);
    }

    #[test]
    fn uncurated_titles_fall_back_to_single_step() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        let index = builtin_reverse_index();
        assert_eq!(index.reverse_query(&catalog, "爸"), vec![vec!["爸爸"]]);
        assert_eq!(index.reverse_query(&catalog, "我"), vec![Vec::<String>::new()]);
        assert!(index.reverse_query(&catalog, "不存在的词").is_empty());
    }

    #[test]
    fn validate_rejects_unregistered_chain_element() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        let mut index = ReverseIndex::new();
        index.insert("舅舅", &["妈妈", "兄弟"]);
        assert!(index.validate(&catalog).is_err());
    }
}
