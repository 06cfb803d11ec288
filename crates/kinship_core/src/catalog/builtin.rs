//! Built-in kinship catalog.
//!
//! # Responsibility
//! - Declare every relation atom the engine ships with.
//! - Build the process-wide catalog exactly once.
//!
//! # Invariants
//! - The catalog is built once, before any reader sees it, and never mutated.
//! - Every reverse/spouse reference resolves to a registered atom.

use crate::catalog::registry::{CatalogError, RelationCatalog};
use crate::model::atom::{LineageBranch, RelationAtom, RelationCategory};
use crate::model::kind::RelationKind;
use log::{error, info};
use once_cell::sync::OnceCell;

/// Canonical id of the chain anchor.
pub const SELF_ATOM_ID: &str = "自己";

static BUILTIN_CATALOG: OnceCell<RelationCatalog> = OnceCell::new();

/// Returns the shared built-in catalog, building it on first use.
///
/// # Errors
/// Returns the construction error when the static data is inconsistent.
/// A failed build is not cached; the next call retries and fails the same way.
pub fn builtin_catalog() -> Result<&'static RelationCatalog, CatalogError> {
    BUILTIN_CATALOG.get_or_try_init(|| {
        build_builtin_catalog()
            .map(|catalog| {
                info!(
                    "event=catalog_build module=catalog status=ok atoms={}",
                    catalog.len()
                );
                catalog
            })
            .map_err(|err| {
                error!("event=catalog_build module=catalog status=error error={err}");
                err
            })
    })
}

/// Builds a fresh catalog from the built-in atom table.
pub fn build_builtin_catalog() -> Result<RelationCatalog, CatalogError> {
    let mut catalog = RelationCatalog::new();
    for atom in builtin_atoms() {
        catalog.register_atom(atom)?;
    }
    catalog.validate_references()?;
    Ok(catalog)
}

fn builtin_atoms() -> Vec<RelationAtom> {
    use LineageBranch::{Both, InLaw, Maternal, Paternal, SelfLine, Spouse};
    use RelationCategory::{Collateral, Direct};
    use RelationKind as K;

    let in_law = RelationCategory::InLaw;

    vec![
        // Great-grandparents.
        RelationAtom::new("曾祖父", K::GreatGrandfather, Paternal, Direct)
            .with_reverse(&["曾孙", "曾孙女"])
            .with_parents(&["高祖父", "高祖母"])
            .with_spouse("曾祖母")
            .with_synonyms(&["太爷爷"]),
        RelationAtom::new("曾祖母", K::GreatGrandmother, Paternal, Direct)
            .with_reverse(&["曾孙", "曾孙女"])
            .with_parents(&["高祖父", "高祖母"])
            .with_spouse("曾祖父")
            .with_synonyms(&["太奶奶"]),
        RelationAtom::new("外曾祖父", K::GreatGrandfather, Maternal, Direct)
            .with_spouse("外曾祖母")
            .with_synonyms(&["太外公", "太姥爷"]),
        RelationAtom::new("外曾祖母", K::GreatGrandmother, Maternal, Direct)
            .with_spouse("外曾祖父")
            .with_synonyms(&["太外婆", "太姥姥"]),
        // Grandparents.
        RelationAtom::new("爷爷", K::Grandfather, Paternal, Direct)
            .with_reverse(&["孙子", "孙女"])
            .with_parents(&["曾祖父", "曾祖母"])
            .with_spouse("奶奶")
            .with_synonyms(&["祖父", "爷"]),
        RelationAtom::new("奶奶", K::Grandmother, Paternal, Direct)
            .with_reverse(&["孙子", "孙女"])
            .with_parents(&["外曾祖父", "外曾祖母"])
            .with_spouse("爷爷")
            .with_synonyms(&["祖母", "奶"]),
        RelationAtom::new("外公", K::Grandfather, Maternal, Direct)
            .with_reverse(&["外孙", "外孙女"])
            .with_parents(&["外曾祖父", "外曾祖母"])
            .with_spouse("外婆")
            .with_synonyms(&["姥爷", "外祖父"]),
        RelationAtom::new("外婆", K::Grandmother, Maternal, Direct)
            .with_reverse(&["外孙", "外孙女"])
            .with_parents(&["外曾祖父", "外曾祖母"])
            .with_spouse("外公")
            .with_synonyms(&["姥姥", "外祖母", "姥"]),
        // Grandparents' siblings.
        RelationAtom::new("伯祖父", K::GrandfathersOlderBrother, Paternal, Collateral)
            .with_parents(&["曾祖父", "曾祖母"]),
        RelationAtom::new("叔祖父", K::GrandfathersYoungerBrother, Paternal, Collateral)
            .with_parents(&["曾祖父", "曾祖母"]),
        RelationAtom::new("姑祖母", K::GrandfathersSister, Paternal, Collateral)
            .with_parents(&["曾祖父", "曾祖母"])
            .with_synonyms(&["姑奶奶"]),
        RelationAtom::new("舅公", K::GrandmothersBrother, Paternal, Collateral)
            .with_synonyms(&["舅爷爷"]),
        RelationAtom::new("姨婆", K::GrandmothersSister, Paternal, Collateral)
            .with_synonyms(&["姨奶奶"]),
        RelationAtom::new("外伯祖父", K::GrandfathersOlderBrother, Maternal, Collateral)
            .with_parents(&["外曾祖父", "外曾祖母"]),
        RelationAtom::new("外叔祖父", K::GrandfathersYoungerBrother, Maternal, Collateral)
            .with_parents(&["外曾祖父", "外曾祖母"]),
        RelationAtom::new("外姑祖母", K::GrandfathersSister, Maternal, Collateral)
            .with_parents(&["外曾祖父", "外曾祖母"]),
        RelationAtom::new("外舅公", K::GrandmothersBrother, Maternal, Collateral),
        RelationAtom::new("外姨婆", K::GrandmothersSister, Maternal, Collateral),
        // Parents.
        RelationAtom::new("爸爸", K::Father, Paternal, Direct)
            .with_reverse(&["儿子", "女儿"])
            .with_parents(&["爷爷", "奶奶"])
            .with_spouse("妈妈")
            .with_synonyms(&["父亲", "爸", "爹"]),
        RelationAtom::new("妈妈", K::Mother, Maternal, Direct)
            .with_reverse(&["儿子", "女儿"])
            .with_parents(&["外公", "外婆"])
            .with_spouse("爸爸")
            .with_synonyms(&["母亲", "妈", "娘"]),
        // Self and spouses.
        RelationAtom::new(SELF_ATOM_ID, K::Myself, SelfLine, Direct).with_synonyms(&["我"]),
        RelationAtom::new("丈夫", K::Husband, Spouse, RelationCategory::Spouse)
            .with_reverse(&["妻子"])
            .with_spouse("妻子")
            .with_synonyms(&["老公", "夫"]),
        RelationAtom::new("妻子", K::Wife, Spouse, RelationCategory::Spouse)
            .with_reverse(&["丈夫"])
            .with_spouse("丈夫")
            .with_synonyms(&["老婆", "妻"]),
        // Children and grandchildren.
        RelationAtom::new("儿子", K::Son, SelfLine, Direct)
            .with_reverse(&["爸爸", "妈妈"])
            .with_parents(&[SELF_ATOM_ID]),
        RelationAtom::new("女儿", K::Daughter, SelfLine, Direct)
            .with_reverse(&["爸爸", "妈妈"])
            .with_parents(&[SELF_ATOM_ID]),
        RelationAtom::new("孙子", K::Grandson, SelfLine, Direct)
            .with_reverse(&["爷爷", "奶奶"])
            .with_synonyms(&["孙"]),
        RelationAtom::new("孙女", K::Granddaughter, SelfLine, Direct)
            .with_reverse(&["爷爷", "奶奶"]),
        RelationAtom::new("外孙", K::Grandson, Maternal, Direct)
            .with_reverse(&["外公", "外婆"]),
        RelationAtom::new("外孙女", K::Granddaughter, Maternal, Direct)
            .with_reverse(&["外公", "外婆"]),
        RelationAtom::new("曾孙", K::GreatGrandson, SelfLine, Direct)
            .with_reverse(&["曾祖父", "曾祖母"]),
        RelationAtom::new("曾孙女", K::GreatGranddaughter, SelfLine, Direct)
            .with_reverse(&["曾祖父", "曾祖母"]),
        RelationAtom::new("曾外孙", K::GreatGrandson, Maternal, Direct)
            .with_reverse(&["外曾祖父", "外曾祖母"]),
        RelationAtom::new("曾外孙女", K::GreatGranddaughter, Maternal, Direct)
            .with_reverse(&["外曾祖父", "外曾祖母"]),
        // Siblings.
        RelationAtom::new("哥哥", K::OlderBrother, Both, Collateral)
            .with_reverse(&["弟弟", "妹妹"])
            .with_parents(&["爸爸", "妈妈"])
            .with_synonyms(&["兄", "兄长"]),
        RelationAtom::new("弟弟", K::YoungerBrother, Both, Collateral)
            .with_reverse(&["哥哥", "姐姐"])
            .with_parents(&["爸爸", "妈妈"])
            .with_synonyms(&["弟"]),
        RelationAtom::new("姐姐", K::OlderSister, Both, Collateral)
            .with_reverse(&["弟弟", "妹妹"])
            .with_parents(&["爸爸", "妈妈"])
            .with_synonyms(&["姊", "姐"]),
        RelationAtom::new("妹妹", K::YoungerSister, Both, Collateral)
            .with_reverse(&["哥哥", "姐姐"])
            .with_parents(&["爸爸", "妈妈"])
            .with_synonyms(&["妹"]),
        // Father's siblings and their spouses.
        RelationAtom::new("伯伯", K::PaternalUncleOlder, Paternal, Collateral)
            .with_reverse(&["侄子", "侄女"])
            .with_parents(&["爷爷", "奶奶"])
            .with_spouse("伯母")
            .with_synonyms(&["伯父", "伯"]),
        RelationAtom::new("伯母", K::PaternalAuntByMarriageOlder, Paternal, in_law)
            .with_reverse(&["侄子", "侄女"])
            .with_spouse("伯伯"),
        RelationAtom::new("叔叔", K::PaternalUncleYounger, Paternal, Collateral)
            .with_reverse(&["侄子", "侄女"])
            .with_parents(&["爷爷", "奶奶"])
            .with_spouse("婶婶")
            .with_synonyms(&["叔父", "叔"]),
        RelationAtom::new("婶婶", K::PaternalAuntByMarriageYounger, Paternal, in_law)
            .with_reverse(&["侄子", "侄女"])
            .with_spouse("叔叔")
            .with_synonyms(&["婶娘", "婶"]),
        RelationAtom::new("姑姑", K::PaternalAunt, Paternal, Collateral)
            .with_reverse(&["侄子", "侄女"])
            .with_parents(&["爷爷", "奶奶"])
            .with_spouse("姑父")
            .with_synonyms(&["姑妈", "姑母", "姑"]),
        RelationAtom::new("姑父", K::PaternalUncleByMarriage, Paternal, in_law)
            .with_reverse(&["侄子", "侄女"])
            .with_spouse("姑姑")
            .with_synonyms(&["姑丈"]),
        // Mother's siblings and their spouses.
        RelationAtom::new("舅舅", K::MaternalUncle, Maternal, Collateral)
            .with_reverse(&["外甥", "外甥女"])
            .with_parents(&["外公", "外婆"])
            .with_spouse("舅妈")
            .with_synonyms(&["舅父", "舅"]),
        RelationAtom::new("舅妈", K::MaternalAuntByMarriage, Maternal, in_law)
            .with_reverse(&["外甥", "外甥女"])
            .with_spouse("舅舅")
            .with_synonyms(&["舅母"]),
        RelationAtom::new("姨妈", K::MaternalAunt, Maternal, Collateral)
            .with_reverse(&["外甥", "外甥女"])
            .with_parents(&["外公", "外婆"])
            .with_spouse("姨父")
            .with_synonyms(&["姨母", "阿姨", "姨"]),
        RelationAtom::new("姨父", K::MaternalUncleByMarriage, Maternal, in_law)
            .with_reverse(&["外甥", "外甥女"])
            .with_spouse("姨妈")
            .with_synonyms(&["姨丈"]),
        // Cousins.
        RelationAtom::new("堂哥", K::PaternalCousinOlderMale, Paternal, Collateral)
            .with_reverse(&["堂弟", "堂妹"])
            .with_parents(&["伯伯", "叔叔"]),
        RelationAtom::new("堂弟", K::PaternalCousinYoungerMale, Paternal, Collateral)
            .with_reverse(&["堂哥", "堂姐"])
            .with_parents(&["伯伯", "叔叔"]),
        RelationAtom::new("堂姐", K::PaternalCousinOlderFemale, Paternal, Collateral)
            .with_reverse(&["堂弟", "堂妹"])
            .with_parents(&["伯伯", "叔叔"]),
        RelationAtom::new("堂妹", K::PaternalCousinYoungerFemale, Paternal, Collateral)
            .with_reverse(&["堂哥", "堂姐"])
            .with_parents(&["伯伯", "叔叔"]),
        RelationAtom::new("表哥", K::CousinOlderMale, Both, Collateral)
            .with_reverse(&["表弟", "表妹"])
            .with_parents(&["姑姑", "舅舅", "姨妈"]),
        RelationAtom::new("表弟", K::CousinYoungerMale, Both, Collateral)
            .with_reverse(&["表哥", "表姐"])
            .with_parents(&["姑姑", "舅舅", "姨妈"]),
        RelationAtom::new("表姐", K::CousinOlderFemale, Both, Collateral)
            .with_reverse(&["表弟", "表妹"])
            .with_parents(&["姑姑", "舅舅", "姨妈"]),
        RelationAtom::new("表妹", K::CousinYoungerFemale, Both, Collateral)
            .with_reverse(&["表哥", "表姐"])
            .with_parents(&["姑姑", "舅舅", "姨妈"]),
        // Nephews and nieces.
        RelationAtom::new("侄子", K::Nephew, Paternal, Collateral)
            .with_reverse(&["伯伯", "叔叔", "姑姑"])
            .with_synonyms(&["侄"]),
        RelationAtom::new("侄女", K::Niece, Paternal, Collateral)
            .with_reverse(&["伯伯", "叔叔", "姑姑"]),
        RelationAtom::new("外甥", K::Nephew, Maternal, Collateral)
            .with_reverse(&["舅舅", "姨妈"])
            .with_synonyms(&["甥"]),
        RelationAtom::new("外甥女", K::Niece, Maternal, Collateral)
            .with_reverse(&["舅舅", "姨妈"]),
        // Parents-in-law and children-in-law.
        RelationAtom::new("岳父", K::FatherInLaw, InLaw, in_law)
            .with_reverse(&["女婿"])
            .with_spouse("岳母")
            .with_synonyms(&["丈人", "岳丈"]),
        RelationAtom::new("岳母", K::MotherInLaw, InLaw, in_law)
            .with_reverse(&["女婿"])
            .with_spouse("岳父")
            .with_synonyms(&["丈母娘", "丈母"]),
        RelationAtom::new("公公", K::FatherInLaw, InLaw, in_law)
            .with_reverse(&["儿媳"])
            .with_spouse("婆婆")
            .with_synonyms(&["公爹"]),
        RelationAtom::new("婆婆", K::MotherInLaw, InLaw, in_law)
            .with_reverse(&["儿媳"])
            .with_spouse("公公")
            .with_synonyms(&["婆母"]),
        RelationAtom::new("女婿", K::SonInLaw, InLaw, in_law)
            .with_reverse(&["岳父", "岳母"])
            .with_synonyms(&["婿"]),
        RelationAtom::new("儿媳", K::DaughterInLaw, InLaw, in_law)
            .with_reverse(&["公公", "婆婆"])
            .with_synonyms(&["媳妇", "媳"]),
        // Siblings' spouses.
        RelationAtom::new("嫂子", K::SisterInLawOlder, Both, in_law)
            .with_reverse(&["弟弟", "妹妹"])
            .with_spouse("哥哥")
            .with_synonyms(&["嫂"]),
        RelationAtom::new("弟媳", K::SisterInLawYounger, Both, in_law)
            .with_reverse(&["哥哥", "姐姐"])
            .with_spouse("弟弟")
            .with_synonyms(&["弟妹"]),
        RelationAtom::new("姐夫", K::BrotherInLawOlder, Both, in_law)
            .with_reverse(&["弟弟", "妹妹"])
            .with_spouse("姐姐"),
        RelationAtom::new("妹夫", K::BrotherInLawYounger, Both, in_law)
            .with_reverse(&["哥哥", "姐姐"])
            .with_spouse("妹妹"),
        // Husband's siblings and siblings-in-law by marriage.
        RelationAtom::new("大伯子", K::HusbandsOlderBrother, InLaw, in_law)
            .with_reverse(&["弟媳"]),
        RelationAtom::new("小叔子", K::HusbandsYoungerBrother, InLaw, in_law)
            .with_reverse(&["嫂子"]),
        RelationAtom::new("大姑子", K::HusbandsOlderSister, InLaw, in_law)
            .with_reverse(&["弟媳"]),
        RelationAtom::new("小姑子", K::HusbandsYoungerSister, InLaw, in_law)
            .with_reverse(&["嫂子"]),
        RelationAtom::new("连襟", K::CoBrotherInLaw, InLaw, in_law).with_reverse(&["连襟"]),
        RelationAtom::new("妯娌", K::CoSisterInLaw, InLaw, in_law).with_reverse(&["妯娌"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::{build_builtin_catalog, builtin_catalog, SELF_ATOM_ID};
    use crate::model::kind::RelationKind;

    #[test]
    fn builtin_catalog_builds_and_is_shared() {
        let first = builtin_catalog().expect("builtin catalog builds");
        let second = builtin_catalog().expect("builtin catalog builds again");
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }

    #[test]
    fn self_atom_is_registered() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        let anchor = catalog.self_atom().expect("self atom");
        assert_eq!(anchor.id, SELF_ATOM_ID);
        assert_eq!(catalog.resolve_alias("我").map(|a| a.id.as_str()), Some(SELF_ATOM_ID));
    }

    #[test]
    fn shared_kinds_keep_first_registered_representative() {
        let catalog = build_builtin_catalog().expect("builtin catalog builds");
        assert_eq!(
            catalog.lookup_by_relation_kind(RelationKind::Grandfather),
            Some("爷爷")
        );
        assert_eq!(
            catalog.lookup_by_relation_kind(RelationKind::FatherInLaw),
            Some("岳父")
        );
        assert_eq!(
            catalog.lookup_by_relation_kind(RelationKind::Nephew),
            Some("侄子")
        );
    }
}
