//! Single-step inference: `(current atom, next relation) -> title(s)`.
//!
//! # Responsibility
//! - Dispatch on the current atom's kind (and branch where the title
//!   depends on it) against the next atom's kind.
//!
//! # Invariants
//! - From the self anchor, the next atom itself is the result.
//! - A pair without a rule is `UnresolvableStep`, never a guess.
//! - Multi-candidate rules are ordered; the first is the default choice.
//!   Sibling seniority relative to self is not modeled, so e.g. a father's
//!   son is always `哥哥` before `弟弟`.

use crate::catalog::registry::RelationCatalog;
use crate::model::atom::{Gender, LineageBranch, RelationAtom};
use crate::model::kind::RelationKind;
use crate::model::resolution::Resolution;
use crate::resolve::error::ResolveError;

/// Applies one relation step.
///
/// `current` must be a canonical id produced by an earlier step; `next` is a
/// normalized token.
///
/// # Errors
/// - `UnknownToken` when `next` is not a registered atom.
/// - `UnresolvableStep` when no rule covers the pair.
/// - `Internal` when `current` or a rule target is not registered.
pub fn step(
    catalog: &RelationCatalog,
    current: &str,
    next: &str,
) -> Result<Resolution, ResolveError> {
    let current_atom = catalog.get_atom(current).ok_or_else(|| {
        ResolveError::Internal(format!("step started from unregistered atom `{current}`"))
    })?;
    let next_atom = catalog
        .resolve_alias(next)
        .ok_or_else(|| ResolveError::UnknownToken(next.to_string()))?;

    if current_atom.is_self() {
        return Ok(Resolution::Resolved(next_atom.id.clone()));
    }

    if let Some(candidates) = rule_candidates(current_atom, next_atom.kind) {
        for candidate in candidates {
            if catalog.get_atom(candidate).is_none() {
                return Err(ResolveError::Internal(format!(
                    "rule target `{candidate}` is not registered"
                )));
            }
        }
        return Resolution::from_candidates(candidates.iter().copied()).ok_or_else(|| {
            ResolveError::Internal(format!("empty rule for `{current}` -> `{next}`"))
        });
    }

    if let Some(spouse) = spouse_of(catalog, current_atom, next_atom.kind) {
        return Ok(Resolution::Resolved(spouse.id.clone()));
    }

    Err(ResolveError::UnresolvableStep {
        current: current_atom.id.clone(),
        next: next_atom.id.clone(),
    })
}

/// Resolves `husband`/`wife` through the current atom's recorded spouse.
fn spouse_of<'a>(
    catalog: &'a RelationCatalog,
    current: &RelationAtom,
    next: RelationKind,
) -> Option<&'a RelationAtom> {
    let wanted = match next {
        RelationKind::Husband => Gender::Male,
        RelationKind::Wife => Gender::Female,
        _ => return None,
    };
    let spouse = catalog.get_atom(current.spouse_atom.as_deref()?)?;
    (spouse.gender == wanted).then_some(spouse)
}

fn rule_candidates(current: &RelationAtom, next: RelationKind) -> Option<&'static [&'static str]> {
    use LineageBranch::{Maternal, Paternal};
    use RelationKind as K;

    let candidates: &'static [&'static str] = match (current.kind, current.branch, next) {
        (K::Father, _, K::Father) => &["爷爷"],
        (K::Father, _, K::Mother) => &["奶奶"],
        (K::Father, _, K::OlderBrother) => &["伯伯"],
        (K::Father, _, K::YoungerBrother) => &["叔叔"],
        (K::Father, _, K::OlderSister | K::YoungerSister) => &["姑姑"],
        (K::Father, _, K::Son) => &["哥哥", "弟弟"],
        (K::Father, _, K::Daughter) => &["姐姐", "妹妹"],
        (K::Father, _, K::Wife) => &["妈妈"],

        (K::Mother, _, K::Father) => &["外公"],
        (K::Mother, _, K::Mother) => &["外婆"],
        (K::Mother, _, K::OlderBrother | K::YoungerBrother) => &["舅舅"],
        (K::Mother, _, K::OlderSister | K::YoungerSister) => &["姨妈"],
        (K::Mother, _, K::Son) => &["哥哥", "弟弟"],
        (K::Mother, _, K::Daughter) => &["姐姐", "妹妹"],
        (K::Mother, _, K::Husband) => &["爸爸"],

        (K::Grandfather, Paternal, K::Father) => &["曾祖父"],
        (K::Grandfather, Paternal, K::Mother) => &["曾祖母"],
        (K::Grandfather, Paternal, K::OlderBrother) => &["伯祖父"],
        (K::Grandfather, Paternal, K::YoungerBrother) => &["叔祖父"],
        (K::Grandfather, Paternal, K::OlderSister | K::YoungerSister) => &["姑祖母"],
        (K::Grandfather, Paternal, K::Son) => &["爸爸", "叔叔", "伯伯"],
        (K::Grandfather, Paternal, K::Daughter) => &["姑姑"],
        (K::Grandfather, Paternal, K::Wife) => &["奶奶"],

        (K::Grandmother, Paternal, K::OlderBrother | K::YoungerBrother) => &["舅公"],
        (K::Grandmother, Paternal, K::OlderSister | K::YoungerSister) => &["姨婆"],
        (K::Grandmother, Paternal, K::Son) => &["爸爸", "叔叔", "伯伯"],
        (K::Grandmother, Paternal, K::Daughter) => &["姑姑"],
        (K::Grandmother, Paternal, K::Husband) => &["爷爷"],

        (K::Grandfather, Maternal, K::Father) => &["外曾祖父"],
        (K::Grandfather, Maternal, K::Mother) => &["外曾祖母"],
        (K::Grandfather, Maternal, K::OlderBrother) => &["外伯祖父"],
        (K::Grandfather, Maternal, K::YoungerBrother) => &["外叔祖父"],
        (K::Grandfather, Maternal, K::OlderSister | K::YoungerSister) => &["外姑祖母"],
        (K::Grandfather, Maternal, K::Son) => &["舅舅"],
        (K::Grandfather, Maternal, K::Daughter) => &["姨妈"],
        (K::Grandfather, Maternal, K::Wife) => &["外婆"],

        (K::Grandmother, Maternal, K::OlderBrother | K::YoungerBrother) => &["外舅公"],
        (K::Grandmother, Maternal, K::OlderSister | K::YoungerSister) => &["外姨婆"],
        (K::Grandmother, Maternal, K::Son) => &["舅舅"],
        (K::Grandmother, Maternal, K::Daughter) => &["姨妈"],
        (K::Grandmother, Maternal, K::Husband) => &["外公"],

        (K::OlderBrother | K::YoungerBrother, _, K::Son) => &["侄子"],
        (K::OlderBrother | K::YoungerBrother, _, K::Daughter) => &["侄女"],
        (K::OlderBrother, _, K::Wife) => &["嫂子"],
        (K::YoungerBrother, _, K::Wife) => &["弟媳"],
        (K::OlderBrother | K::YoungerBrother, _, K::Father) => &["爸爸"],
        (K::OlderBrother | K::YoungerBrother, _, K::Mother) => &["妈妈"],

        (K::OlderSister | K::YoungerSister, _, K::Son) => &["外甥"],
        (K::OlderSister | K::YoungerSister, _, K::Daughter) => &["外甥女"],
        (K::OlderSister, _, K::Husband) => &["姐夫"],
        (K::YoungerSister, _, K::Husband) => &["妹夫"],
        (K::OlderSister | K::YoungerSister, _, K::Father) => &["爸爸"],
        (K::OlderSister | K::YoungerSister, _, K::Mother) => &["妈妈"],

        (K::PaternalUncleOlder | K::PaternalUncleYounger, _, K::Son) => &["堂哥", "堂弟"],
        (K::PaternalUncleOlder | K::PaternalUncleYounger, _, K::Daughter) => &["堂姐", "堂妹"],
        (K::PaternalUncleOlder, _, K::Wife) => &["伯母"],
        (K::PaternalUncleYounger, _, K::Wife) => &["婶婶"],
        (K::PaternalUncleOlder | K::PaternalUncleYounger, _, K::Father) => &["爷爷"],
        (K::PaternalUncleOlder | K::PaternalUncleYounger, _, K::Mother) => &["奶奶"],

        (K::PaternalAunt, _, K::Son) => &["表哥", "表弟"],
        (K::PaternalAunt, _, K::Daughter) => &["表姐", "表妹"],
        (K::PaternalAunt, _, K::Husband) => &["姑父"],
        (K::PaternalAunt, _, K::Father) => &["爷爷"],
        (K::PaternalAunt, _, K::Mother) => &["奶奶"],

        (K::MaternalUncle, _, K::Son) => &["表哥", "表弟"],
        (K::MaternalUncle, _, K::Daughter) => &["表姐", "表妹"],
        (K::MaternalUncle, _, K::Wife) => &["舅妈"],
        (K::MaternalUncle, _, K::Father) => &["外公"],
        (K::MaternalUncle, _, K::Mother) => &["外婆"],

        (K::MaternalAunt, _, K::Son) => &["表哥", "表弟"],
        (K::MaternalAunt, _, K::Daughter) => &["表姐", "表妹"],
        (K::MaternalAunt, _, K::Husband) => &["姨父"],
        (K::MaternalAunt, _, K::Father) => &["外公"],
        (K::MaternalAunt, _, K::Mother) => &["外婆"],

        (K::Husband, _, K::Father) => &["公公"],
        (K::Husband, _, K::Mother) => &["婆婆"],
        (K::Husband, _, K::OlderBrother) => &["大伯子"],
        (K::Husband, _, K::YoungerBrother) => &["小叔子"],
        (K::Husband, _, K::OlderSister) => &["大姑子"],
        (K::Husband, _, K::YoungerSister) => &["小姑子"],
        (K::Husband, _, K::Son) => &["儿子"],
        (K::Husband, _, K::Daughter) => &["女儿"],
        (K::Husband, _, K::Wife) => &["自己"],

        (K::Wife, _, K::Father) => &["岳父"],
        (K::Wife, _, K::Mother) => &["岳母"],
        (K::Wife, _, K::Son) => &["儿子"],
        (K::Wife, _, K::Daughter) => &["女儿"],
        (K::Wife, _, K::Husband) => &["自己"],

        (K::Son, _, K::Son) => &["孙子"],
        (K::Son, _, K::Daughter) => &["孙女"],
        (K::Son, _, K::Wife) => &["儿媳"],
        (K::Daughter, _, K::Son) => &["外孙"],
        (K::Daughter, _, K::Daughter) => &["外孙女"],
        (K::Daughter, _, K::Husband) => &["女婿"],

        (K::Grandson, LineageBranch::SelfLine, K::Son) => &["曾孙"],
        (K::Grandson, LineageBranch::SelfLine, K::Daughter) => &["曾孙女"],
        (K::Grandson, _, K::Son) | (K::Granddaughter, _, K::Son) => &["曾外孙"],
        (K::Grandson, _, K::Daughter) | (K::Granddaughter, _, K::Daughter) => &["曾外孙女"],

        _ => return None,
    };
    Some(candidates)
}
