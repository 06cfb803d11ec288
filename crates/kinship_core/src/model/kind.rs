//! Closed set of relation kinds.
//!
//! # Responsibility
//! - Name every elementary kinship relation the engine reasons about.
//! - Carry the per-kind facts that do not depend on lineage branch
//!   (generation offset, gender).
//!
//! # Invariants
//! - Several atoms may share one kind across branches (e.g. `Grandfather`
//!   for both 爷爷 and 外公); the branch disambiguates them.
//! - `as_str` values are stable and match the serde wire names.

use crate::model::atom::Gender;
use serde::{Deserialize, Serialize};

/// Elementary relation kind of one atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    GreatGrandfather,
    GreatGrandmother,
    Grandfather,
    Grandmother,
    GrandfathersOlderBrother,
    GrandfathersYoungerBrother,
    GrandfathersSister,
    GrandmothersBrother,
    GrandmothersSister,
    Father,
    Mother,
    PaternalUncleOlder,
    PaternalUncleYounger,
    PaternalAuntByMarriageOlder,
    PaternalAuntByMarriageYounger,
    PaternalAunt,
    PaternalUncleByMarriage,
    MaternalUncle,
    MaternalAuntByMarriage,
    MaternalAunt,
    MaternalUncleByMarriage,
    FatherInLaw,
    MotherInLaw,
    #[serde(rename = "self")]
    Myself,
    Husband,
    Wife,
    OlderBrother,
    YoungerBrother,
    OlderSister,
    YoungerSister,
    PaternalCousinOlderMale,
    PaternalCousinYoungerMale,
    PaternalCousinOlderFemale,
    PaternalCousinYoungerFemale,
    CousinOlderMale,
    CousinYoungerMale,
    CousinOlderFemale,
    CousinYoungerFemale,
    SisterInLawOlder,
    SisterInLawYounger,
    BrotherInLawOlder,
    BrotherInLawYounger,
    HusbandsOlderBrother,
    HusbandsYoungerBrother,
    HusbandsOlderSister,
    HusbandsYoungerSister,
    CoBrotherInLaw,
    CoSisterInLaw,
    Son,
    Daughter,
    Nephew,
    Niece,
    SonInLaw,
    DaughterInLaw,
    Grandson,
    Granddaughter,
    GreatGrandson,
    GreatGranddaughter,
}

impl RelationKind {
    /// Stable tag used in logs and serialized atoms.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GreatGrandfather => "great-grandfather",
            Self::GreatGrandmother => "great-grandmother",
            Self::Grandfather => "grandfather",
            Self::Grandmother => "grandmother",
            Self::GrandfathersOlderBrother => "grandfathers-older-brother",
            Self::GrandfathersYoungerBrother => "grandfathers-younger-brother",
            Self::GrandfathersSister => "grandfathers-sister",
            Self::GrandmothersBrother => "grandmothers-brother",
            Self::GrandmothersSister => "grandmothers-sister",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::PaternalUncleOlder => "paternal-uncle-older",
            Self::PaternalUncleYounger => "paternal-uncle-younger",
            Self::PaternalAuntByMarriageOlder => "paternal-aunt-by-marriage-older",
            Self::PaternalAuntByMarriageYounger => "paternal-aunt-by-marriage-younger",
            Self::PaternalAunt => "paternal-aunt",
            Self::PaternalUncleByMarriage => "paternal-uncle-by-marriage",
            Self::MaternalUncle => "maternal-uncle",
            Self::MaternalAuntByMarriage => "maternal-aunt-by-marriage",
            Self::MaternalAunt => "maternal-aunt",
            Self::MaternalUncleByMarriage => "maternal-uncle-by-marriage",
            Self::FatherInLaw => "father-in-law",
            Self::MotherInLaw => "mother-in-law",
            Self::Myself => "self",
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::OlderBrother => "older-brother",
            Self::YoungerBrother => "younger-brother",
            Self::OlderSister => "older-sister",
            Self::YoungerSister => "younger-sister",
            Self::PaternalCousinOlderMale => "paternal-cousin-older-male",
            Self::PaternalCousinYoungerMale => "paternal-cousin-younger-male",
            Self::PaternalCousinOlderFemale => "paternal-cousin-older-female",
            Self::PaternalCousinYoungerFemale => "paternal-cousin-younger-female",
            Self::CousinOlderMale => "cousin-older-male",
            Self::CousinYoungerMale => "cousin-younger-male",
            Self::CousinOlderFemale => "cousin-older-female",
            Self::CousinYoungerFemale => "cousin-younger-female",
            Self::SisterInLawOlder => "sister-in-law-older",
            Self::SisterInLawYounger => "sister-in-law-younger",
            Self::BrotherInLawOlder => "brother-in-law-older",
            Self::BrotherInLawYounger => "brother-in-law-younger",
            Self::HusbandsOlderBrother => "husbands-older-brother",
            Self::HusbandsYoungerBrother => "husbands-younger-brother",
            Self::HusbandsOlderSister => "husbands-older-sister",
            Self::HusbandsYoungerSister => "husbands-younger-sister",
            Self::CoBrotherInLaw => "co-brother-in-law",
            Self::CoSisterInLaw => "co-sister-in-law",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Nephew => "nephew",
            Self::Niece => "niece",
            Self::SonInLaw => "son-in-law",
            Self::DaughterInLaw => "daughter-in-law",
            Self::Grandson => "grandson",
            Self::Granddaughter => "granddaughter",
            Self::GreatGrandson => "great-grandson",
            Self::GreatGranddaughter => "great-granddaughter",
        }
    }

    /// Generic generation offset for this kind.
    ///
    /// Ancestors are positive, descendants negative; self, spouses and
    /// same-generation collaterals are `0`.
    pub fn generation(self) -> i32 {
        match self {
            Self::GreatGrandfather | Self::GreatGrandmother => 3,
            Self::Grandfather
            | Self::Grandmother
            | Self::GrandfathersOlderBrother
            | Self::GrandfathersYoungerBrother
            | Self::GrandfathersSister
            | Self::GrandmothersBrother
            | Self::GrandmothersSister => 2,
            Self::Father
            | Self::Mother
            | Self::PaternalUncleOlder
            | Self::PaternalUncleYounger
            | Self::PaternalAuntByMarriageOlder
            | Self::PaternalAuntByMarriageYounger
            | Self::PaternalAunt
            | Self::PaternalUncleByMarriage
            | Self::MaternalUncle
            | Self::MaternalAuntByMarriage
            | Self::MaternalAunt
            | Self::MaternalUncleByMarriage
            | Self::FatherInLaw
            | Self::MotherInLaw => 1,
            Self::Myself
            | Self::Husband
            | Self::Wife
            | Self::OlderBrother
            | Self::YoungerBrother
            | Self::OlderSister
            | Self::YoungerSister
            | Self::PaternalCousinOlderMale
            | Self::PaternalCousinYoungerMale
            | Self::PaternalCousinOlderFemale
            | Self::PaternalCousinYoungerFemale
            | Self::CousinOlderMale
            | Self::CousinYoungerMale
            | Self::CousinOlderFemale
            | Self::CousinYoungerFemale
            | Self::SisterInLawOlder
            | Self::SisterInLawYounger
            | Self::BrotherInLawOlder
            | Self::BrotherInLawYounger
            | Self::HusbandsOlderBrother
            | Self::HusbandsYoungerBrother
            | Self::HusbandsOlderSister
            | Self::HusbandsYoungerSister
            | Self::CoBrotherInLaw
            | Self::CoSisterInLaw => 0,
            Self::Son
            | Self::Daughter
            | Self::Nephew
            | Self::Niece
            | Self::SonInLaw
            | Self::DaughterInLaw => -1,
            Self::Grandson | Self::Granddaughter => -2,
            Self::GreatGrandson | Self::GreatGranddaughter => -3,
        }
    }

    /// Gender implied by this kind. Only `Myself` is `Unknown`.
    pub fn gender(self) -> Gender {
        match self {
            Self::Myself => Gender::Unknown,
            Self::GreatGrandmother
            | Self::Grandmother
            | Self::GrandfathersSister
            | Self::GrandmothersSister
            | Self::Mother
            | Self::PaternalAuntByMarriageOlder
            | Self::PaternalAuntByMarriageYounger
            | Self::PaternalAunt
            | Self::MaternalAuntByMarriage
            | Self::MaternalAunt
            | Self::MotherInLaw
            | Self::Wife
            | Self::OlderSister
            | Self::YoungerSister
            | Self::PaternalCousinOlderFemale
            | Self::PaternalCousinYoungerFemale
            | Self::CousinOlderFemale
            | Self::CousinYoungerFemale
            | Self::SisterInLawOlder
            | Self::SisterInLawYounger
            | Self::HusbandsOlderSister
            | Self::HusbandsYoungerSister
            | Self::CoSisterInLaw
            | Self::Daughter
            | Self::Niece
            | Self::DaughterInLaw
            | Self::Granddaughter
            | Self::GreatGranddaughter => Gender::Female,
            _ => Gender::Male,
        }
    }
}
