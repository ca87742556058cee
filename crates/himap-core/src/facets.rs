//! Closed facet vocabularies.
//!
//! Each facet maps one-to-one onto the literal value found in the dataset
//! (`code`) and carries the label shown on filter chips and detail cards.
//! Dataset values outside these tables are still kept on the record; they
//! simply never match a facet selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolType {
    General,
    Specialized,
    SpecialPurpose,
    Autonomous,
}

impl SchoolType {
    pub const ALL: [SchoolType; 4] = [Self::General, Self::Specialized, Self::SpecialPurpose, Self::Autonomous];

    pub fn code(self) -> &'static str {
        match self {
            Self::General => "일반고",
            Self::Specialized => "특성화고",
            Self::SpecialPurpose => "특목고",
            Self::Autonomous => "자율고",
        }
    }

    /// Chip and badge text. The dataset value already reads well here.
    pub fn label(self) -> &'static str { self.code() }

    pub fn from_code(code: &str) -> Option<Self> { Self::ALL.into_iter().find(|t| t.code() == code) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coed {
    Mixed,
    Boys,
    Girls,
}

impl Coed {
    pub const ALL: [Coed; 3] = [Self::Mixed, Self::Boys, Self::Girls];

    pub fn code(self) -> &'static str {
        match self {
            Self::Mixed => "남여공학",
            Self::Boys => "남",
            Self::Girls => "여",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mixed => "공학",
            Self::Boys => "남학교",
            Self::Girls => "여학교",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> { Self::ALL.into_iter().find(|c| c.code() == code) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Establishment {
    Public,
    Private,
    Other,
}

impl Establishment {
    pub const ALL: [Establishment; 3] = [Self::Public, Self::Private, Self::Other];

    pub fn code(self) -> &'static str {
        match self {
            Self::Public => "공립",
            Self::Private => "사립",
            Self::Other => crate::types::UNKNOWN_ESTABLISHMENT,
        }
    }

    pub fn label(self) -> &'static str { self.code() }

    pub fn from_code(code: &str) -> Option<Self> { Self::ALL.into_iter().find(|e| e.code() == code) }
}

/// Label for a raw coed value, falling back to the value itself.
pub fn coed_label(value: &str) -> &str { Coed::from_code(value).map_or(value, |c| c.label()) }

/// Label for a raw school type value, falling back to the value itself.
pub fn school_type_label(value: &str) -> &str { SchoolType::from_code(value).map_or(value, |t| t.label()) }

/// Parses a facet value given either as the dataset code or the display label.
pub trait FacetValue: Sized + Copy + 'static {
    const ALL: &'static [Self];
    fn code(self) -> &'static str;
    fn label(self) -> &'static str;

    fn parse(input: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == input || v.label() == input)
    }
}

impl FacetValue for SchoolType {
    const ALL: &'static [Self] = &SchoolType::ALL;
    fn code(self) -> &'static str { SchoolType::code(self) }
    fn label(self) -> &'static str { SchoolType::label(self) }
}

impl FacetValue for Coed {
    const ALL: &'static [Self] = &Coed::ALL;
    fn code(self) -> &'static str { Coed::code(self) }
    fn label(self) -> &'static str { Coed::label(self) }
}

impl FacetValue for Establishment {
    const ALL: &'static [Self] = &Establishment::ALL;
    fn code(self) -> &'static str { Establishment::code(self) }
    fn label(self) -> &'static str { Establishment::label(self) }
}
