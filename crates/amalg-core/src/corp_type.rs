//! # Corp Type Codes
//!
//! The registry's legal type codes for domestically registered businesses.
//! Only three of them drive amalgamation rules (`BC`, `CC`, `ULC`); the rest
//! are carried so that a roster exported by the host round-trips intact.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AmalgError;

/// Corporate legal type code.
///
/// | Code | Variant | Meaning |
/// |------|---------|---------|
/// | `BC`   | BcCompany        | BC limited company |
/// | `BEN`  | BenefitCompany   | BC benefit company |
/// | `CC`   | BcCcc            | BC community contribution company |
/// | `ULC`  | BcUlcCompany     | BC unlimited liability company |
/// | `C`    | Continuein       | Continued-in limited company |
/// | `CBEN` | BenContinuein    | Continued-in benefit company |
/// | `CCC`  | CccContinuein    | Continued-in community contribution company |
/// | `CUL`  | UlcContinuein    | Continued-in unlimited liability company |
/// | `A`    | ExtraProCorp     | Extraprovincial company |
/// | `CP`   | Coop             | Cooperative association |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorpTypeCd {
    /// BC limited company.
    #[serde(rename = "BC")]
    BcCompany,
    /// BC benefit company.
    #[serde(rename = "BEN")]
    BenefitCompany,
    /// BC community contribution company.
    #[serde(rename = "CC")]
    BcCcc,
    /// BC unlimited liability company.
    #[serde(rename = "ULC")]
    BcUlcCompany,
    /// Continued-in limited company.
    #[serde(rename = "C")]
    Continuein,
    /// Continued-in benefit company.
    #[serde(rename = "CBEN")]
    BenContinuein,
    /// Continued-in community contribution company.
    #[serde(rename = "CCC")]
    CccContinuein,
    /// Continued-in unlimited liability company.
    #[serde(rename = "CUL")]
    UlcContinuein,
    /// Extraprovincial company.
    #[serde(rename = "A")]
    ExtraProCorp,
    /// Cooperative association.
    #[serde(rename = "CP")]
    Coop,
}

impl CorpTypeCd {
    /// Every code, in registry table order.
    pub fn all() -> &'static [CorpTypeCd] {
        &[
            Self::BcCompany,
            Self::BenefitCompany,
            Self::BcCcc,
            Self::BcUlcCompany,
            Self::Continuein,
            Self::BenContinuein,
            Self::CccContinuein,
            Self::UlcContinuein,
            Self::ExtraProCorp,
            Self::Coop,
        ]
    }

    /// The registry code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BcCompany => "BC",
            Self::BenefitCompany => "BEN",
            Self::BcCcc => "CC",
            Self::BcUlcCompany => "ULC",
            Self::Continuein => "C",
            Self::BenContinuein => "CBEN",
            Self::CccContinuein => "CCC",
            Self::UlcContinuein => "CUL",
            Self::ExtraProCorp => "A",
            Self::Coop => "CP",
        }
    }

    /// Human-readable description used in CLI output.
    pub fn description(&self) -> &'static str {
        match self {
            Self::BcCompany => "BC Limited Company",
            Self::BenefitCompany => "BC Benefit Company",
            Self::BcCcc => "BC Community Contribution Company",
            Self::BcUlcCompany => "BC Unlimited Liability Company",
            Self::Continuein => "Limited Company (continued in)",
            Self::BenContinuein => "Benefit Company (continued in)",
            Self::CccContinuein => "Community Contribution Company (continued in)",
            Self::UlcContinuein => "Unlimited Liability Company (continued in)",
            Self::ExtraProCorp => "Extraprovincial Company",
            Self::Coop => "Cooperative Association",
        }
    }
}

impl std::fmt::Display for CorpTypeCd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorpTypeCd {
    type Err = AmalgError;

    /// Parse a registry code. Case-sensitive, like the registry itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|cd| cd.as_str() == s)
            .ok_or_else(|| AmalgError::UnknownCorpType(s.to_string()))
    }
}
