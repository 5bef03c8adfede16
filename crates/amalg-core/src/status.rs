//! # Amalgamation Status
//!
//! The nine outcomes of evaluating a business against the amalgamation
//! rules: `Ok` plus one status per rule. These are values, not errors. The
//! host decides how to present a violation (dialog text, a disabled action).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AmalgError;

/// Result of an eligibility evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmlStatus {
    /// No rule is violated.
    #[default]
    Ok,
    /// Caller has no access to the business's registry data.
    #[serde(rename = "ERROR_NOT_AFFILIATED")]
    NotAffiliated,
    /// Business is not in good standing.
    #[serde(rename = "ERROR_NOT_IN_GOOD_STANDING")]
    NotInGoodStanding,
    /// Business is under limited restoration.
    #[serde(rename = "ERROR_LIMITED_RESTORATION")]
    LimitedRestoration,
    /// Business has a pending future effective filing.
    #[serde(rename = "ERROR_FUTURE_EFFECTIVE_FILING")]
    FutureEffectiveFiling,
    /// Foreign businesses may only be added by staff.
    #[serde(rename = "ERROR_FOREIGN")]
    Foreign,
    /// Foreign business cannot join a ULC amalgamation that holds a limited company.
    ///
    /// The registry UI reports this rule as `ERROR_FOREIGN`, the same value as
    /// [`AmlStatus::Foreign`]. Hosts that match on `ERROR_FOREIGN` to block a
    /// foreign business must also handle `ERROR_FOREIGN_UNLIMITED`.
    #[serde(rename = "ERROR_FOREIGN_UNLIMITED")]
    ForeignUnlimited,
    /// CCC business in an amalgamation whose result is not a CCC.
    #[serde(rename = "ERROR_CCC_MISMATCH")]
    CccMismatch,
    /// ULC business in an amalgamation whose result is not a ULC.
    #[serde(rename = "ERROR_ULC_MISMATCH")]
    UlcMismatch,
}

impl AmlStatus {
    /// All statuses; `Ok` first, then violations in rule priority order.
    pub fn all() -> &'static [AmlStatus] {
        &[
            Self::Ok,
            Self::NotAffiliated,
            Self::NotInGoodStanding,
            Self::LimitedRestoration,
            Self::FutureEffectiveFiling,
            Self::Foreign,
            Self::ForeignUnlimited,
            Self::CccMismatch,
            Self::UlcMismatch,
        ]
    }

    /// Whether this status is the absence of a violation.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether this status is a rule violation.
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// The registry wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotAffiliated => "ERROR_NOT_AFFILIATED",
            Self::NotInGoodStanding => "ERROR_NOT_IN_GOOD_STANDING",
            Self::LimitedRestoration => "ERROR_LIMITED_RESTORATION",
            Self::FutureEffectiveFiling => "ERROR_FUTURE_EFFECTIVE_FILING",
            Self::Foreign => "ERROR_FOREIGN",
            Self::ForeignUnlimited => "ERROR_FOREIGN_UNLIMITED",
            Self::CccMismatch => "ERROR_CCC_MISMATCH",
            Self::UlcMismatch => "ERROR_ULC_MISMATCH",
        }
    }

    /// Short explanation suitable for CLI output.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Ok => "business is eligible for this amalgamation",
            Self::NotAffiliated => "business is not affiliated with the current account",
            Self::NotInGoodStanding => "business is not in good standing",
            Self::LimitedRestoration => "business is under limited restoration",
            Self::FutureEffectiveFiling => "business has a future effective filing pending",
            Self::Foreign => "foreign businesses can only be added by staff",
            Self::ForeignUnlimited => {
                "foreign business cannot join an unlimited amalgamation that includes a limited company"
            }
            Self::CccMismatch => "a CCC can only amalgamate into a CCC",
            Self::UlcMismatch => "a ULC can only amalgamate into a ULC",
        }
    }
}

impl std::fmt::Display for AmlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmlStatus {
    type Err = AmalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AmalgError::UnknownStatus(s.to_string()))
    }
}
