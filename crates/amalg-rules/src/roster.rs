//! # Roster Composition Queries
//!
//! Existence queries over the businesses currently in a filing. The rules
//! use `is_any_limited`; the host uses all four to decide which warnings and
//! resulting-type options to show. Rosters hold a handful of businesses, so
//! each query is a linear scan.

use serde::{Deserialize, Serialize};

use amalg_core::{AmalgamatingBusiness, CorpTypeCd};

/// True if the roster contains a foreign business.
pub fn is_any_foreign(roster: &[AmalgamatingBusiness]) -> bool {
    roster.iter().any(AmalgamatingBusiness::is_foreign)
}

/// True if the roster contains a LEAR community contribution company.
pub fn is_any_ccc(roster: &[AmalgamatingBusiness]) -> bool {
    roster.iter().any(|b| b.is_lear_of_type(CorpTypeCd::BcCcc))
}

/// True if the roster contains a LEAR limited company (`BC`).
pub fn is_any_limited(roster: &[AmalgamatingBusiness]) -> bool {
    roster.iter().any(|b| b.is_lear_of_type(CorpTypeCd::BcCompany))
}

/// True if the roster contains a LEAR unlimited liability company.
pub fn is_any_unlimited(roster: &[AmalgamatingBusiness]) -> bool {
    roster.iter().any(|b| b.is_lear_of_type(CorpTypeCd::BcUlcCompany))
}

/// All four composition answers for one roster snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub business_count: usize,
    pub any_foreign: bool,
    pub any_ccc: bool,
    pub any_limited: bool,
    pub any_unlimited: bool,
}

impl RosterSummary {
    pub fn of(roster: &[AmalgamatingBusiness]) -> Self {
        Self {
            business_count: roster.len(),
            any_foreign: is_any_foreign(roster),
            any_ccc: is_any_ccc(roster),
            any_limited: is_any_limited(roster),
            any_unlimited: is_any_unlimited(roster),
        }
    }
}
