//! # Amalgamation Rules
//!
//! The eight eligibility rules, in priority order. [`evaluate()`] runs them
//! fail-fast and reports the first violation; when several rules would fail
//! at once, the order below decides which single status the host shows.
//!
//! ```text
//!  #  Rule                   Applies to  Staff exempt  Status
//!  1  NotAffiliated          LEAR        yes           ERROR_NOT_AFFILIATED
//!  2  NotInGoodStanding      LEAR        yes           ERROR_NOT_IN_GOOD_STANDING
//!  3  LimitedRestoration     LEAR        yes           ERROR_LIMITED_RESTORATION
//!  4  FutureEffectiveFiling  LEAR        no            ERROR_FUTURE_EFFECTIVE_FILING
//!  5  Foreign                FOREIGN     yes           ERROR_FOREIGN
//!  6  ForeignUlc             FOREIGN     no            ERROR_FOREIGN_UNLIMITED
//!  7  CccMismatch            LEAR        no            ERROR_CCC_MISMATCH
//!  8  UlcMismatch            LEAR        no            ERROR_ULC_MISMATCH
//! ```
//!
//! A foreign business in a draft can outlive the staff session that added
//! it, which is why rule 5 also applies to businesses already in the roster.

use serde::{Deserialize, Serialize};

use amalg_core::{AmalgamatingBusiness, AmlStatus, CorpTypeCd};

use crate::context::EvaluationContext;
use crate::roster::is_any_limited;

/// Number of rules in the chain.
pub const RULE_COUNT: usize = 8;

/// An amalgamation eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmalgamationRule {
    /// No address means the filer is not affiliated with the business.
    NotAffiliated,
    /// Business is not in good standing.
    NotInGoodStanding,
    /// Business is under limited restoration.
    LimitedRestoration,
    /// Business has a future effective filing pending. Applies to staff too.
    FutureEffectiveFiling,
    /// Foreign businesses are staff-only.
    Foreign,
    /// Foreign business into a ULC when the roster already has a limited company.
    ForeignUlc,
    /// CCC business into a non-CCC result.
    CccMismatch,
    /// ULC business into a non-ULC result.
    UlcMismatch,
}

impl AmalgamationRule {
    /// Rules in evaluation order, most important first.
    pub const ORDERED: [AmalgamationRule; RULE_COUNT] = [
        Self::NotAffiliated,
        Self::NotInGoodStanding,
        Self::LimitedRestoration,
        Self::FutureEffectiveFiling,
        Self::Foreign,
        Self::ForeignUlc,
        Self::CccMismatch,
        Self::UlcMismatch,
    ];

    /// Position in the chain, starting at 1.
    pub fn priority(&self) -> usize {
        *self as usize + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAffiliated => "not_affiliated",
            Self::NotInGoodStanding => "not_in_good_standing",
            Self::LimitedRestoration => "limited_restoration",
            Self::FutureEffectiveFiling => "future_effective_filing",
            Self::Foreign => "foreign",
            Self::ForeignUlc => "foreign_ulc",
            Self::CccMismatch => "ccc_mismatch",
            Self::UlcMismatch => "ulc_mismatch",
        }
    }

    /// The status reported when this rule is violated.
    pub fn status(&self) -> AmlStatus {
        match self {
            Self::NotAffiliated => AmlStatus::NotAffiliated,
            Self::NotInGoodStanding => AmlStatus::NotInGoodStanding,
            Self::LimitedRestoration => AmlStatus::LimitedRestoration,
            Self::FutureEffectiveFiling => AmlStatus::FutureEffectiveFiling,
            Self::Foreign => AmlStatus::Foreign,
            Self::ForeignUlc => AmlStatus::ForeignUnlimited,
            Self::CccMismatch => AmlStatus::CccMismatch,
            Self::UlcMismatch => AmlStatus::UlcMismatch,
        }
    }

    /// Whether staff filers bypass this rule.
    pub fn exempts_staff(&self) -> bool {
        matches!(
            self,
            Self::NotAffiliated | Self::NotInGoodStanding | Self::LimitedRestoration | Self::Foreign
        )
    }

    /// Whether `business` violates this rule under `ctx`.
    pub fn is_violated_by(
        &self,
        business: &AmalgamatingBusiness,
        ctx: &EvaluationContext<'_>,
    ) -> bool {
        let staff = ctx.is_role_staff;
        match self {
            Self::NotAffiliated => business.is_lear() && business.address.is_none() && !staff,
            Self::NotInGoodStanding => {
                business.is_lear() && business.is_not_in_good_standing && !staff
            }
            Self::LimitedRestoration => {
                business.is_lear() && business.is_limited_restoration && !staff
            }
            Self::FutureEffectiveFiling => business.is_lear() && business.is_future_effective,
            Self::Foreign => business.is_foreign() && !staff,
            Self::ForeignUlc => {
                business.is_foreign() && ctx.is_target_type_ulc && is_any_limited(ctx.roster)
            }
            Self::CccMismatch => {
                business.is_lear_of_type(CorpTypeCd::BcCcc) && !ctx.is_target_type_ccc
            }
            Self::UlcMismatch => {
                business.is_lear_of_type(CorpTypeCd::BcUlcCompany) && !ctx.is_target_type_ulc
            }
        }
    }

    /// The violation status, or `None` when the rule passes.
    pub fn check(
        &self,
        business: &AmalgamatingBusiness,
        ctx: &EvaluationContext<'_>,
    ) -> Option<AmlStatus> {
        self.is_violated_by(business, ctx).then_some(self.status())
    }

    // TODO: disallow a foreign ULC when the roster has a BC company and the result is a ULC.
    // TODO: disallow a BC company when the roster has a foreign ULC and the result is a ULC.
}

impl std::fmt::Display for AmalgamationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Evaluation ──────────────────────────────────────────────────────

/// Evaluate `business` against every rule, stopping at the first violation.
///
/// Returns [`AmlStatus::Ok`] when no rule is violated.
pub fn evaluate(business: &AmalgamatingBusiness, ctx: &EvaluationContext<'_>) -> AmlStatus {
    for rule in AmalgamationRule::ORDERED {
        if let Some(status) = rule.check(business, ctx) {
            tracing::debug!(
                business = business.label(),
                rule = %rule,
                %status,
                "amalgamation rule violated"
            );
            return status;
        }
    }
    tracing::trace!(business = business.label(), "all amalgamation rules passed");
    AmlStatus::Ok
}

/// Every rule `business` violates, in priority order.
///
/// The first element, if any, is what [`evaluate()`] returns.
pub fn violations(
    business: &AmalgamatingBusiness,
    ctx: &EvaluationContext<'_>,
) -> Vec<AmlStatus> {
    AmalgamationRule::ORDERED
        .iter()
        .filter_map(|rule| rule.check(business, ctx))
        .collect()
}

/// Outcome for one roster member.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessEvaluation<'a> {
    pub business: &'a AmalgamatingBusiness,
    pub status: AmlStatus,
}

/// Evaluate every business already in the roster against the same context.
pub fn evaluate_roster<'a>(ctx: &EvaluationContext<'a>) -> Vec<BusinessEvaluation<'a>> {
    ctx.roster
        .iter()
        .map(|business| BusinessEvaluation {
            business,
            status: evaluate(business, ctx),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use amalg_core::Address;

    fn addressed(cd: CorpTypeCd) -> AmalgamatingBusiness {
        AmalgamatingBusiness::lear("BC0000001", cd).with_address(Address::default())
    }

    #[test]
    fn test_ordered_matches_priority() {
        for (i, rule) in AmalgamationRule::ORDERED.iter().enumerate() {
            assert_eq!(rule.priority(), i + 1);
        }
    }

    #[test]
    fn test_statuses_are_distinct_violations() {
        let mut seen = std::collections::HashSet::new();
        for rule in AmalgamationRule::ORDERED {
            assert!(rule.status().is_error());
            assert!(seen.insert(rule.status()), "duplicate status for {rule}");
        }
    }

    #[test]
    fn test_clean_business_is_ok() {
        let ctx = EvaluationContext::new(&[]);
        assert_eq!(evaluate(&addressed(CorpTypeCd::BcCompany), &ctx), AmlStatus::Ok);
        assert!(violations(&addressed(CorpTypeCd::BcCompany), &ctx).is_empty());
    }

    #[test]
    fn test_not_affiliated_wins_over_everything() {
        let business = AmalgamatingBusiness::lear("BC0000002", CorpTypeCd::BcCcc)
            .not_in_good_standing()
            .limited_restoration()
            .future_effective();
        let ctx = EvaluationContext::new(&[]);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::NotAffiliated);
        assert_eq!(
            violations(&business, &ctx),
            vec![
                AmlStatus::NotAffiliated,
                AmlStatus::NotInGoodStanding,
                AmlStatus::LimitedRestoration,
                AmlStatus::FutureEffectiveFiling,
                AmlStatus::CccMismatch,
            ]
        );
    }

    #[test]
    fn test_nigs_before_limited_restoration() {
        let business = addressed(CorpTypeCd::BcCompany)
            .not_in_good_standing()
            .limited_restoration();
        let ctx = EvaluationContext::new(&[]);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::NotInGoodStanding);
    }

    #[test]
    fn test_staff_still_blocked_by_future_effective() {
        let business = AmalgamatingBusiness::lear("BC0000003", CorpTypeCd::BcCompany)
            .not_in_good_standing()
            .limited_restoration()
            .future_effective();
        let ctx = EvaluationContext::new(&[]).with_staff(true);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::FutureEffectiveFiling);
    }

    #[test]
    fn test_ccc_mismatch() {
        let business = addressed(CorpTypeCd::BcCcc);
        let ctx = EvaluationContext::new(&[]);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::CccMismatch);
        let ctx = ctx.with_target_ccc(true);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::Ok);
    }

    #[test]
    fn test_ulc_mismatch() {
        let business = addressed(CorpTypeCd::BcUlcCompany);
        let ctx = EvaluationContext::new(&[]);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::UlcMismatch);
        let ctx = ctx.with_target_ulc(true);
        assert_eq!(evaluate(&business, &ctx), AmlStatus::Ok);
    }

    #[test]
    fn test_foreign_non_staff_before_foreign_ulc() {
        let roster = vec![addressed(CorpTypeCd::BcCompany)];
        let ctx = EvaluationContext::new(&roster).with_target_ulc(true);
        let foreign = AmalgamatingBusiness::foreign("Acme Delaware Inc.");
        assert_eq!(evaluate(&foreign, &ctx), AmlStatus::Foreign);
    }

    #[test]
    fn test_foreign_ulc_conflict_for_staff() {
        let roster = vec![addressed(CorpTypeCd::BcCompany)];
        let ctx = EvaluationContext::new(&roster)
            .with_staff(true)
            .with_target_ulc(true);
        let foreign = AmalgamatingBusiness::foreign("Acme Delaware Inc.");
        assert_eq!(evaluate(&foreign, &ctx), AmlStatus::ForeignUnlimited);
    }

    #[test]
    fn test_foreign_staff_allowed_without_limited() {
        let roster = vec![addressed(CorpTypeCd::BcUlcCompany)];
        let ctx = EvaluationContext::new(&roster)
            .with_staff(true)
            .with_target_ulc(true);
        let foreign = AmalgamatingBusiness::foreign("Acme Delaware Inc.");
        assert_eq!(evaluate(&foreign, &ctx), AmlStatus::Ok);
    }

    #[test]
    fn test_foreign_ignores_lear_flags() {
        let mut foreign = AmalgamatingBusiness::foreign("Acme Delaware Inc.")
            .not_in_good_standing()
            .future_effective();
        foreign.legal_type = Some(CorpTypeCd::BcCcc);
        let ctx = EvaluationContext::new(&[]).with_staff(true);
        assert_eq!(evaluate(&foreign, &ctx), AmlStatus::Ok);
    }

    #[test]
    fn test_evaluate_roster_statuses() {
        let roster = vec![
            addressed(CorpTypeCd::BcCompany),
            addressed(CorpTypeCd::BcCcc),
            AmalgamatingBusiness::foreign("Acme Delaware Inc."),
        ];
        let ctx = EvaluationContext::new(&roster);
        let results: Vec<AmlStatus> = evaluate_roster(&ctx).iter().map(|r| r.status).collect();
        assert_eq!(
            results,
            vec![AmlStatus::Ok, AmlStatus::CccMismatch, AmlStatus::Foreign]
        );
    }

    #[test]
    fn test_staff_exemptions() {
        let exempt: Vec<_> = AmalgamationRule::ORDERED
            .iter()
            .filter(|r| r.exempts_staff())
            .copied()
            .collect();
        assert_eq!(
            exempt,
            vec![
                AmalgamationRule::NotAffiliated,
                AmalgamationRule::NotInGoodStanding,
                AmalgamationRule::LimitedRestoration,
                AmalgamationRule::Foreign,
            ]
        );
    }
}
