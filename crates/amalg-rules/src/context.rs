//! # Evaluation Context
//!
//! The host state the rules read: who is filing, what the amalgamated
//! business will be, and who is already in the filing. The host refreshes
//! its store between calls; the rules only ever see an immutable borrow.

use amalg_core::{AmalgamatingBusiness, CorpTypeCd};

/// Read-only snapshot of the host state an evaluation depends on.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Filer is registry staff.
    pub is_role_staff: bool,
    /// Resulting business will be a community contribution company.
    pub is_target_type_ccc: bool,
    /// Resulting business will be an unlimited liability company.
    pub is_target_type_ulc: bool,
    /// Businesses currently in the filing's table.
    pub roster: &'a [AmalgamatingBusiness],
}

impl<'a> EvaluationContext<'a> {
    /// A non-staff context with no declared target type.
    pub fn new(roster: &'a [AmalgamatingBusiness]) -> Self {
        Self {
            is_role_staff: false,
            is_target_type_ccc: false,
            is_target_type_ulc: false,
            roster,
        }
    }

    /// Derive the target flags from the resulting business's corp type.
    ///
    /// Only `CC` sets the CCC flag and only `ULC` sets the ULC flag;
    /// continued-in codes do not.
    pub fn for_target(
        target_type: Option<CorpTypeCd>,
        is_role_staff: bool,
        roster: &'a [AmalgamatingBusiness],
    ) -> Self {
        Self {
            is_role_staff,
            is_target_type_ccc: target_type == Some(CorpTypeCd::BcCcc),
            is_target_type_ulc: target_type == Some(CorpTypeCd::BcUlcCompany),
            roster,
        }
    }

    pub fn with_staff(mut self, is_role_staff: bool) -> Self {
        self.is_role_staff = is_role_staff;
        self
    }

    pub fn with_target_ccc(mut self, is_target_type_ccc: bool) -> Self {
        self.is_target_type_ccc = is_target_type_ccc;
        self
    }

    pub fn with_target_ulc(mut self, is_target_type_ulc: bool) -> Self {
        self.is_target_type_ulc = is_target_type_ulc;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_non_staff_without_target() {
        let ctx = EvaluationContext::new(&[]);
        assert!(!ctx.is_role_staff);
        assert!(!ctx.is_target_type_ccc);
        assert!(!ctx.is_target_type_ulc);
        assert!(ctx.roster.is_empty());
    }

    #[test]
    fn test_for_target_ccc() {
        let ctx = EvaluationContext::for_target(Some(CorpTypeCd::BcCcc), true, &[]);
        assert!(ctx.is_role_staff);
        assert!(ctx.is_target_type_ccc);
        assert!(!ctx.is_target_type_ulc);
    }

    #[test]
    fn test_for_target_ulc() {
        let ctx = EvaluationContext::for_target(Some(CorpTypeCd::BcUlcCompany), false, &[]);
        assert!(!ctx.is_target_type_ccc);
        assert!(ctx.is_target_type_ulc);
    }

    #[test]
    fn test_for_target_continued_in_codes_set_nothing() {
        for cd in [CorpTypeCd::CccContinuein, CorpTypeCd::UlcContinuein, CorpTypeCd::BcCompany] {
            let ctx = EvaluationContext::for_target(Some(cd), false, &[]);
            assert!(!ctx.is_target_type_ccc, "{cd}");
            assert!(!ctx.is_target_type_ulc, "{cd}");
        }
        let ctx = EvaluationContext::for_target(None, false, &[]);
        assert!(!ctx.is_target_type_ccc && !ctx.is_target_type_ulc);
    }
}
