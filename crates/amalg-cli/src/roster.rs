//! # Roster Subcommand
//!
//! Re-evaluates every business already in a filing, the way the host does
//! when it redraws its businesses table, and prints the composition summary
//! its display logic relies on.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use amalg_core::CorpTypeCd;
use amalg_rules::{evaluate_roster, BusinessEvaluation, RosterSummary};

use crate::filing::Filing;
use crate::output::{render, OutputFormat};
use crate::{EXIT_OK, EXIT_VIOLATION};

/// Arguments for the roster subcommand.
#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Filing file (YAML or JSON).
    #[arg(long)]
    pub filing: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport<'a> {
    pub target_type: Option<CorpTypeCd>,
    pub role_staff: bool,
    pub summary: RosterSummary,
    pub evaluations: Vec<BusinessEvaluation<'a>>,
}

impl RosterReport<'_> {
    /// Number of roster members with a violation.
    pub fn violation_count(&self) -> usize {
        self.evaluations.iter().filter(|e| e.status.is_error()).count()
    }
}

pub fn roster_report(filing: &Filing) -> RosterReport<'_> {
    RosterReport {
        target_type: filing.target_type,
        role_staff: filing.role_staff,
        summary: RosterSummary::of(&filing.businesses),
        evaluations: evaluate_roster(&filing.context()),
    }
}

/// Text rendering of a [`RosterReport`].
pub fn format_roster(report: &RosterReport<'_>) -> String {
    let rows = report.evaluations.iter().map(|e| {
        format!(
            "  {:<8} {:<24} {}",
            e.business.business_type,
            e.business.label(),
            e.status
        )
    });
    let s = &report.summary;
    let target = match report.target_type {
        Some(cd) => format!("{cd} ({})", cd.description()),
        None => "not selected".to_string(),
    };
    let summary = [
        String::new(),
        format!("  target type:   {target}"),
        format!("  staff filing:  {}", report.role_staff),
        format!("  businesses:    {}", s.business_count),
        format!("  any foreign:   {}", s.any_foreign),
        format!("  any CCC:       {}", s.any_ccc),
        format!("  any limited:   {}", s.any_limited),
        format!("  any unlimited: {}", s.any_unlimited),
        format!("  violations:    {}", report.violation_count()),
    ];
    rows.chain(summary).collect::<Vec<_>>().join("\n")
}

/// Execute the roster subcommand.
pub fn run_roster(args: &RosterArgs, format: OutputFormat) -> Result<u8> {
    let filing = Filing::load(&args.filing)?;
    let report = roster_report(&filing);

    if report.evaluations.is_empty() {
        tracing::warn!(path = %args.filing.display(), "filing has no businesses");
    }

    println!("{}", render(format, &report, format_roster)?.trim_end());

    Ok(if report.violation_count() == 0 {
        EXIT_OK
    } else {
        EXIT_VIOLATION
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use amalg_core::{Address, AmalgamatingBusiness, AmlStatus};

    #[test]
    fn test_roster_report_counts_violations() {
        let filing = Filing {
            role_staff: false,
            target_type: Some(CorpTypeCd::BcCompany),
            businesses: vec![
                AmalgamatingBusiness::lear("BC0870100", CorpTypeCd::BcCompany)
                    .with_address(Address::default()),
                AmalgamatingBusiness::lear("BC0870101", CorpTypeCd::BcCcc)
                    .with_address(Address::default()),
            ],
        };
        let report = roster_report(&filing);
        assert_eq!(report.violation_count(), 1);
        assert_eq!(report.evaluations[1].status, AmlStatus::CccMismatch);
        assert!(report.summary.any_limited);
        assert!(report.summary.any_ccc);

        let text = format_roster(&report);
        assert!(text.contains("BC0870101"));
        assert!(text.contains("ERROR_CCC_MISMATCH"));
        assert!(text.contains("violations:    1"));
        assert!(text.contains("target type:   BC (BC Limited Company)"));
    }

    #[test]
    fn test_empty_roster_report() {
        let filing = Filing::default();
        let report = roster_report(&filing);
        assert_eq!(report.violation_count(), 0);
        assert_eq!(report.summary.business_count, 0);
        assert!(format_roster(&report).contains("target type:   not selected"));
    }
}
