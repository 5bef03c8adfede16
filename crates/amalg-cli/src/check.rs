//! # Check Subcommand
//!
//! Evaluates one business against a filing. The business is either a
//! roster member, named by identifier or legal name, or a candidate read
//! from its own file that is not yet in the roster (the "add business"
//! case in the host).
//!
//! ```bash
//! amalg check --filing filing.yaml --business BC0870100
//! amalg check --filing filing.yaml --candidate acme.yaml --all
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use amalg_core::{AmalgamatingBusiness, AmlStatus};
use amalg_rules::{evaluate, violations};

use crate::filing::{load_candidate, Filing};
use crate::output::{render, OutputFormat};
use crate::{EXIT_OK, EXIT_VIOLATION};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Filing file (YAML or JSON).
    #[arg(long)]
    pub filing: PathBuf,

    /// Identifier or legal name of a business in the filing.
    #[arg(long, required_unless_present = "candidate", conflicts_with = "candidate")]
    pub business: Option<String>,

    /// File holding a business that is not yet in the filing.
    #[arg(long)]
    pub candidate: Option<PathBuf>,

    /// Report every violated rule, not only the first.
    #[arg(long)]
    pub all: bool,
}

/// Outcome of checking one business.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub business: String,
    pub status: AmlStatus,
    pub message: &'static str,
    /// Every violated rule in priority order; present with `--all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<AmlStatus>>,
}

/// Evaluate `business` against the filing's context.
pub fn check_business(filing: &Filing, business: &AmalgamatingBusiness, all: bool) -> CheckReport {
    let ctx = filing.context();
    let status = evaluate(business, &ctx);
    CheckReport {
        business: business.label().to_string(),
        status,
        message: status.message(),
        violations: all.then(|| violations(business, &ctx)),
    }
}

/// Text rendering of a [`CheckReport`].
pub fn format_check(report: &CheckReport) -> String {
    let mut lines = vec![
        format!("  business: {}", report.business),
        format!("  status:   {}", report.status),
        format!("  reason:   {}", report.message),
    ];
    match report.violations.as_deref() {
        Some([]) => lines.push("  violations: none".to_string()),
        Some(all) => {
            lines.push("  violations:".to_string());
            lines.extend(all.iter().map(|s| format!("    - {s}: {}", s.message())));
        }
        None => {}
    }
    lines.join("\n")
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, format: OutputFormat) -> Result<u8> {
    let filing = Filing::load(&args.filing)?;

    let candidate;
    let business = match (&args.business, &args.candidate) {
        (_, Some(path)) => {
            candidate = load_candidate(path)?;
            &candidate
        }
        (Some(key), None) => filing
            .find_business(key)
            .with_context(|| format!("no business {key:?} in {}", args.filing.display()))?,
        (None, None) => anyhow::bail!("either --business or --candidate is required"),
    };

    let report = check_business(&filing, business, args.all);
    println!("{}", render(format, &report, format_check)?.trim_end());

    Ok(if report.status.is_ok() {
        EXIT_OK
    } else {
        EXIT_VIOLATION
    })
}
