//! # Rules Subcommand
//!
//! Prints the rule chain in the order it is evaluated.

use anyhow::Result;
use serde::Serialize;

use amalg_core::AmlStatus;
use amalg_rules::AmalgamationRule;

use crate::output::{render, OutputFormat};
use crate::EXIT_OK;

/// One row of the rule listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    pub priority: usize,
    pub rule: AmalgamationRule,
    pub status: AmlStatus,
    pub exempts_staff: bool,
}

pub fn rule_entries() -> Vec<RuleEntry> {
    AmalgamationRule::ORDERED
        .iter()
        .map(|rule| RuleEntry {
            priority: rule.priority(),
            rule: *rule,
            status: rule.status(),
            exempts_staff: rule.exempts_staff(),
        })
        .collect()
}

pub fn format_rules(entries: &[RuleEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            let staff = if e.exempts_staff { "staff exempt" } else { "" };
            format!(
                "  {}. {:<24} {:<30} {staff}",
                e.priority,
                e.rule.as_str(),
                e.status.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the rules subcommand.
pub fn run_rules(format: OutputFormat) -> Result<u8> {
    let entries = rule_entries();
    println!("{}", render(format, &entries, |e| format_rules(e))?.trim_end());
    Ok(EXIT_OK)
}
