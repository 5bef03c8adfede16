//! # amalg-cli — Amalgamation Eligibility CLI
//!
//! Runs the amalgamation rules over filing files exported by the host
//! application, so a filing can be checked without the web front end.
//!
//! ## Subcommands
//!
//! - `check` — evaluate one business (a roster member or a new candidate)
//! - `roster` — evaluate every roster member and summarize the roster
//! - `rules` — list the rule chain in priority order
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from evaluation; handlers delegate to
//!   `amalg-rules` and only format the result.
//! - Handlers return the process exit code: 0 when every evaluated business
//!   is eligible, 2 when any rule is violated.

pub mod check;
pub mod filing;
pub mod output;
pub mod roster;
pub mod rules;

/// Exit code when every evaluated business passed.
pub const EXIT_OK: u8 = 0;

/// Exit code when at least one business violated a rule.
pub const EXIT_VIOLATION: u8 = 2;
