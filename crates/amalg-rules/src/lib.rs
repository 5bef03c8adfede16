//! # amalg-rules — Amalgamation Eligibility Rules
//!
//! Decides whether a business may be added to, or remain in, an amalgamation
//! filing. Everything here is a pure function of its inputs: the business
//! under test and a read-only [`EvaluationContext`] snapshot of the host's
//! state.
//!
//! ## Architecture
//!
//! - **Context** (`context.rs`): the staff flag, the resulting business type
//!   and the current roster, passed explicitly on every call.
//!
//! - **Rules** (`rules.rs`): the eight rules as a tagged enum with a fixed
//!   priority order. [`evaluate()`] returns the status of the first violated
//!   rule, or [`AmlStatus::Ok`].
//!
//! - **Roster** (`roster.rs`): the four composition queries (any foreign,
//!   CCC, limited, unlimited) used by the rules and by the host's display
//!   logic.
//!
//! ## Crate Policy
//!
//! - Depends on `amalg-core` only.
//! - Rules never fail and never mutate; a violation is a status value.
//! - Every `match` on [`AmalgamationRule`] is exhaustive.

pub mod context;
pub mod roster;
pub mod rules;

pub use amalg_core::AmlStatus;
pub use context::EvaluationContext;
pub use roster::{is_any_ccc, is_any_foreign, is_any_limited, is_any_unlimited, RosterSummary};
pub use rules::{
    evaluate, evaluate_roster, violations, AmalgamationRule, BusinessEvaluation, RULE_COUNT,
};
