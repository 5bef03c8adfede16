//! # amalg-core — Foundational Types for the Amalgamation Stack
//!
//! Defines the records and enumerations shared by every other crate in the
//! workspace: the amalgamating business as the host application holds it,
//! the registry's corp type codes, and the closed set of amalgamation
//! statuses a rule evaluation can surface.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations for registry codes.** `AmlType`, `CorpTypeCd`,
//!    `AmlRole` and `AmlStatus` are exhaustive enums. Adding a status forces
//!    every consumer to handle it at compile time.
//!
//! 2. **Registry wire strings.** Every enum serializes to the string the
//!    corporate registry uses (`LEAR`, `BC`, `ERROR_CCC_MISMATCH`, ...), so
//!    filings exported by the host deserialize without a mapping layer.
//!
//! 3. **Read-only records.** Nothing in the stack mutates an
//!    `AmalgamatingBusiness`; the host owns them and hands out snapshots.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `amalg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod business;
pub mod corp_type;
pub mod error;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use business::{Address, AmalgamatingBusiness, AmlRole, AmlType};
pub use corp_type::CorpTypeCd;
pub use error::AmalgError;
pub use status::AmlStatus;
