//! # caseflow-contracts
//!
//! Shared types and error taxonomy for the caseflow triage routing crates.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod case;
pub mod clinician;
pub mod error;
pub mod location;
