//! Error types for the caseflow routing pipeline.
//!
//! All fallible operations in the caseflow crates return `CaseflowResult<T>`.
//! Variants carry enough context to tell the clinician-facing caller whether
//! the failure is fatal (configuration), recoverable by refetching (claim
//! conflicts), or absorbed per-record (data quality).

use thiserror::Error;

/// The unified error type for the caseflow crates.
#[derive(Debug, Error)]
pub enum CaseflowError {
    /// A clinician profile or roster file is incomplete or malformed.
    ///
    /// Fatal to the calling operation — no default location or jurisdiction
    /// is ever invented. Not retried.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// A case record carried unusable location data.
    ///
    /// The eligibility filter absorbs this per record (the case is excluded
    /// and logged); the batch itself never fails on it.
    #[error("data quality error on case '{case_id}': {reason}")]
    DataQuality { case_id: String, reason: String },

    /// The conditional claim write matched zero claimable rows.
    ///
    /// Another clinician got there first. Recoverable: refetch the case
    /// list rather than retrying the same claim.
    #[error("case '{case_id}' is already claimed or no longer claimable")]
    ClaimConflict { case_id: String },

    /// No case with the given id exists in the store.
    #[error("case '{case_id}' not found")]
    CaseNotFound { case_id: String },

    /// A status update violated the case lifecycle.
    #[error("case '{case_id}' cannot transition from '{from}' to '{to}'")]
    InvalidTransition {
        case_id: String,
        from: String,
        to: String,
    },

    /// The backing case store could not complete a read or write.
    #[error("storage failure: {reason}")]
    Storage { reason: String },
}

/// Convenience alias used throughout the caseflow crates.
pub type CaseflowResult<T> = Result<T, CaseflowError>;
