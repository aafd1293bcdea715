//! # caseflow-store
//!
//! The storage seam for triage cases: the [`CaseStore`] trait and an
//! in-memory reference implementation.
//!
//! The one correctness-critical operation here is [`CaseStore::claim_case`]:
//! two clinicians can fetch overlapping eligible lists and race to claim the
//! same case. The claim is therefore a single atomic conditional write —
//! it succeeds only while the case's current status is still claimable, and
//! the loser receives [`CaseflowError::ClaimConflict`] and is expected to
//! refetch rather than retry. A plain unconditional update would let both
//! claimants "succeed" and leave the case doubly assigned.

pub mod memory;

use caseflow_contracts::{
    case::{CaseCandidate, CaseId, CaseStatus, UrgencyLevel},
    clinician::ClinicianId,
    error::CaseflowResult,
};

pub use memory::InMemoryCaseStore;

pub use caseflow_contracts::error::CaseflowError;

/// Optional row filters for a case fetch, applied store-side.
///
/// `Default` means no filtering. Mirrors the filters the clinician
/// dashboard offers (urgency and status); free-text search over patient
/// names lives in the presentation layer, not here.
#[derive(Debug, Clone, Default)]
pub struct CaseFilters {
    /// Keep only cases at this urgency level.
    pub urgency: Option<UrgencyLevel>,
    /// Keep only cases in this lifecycle status.
    pub status: Option<CaseStatus>,
}

/// The storage collaborator for triage cases.
///
/// Implementations are expected to be shared across threads; every method
/// takes `&self` and each call is atomic with respect to the others.
pub trait CaseStore: Send + Sync {
    /// Add a new case to the store.
    fn insert_case(&self, case: CaseCandidate) -> CaseflowResult<()>;

    /// Fetch all cases matching `filters`, newest first by `created_at`.
    ///
    /// Returns every matching row regardless of eligibility — eligibility
    /// is the caller's concern (see caseflow-eligibility).
    fn fetch_cases(&self, filters: &CaseFilters) -> CaseflowResult<Vec<CaseCandidate>>;

    /// Atomically claim a case for a clinician.
    ///
    /// Conditional write: succeeds only if the case's current status is
    /// still claimable ([`CaseStatus::is_claimable`]), in which case the
    /// status becomes `Assigned` and `assigned_clinician_id` is bound in
    /// the same write. Under concurrent claims on one case, exactly one
    /// caller succeeds.
    ///
    /// # Errors
    ///
    /// - [`CaseflowError::CaseNotFound`] — no such case.
    /// - [`CaseflowError::ClaimConflict`] — the case is no longer
    ///   claimable; refetch the list instead of retrying.
    fn claim_case(
        &self,
        case_id: &CaseId,
        clinician_id: &ClinicianId,
    ) -> CaseflowResult<CaseCandidate>;

    /// Move a case to `status`, enforcing the lifecycle.
    ///
    /// # Errors
    ///
    /// - [`CaseflowError::CaseNotFound`] — no such case.
    /// - [`CaseflowError::InvalidTransition`] — the lifecycle forbids
    ///   moving from the current status to `status`
    ///   (see [`CaseStatus::can_transition_to`]).
    fn update_status(&self, case_id: &CaseId, status: CaseStatus) -> CaseflowResult<CaseCandidate>;
}
