//! In-memory implementation of `CaseStore`.
//!
//! `InMemoryCaseStore` keeps all cases in a `Vec` protected by a `Mutex`,
//! making it safe to share across threads. Each trait method performs its
//! whole read-check-write sequence under one lock acquisition, which is what
//! makes `claim_case` a genuine conditional write: between the claimability
//! check and the status update no other claimant can slip in.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{info, warn};

use caseflow_contracts::{
    case::{CaseCandidate, CaseId, CaseStatus},
    clinician::ClinicianId,
    error::{CaseflowError, CaseflowResult},
};

use crate::{CaseFilters, CaseStore};

/// An in-memory, thread-safe case store.
///
/// # Thread safety
///
/// All methods acquire an internal `Mutex`. `Clone` is shallow: clones share
/// the same underlying case list, so one handle per thread is the intended
/// usage for concurrency tests and the demo.
#[derive(Clone, Default)]
pub struct InMemoryCaseStore {
    cases: Arc<Mutex<Vec<CaseCandidate>>>,
}

impl InMemoryCaseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `cases`.
    pub fn with_cases(cases: Vec<CaseCandidate>) -> Self {
        Self {
            cases: Arc::new(Mutex::new(cases)),
        }
    }

    fn lock(&self) -> CaseflowResult<std::sync::MutexGuard<'_, Vec<CaseCandidate>>> {
        self.cases.lock().map_err(|e| CaseflowError::Storage {
            reason: format!("case store lock poisoned: {}", e),
        })
    }
}

impl CaseStore for InMemoryCaseStore {
    fn insert_case(&self, case: CaseCandidate) -> CaseflowResult<()> {
        let mut cases = self.lock()?;
        cases.push(case);
        Ok(())
    }

    /// Fetch matching cases, newest first by `created_at`.
    fn fetch_cases(&self, filters: &CaseFilters) -> CaseflowResult<Vec<CaseCandidate>> {
        let cases = self.lock()?;

        let mut matching: Vec<CaseCandidate> = cases
            .iter()
            .filter(|case| {
                filters.urgency.map_or(true, |u| case.urgency_level == u)
                    && filters.status.map_or(true, |s| case.status == s)
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    /// The conditional claim write: check claimability and assign under the
    /// same lock acquisition.
    fn claim_case(
        &self,
        case_id: &CaseId,
        clinician_id: &ClinicianId,
    ) -> CaseflowResult<CaseCandidate> {
        let mut cases = self.lock()?;

        let case = cases
            .iter_mut()
            .find(|c| c.id == *case_id)
            .ok_or_else(|| CaseflowError::CaseNotFound {
                case_id: case_id.to_string(),
            })?;

        if !case.status.is_claimable() {
            warn!(
                case_id = %case_id,
                clinician_id = %clinician_id,
                status = case.status.as_str(),
                "claim lost: case no longer claimable"
            );
            return Err(CaseflowError::ClaimConflict {
                case_id: case_id.to_string(),
            });
        }

        case.status = CaseStatus::Assigned;
        case.assigned_clinician_id = Some(clinician_id.clone());
        case.updated_at = Utc::now();

        info!(
            case_id = %case_id,
            clinician_id = %clinician_id,
            "case claimed"
        );

        Ok(case.clone())
    }

    fn update_status(&self, case_id: &CaseId, status: CaseStatus) -> CaseflowResult<CaseCandidate> {
        let mut cases = self.lock()?;

        let case = cases
            .iter_mut()
            .find(|c| c.id == *case_id)
            .ok_or_else(|| CaseflowError::CaseNotFound {
                case_id: case_id.to_string(),
            })?;

        if !case.status.can_transition_to(status) {
            return Err(CaseflowError::InvalidTransition {
                case_id: case_id.to_string(),
                from: case.status.as_str().to_string(),
                to: status.as_str().to_string(),
            });
        }

        case.status = status;
        case.updated_at = Utc::now();

        info!(
            case_id = %case_id,
            status = case.status.as_str(),
            "case status updated"
        );

        Ok(case.clone())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::thread;

    use chrono::{Duration, Utc};

    use caseflow_contracts::{
        case::{CaseCandidate, CaseId, CaseStatus, UrgencyLevel},
        clinician::{ClinicianId, Jurisdiction},
        error::CaseflowError,
        location::GeoPoint,
    };

    use crate::{CaseFilters, CaseStore};

    use super::InMemoryCaseStore;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a CA case with the given status, created `age_minutes` ago.
    fn make_case(status: CaseStatus, urgency: UrgencyLevel, age_minutes: i64) -> CaseCandidate {
        let created = Utc::now() - Duration::minutes(age_minutes);
        CaseCandidate {
            id: CaseId::new(),
            patient_state: Jurisdiction::new("CA"),
            patient_location: GeoPoint::new(34.05, -118.25),
            urgency_level: urgency,
            status,
            assigned_clinician_id: None,
            initial_symptoms: Some("persistent cough".to_string()),
            created_at: created,
            updated_at: created,
        }
    }

    // ── fetch ─────────────────────────────────────────────────────────────────

    /// Fetch returns cases newest first, regardless of insertion order.
    #[test]
    fn test_fetch_orders_newest_first() {
        let oldest = make_case(CaseStatus::PendingReview, UrgencyLevel::Low, 60);
        let newest = make_case(CaseStatus::PendingReview, UrgencyLevel::Low, 1);
        let middle = make_case(CaseStatus::PendingReview, UrgencyLevel::Low, 30);

        let store =
            InMemoryCaseStore::with_cases(vec![oldest.clone(), newest.clone(), middle.clone()]);

        let fetched = store.fetch_cases(&CaseFilters::default()).unwrap();
        let ids: Vec<_> = fetched.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    }

    /// Urgency and status filters narrow the fetch; `Default` returns all.
    #[test]
    fn test_fetch_applies_filters() {
        let store = InMemoryCaseStore::with_cases(vec![
            make_case(CaseStatus::PendingReview, UrgencyLevel::Critical, 1),
            make_case(CaseStatus::PendingReview, UrgencyLevel::Low, 2),
            make_case(CaseStatus::Resolved, UrgencyLevel::Critical, 3),
        ]);

        let all = store.fetch_cases(&CaseFilters::default()).unwrap();
        assert_eq!(all.len(), 3);

        let critical = store
            .fetch_cases(&CaseFilters {
                urgency: Some(UrgencyLevel::Critical),
                status: None,
            })
            .unwrap();
        assert_eq!(critical.len(), 2);

        let critical_pending = store
            .fetch_cases(&CaseFilters {
                urgency: Some(UrgencyLevel::Critical),
                status: Some(CaseStatus::PendingReview),
            })
            .unwrap();
        assert_eq!(critical_pending.len(), 1);
    }

    // ── claim ─────────────────────────────────────────────────────────────────

    /// A successful claim sets Assigned and binds the clinician in one write.
    #[test]
    fn test_claim_assigns_and_binds_clinician() {
        let case = make_case(CaseStatus::PendingReview, UrgencyLevel::High, 1);
        let case_id = case.id.clone();
        let store = InMemoryCaseStore::with_cases(vec![case]);

        let dr = ClinicianId::new("dr-rivera");
        let claimed = store.claim_case(&case_id, &dr).unwrap();

        assert_eq!(claimed.status, CaseStatus::Assigned);
        assert_eq!(claimed.assigned_clinician_id, Some(dr));
    }

    /// Claiming an already-assigned case is a conflict, not a second success.
    #[test]
    fn test_claim_of_assigned_case_conflicts() {
        let case = make_case(CaseStatus::PendingReview, UrgencyLevel::High, 1);
        let case_id = case.id.clone();
        let store = InMemoryCaseStore::with_cases(vec![case]);

        store.claim_case(&case_id, &ClinicianId::new("dr-first")).unwrap();

        match store.claim_case(&case_id, &ClinicianId::new("dr-second")) {
            Err(CaseflowError::ClaimConflict { case_id: id }) => {
                assert_eq!(id, case_id.to_string());
            }
            other => panic!("expected ClaimConflict, got {:?}", other),
        }

        // The first claimant still holds the case.
        let fetched = store.fetch_cases(&CaseFilters::default()).unwrap();
        assert_eq!(
            fetched[0].assigned_clinician_id,
            Some(ClinicianId::new("dr-first"))
        );
    }

    /// Claiming a resolved or cancelled case is also a conflict.
    #[test]
    fn test_claim_of_unclaimable_status_conflicts() {
        for status in [CaseStatus::Resolved, CaseStatus::Cancelled] {
            let case = make_case(status, UrgencyLevel::Low, 1);
            let case_id = case.id.clone();
            let store = InMemoryCaseStore::with_cases(vec![case]);

            assert!(matches!(
                store.claim_case(&case_id, &ClinicianId::new("dr-late")),
                Err(CaseflowError::ClaimConflict { .. })
            ));
        }
    }

    /// An unknown case id is NotFound, not a conflict.
    #[test]
    fn test_claim_unknown_case_is_not_found() {
        let store = InMemoryCaseStore::new();
        assert!(matches!(
            store.claim_case(&CaseId::new(), &ClinicianId::new("dr-x")),
            Err(CaseflowError::CaseNotFound { .. })
        ));
    }

    /// Two clinicians racing to claim the same case: exactly one succeeds,
    /// the other gets ClaimConflict, and the stored case ends Assigned with
    /// exactly one clinician bound.
    #[test]
    fn test_concurrent_claims_have_one_winner() {
        let case = make_case(CaseStatus::PendingReview, UrgencyLevel::Critical, 1);
        let case_id = case.id.clone();
        let store = InMemoryCaseStore::with_cases(vec![case]);

        let claimants = [ClinicianId::new("dr-a"), ClinicianId::new("dr-b")];
        let mut handles = Vec::new();
        for clinician in claimants.clone() {
            let store = store.clone();
            let case_id = case_id.clone();
            handles.push(thread::spawn(move || store.claim_case(&case_id, &clinician)));
        }

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let wins = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(CaseflowError::ClaimConflict { .. })))
            .count();
        assert_eq!(wins, 1, "exactly one claim must succeed");
        assert_eq!(conflicts, 1, "the loser must see a conflict");

        let fetched = store.fetch_cases(&CaseFilters::default()).unwrap();
        assert_eq!(fetched[0].status, CaseStatus::Assigned);
        let winner = fetched[0].assigned_clinician_id.clone().unwrap();
        assert!(claimants.contains(&winner));
    }

    // ── status updates ────────────────────────────────────────────────────────

    /// A lifecycle-legal transition goes through and bumps `updated_at`.
    #[test]
    fn test_update_status_legal_transition() {
        let case = make_case(CaseStatus::Assigned, UrgencyLevel::Moderate, 1);
        let case_id = case.id.clone();
        let before = case.updated_at;
        let store = InMemoryCaseStore::with_cases(vec![case]);

        let updated = store.update_status(&case_id, CaseStatus::Resolved).unwrap();
        assert_eq!(updated.status, CaseStatus::Resolved);
        assert!(updated.updated_at >= before);
    }

    /// Resolved is terminal: any further transition is rejected.
    #[test]
    fn test_update_status_rejects_illegal_transition() {
        let case = make_case(CaseStatus::Resolved, UrgencyLevel::Moderate, 1);
        let case_id = case.id.clone();
        let store = InMemoryCaseStore::with_cases(vec![case]);

        match store.update_status(&case_id, CaseStatus::Assigned) {
            Err(CaseflowError::InvalidTransition { from, to, .. }) => {
                assert_eq!(from, "resolved");
                assert_eq!(to, "assigned");
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
    }

    /// A cancelled case can be reopened via Resumed and then claimed again.
    #[test]
    fn test_cancelled_case_resumes_and_is_claimable() {
        let case = make_case(CaseStatus::Cancelled, UrgencyLevel::Low, 1);
        let case_id = case.id.clone();
        let store = InMemoryCaseStore::with_cases(vec![case]);

        store.update_status(&case_id, CaseStatus::Resumed).unwrap();
        let claimed = store
            .claim_case(&case_id, &ClinicianId::new("dr-again"))
            .unwrap();
        assert_eq!(claimed.status, CaseStatus::Assigned);
    }
}
