//! Triage case types and lifecycle.
//!
//! A `CaseCandidate` is one triage session as seen by the routing layer:
//! enough to decide eligibility (patient state + location), urgency for
//! display ordering, and the status lifecycle driving the claim flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    clinician::{ClinicianId, Jurisdiction},
    location::GeoPoint,
};

/// Unique identifier for a triage case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub uuid::Uuid);

impl CaseId {
    /// Create a new, unique case ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Urgency classification assigned by the triage assessment.
///
/// Serialized in snake_case to match the stored row values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// The lifecycle status of a triage case.
///
/// Serialized in snake_case to match the stored row values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// The patient opened the session.
    Initiated,
    /// The triage conversation is underway.
    InProgress,
    /// The assessment finished and the case awaits a clinician.
    PendingReview,
    /// A clinician has claimed the case.
    Assigned,
    /// The consultation concluded.
    Resolved,
    /// The case was flagged for emergency escalation.
    Escalated,
    /// The patient or an administrator cancelled the session.
    Cancelled,
    /// A previously cancelled session was reopened.
    Resumed,
}

impl CaseStatus {
    /// True if a clinician may still claim a case in this status.
    ///
    /// Assigned cases already belong to someone; resolved and cancelled
    /// cases no longer need one.
    pub fn is_claimable(&self) -> bool {
        matches!(
            self,
            CaseStatus::Initiated
                | CaseStatus::InProgress
                | CaseStatus::PendingReview
                | CaseStatus::Escalated
                | CaseStatus::Resumed
        )
    }

    /// True if the lifecycle permits moving from `self` to `next`.
    ///
    /// Resolved is terminal. Cancelled may only be reopened (`Resumed`).
    /// No status may return to `Initiated`, and a no-op transition to the
    /// same status is rejected.
    pub fn can_transition_to(&self, next: CaseStatus) -> bool {
        if next == *self || next == CaseStatus::Initiated {
            return false;
        }
        match self {
            CaseStatus::Resolved => false,
            CaseStatus::Cancelled => next == CaseStatus::Resumed,
            _ => true,
        }
    }

    /// The snake_case string form used in stored rows and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Initiated => "initiated",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::PendingReview => "pending_review",
            CaseStatus::Assigned => "assigned",
            CaseStatus::Resolved => "resolved",
            CaseStatus::Escalated => "escalated",
            CaseStatus::Cancelled => "cancelled",
            CaseStatus::Resumed => "resumed",
        }
    }
}

/// One triage case as a candidate for clinician routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseCandidate {
    /// Unique case identifier.
    pub id: CaseId,
    /// The US state the patient is currently in.
    pub patient_state: Jurisdiction,
    /// The patient's current geocoded location.
    pub patient_location: GeoPoint,
    /// Urgency assigned by the triage assessment.
    pub urgency_level: UrgencyLevel,
    /// Current lifecycle status.
    pub status: CaseStatus,
    /// The clinician who claimed this case, once assigned.
    pub assigned_clinician_id: Option<ClinicianId>,
    /// The patient's initial symptom description, if any.
    pub initial_symptoms: Option<String>,
    /// When the session was opened (UTC).
    pub created_at: DateTime<Utc>,
    /// When the row was last written (UTC).
    pub updated_at: DateTime<Utc>,
}
