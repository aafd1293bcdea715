//! Simulated triage data for the caseflow demo.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module acts as a stand-in for the real triage
//! session table in a production deployment.

use chrono::{Duration, Utc};

use caseflow_contracts::{
    case::{CaseCandidate, CaseId, CaseStatus, UrgencyLevel},
    clinician::Jurisdiction,
    location::GeoPoint,
};

fn case(
    state: &str,
    location: GeoPoint,
    urgency: UrgencyLevel,
    status: CaseStatus,
    symptoms: &str,
    age_minutes: i64,
) -> CaseCandidate {
    let created = Utc::now() - Duration::minutes(age_minutes);
    CaseCandidate {
        id: CaseId::new(),
        patient_state: Jurisdiction::new(state),
        patient_location: location,
        urgency_level: urgency,
        status,
        assigned_clinician_id: None,
        initial_symptoms: Some(symptoms.to_string()),
        created_at: created,
        updated_at: created,
    }
}

/// A batch of fictional triage cases clustered around Los Angeles and
/// New York, plus the pathological rows the routing layer must tolerate.
pub fn seed_cases() -> Vec<CaseCandidate> {
    vec![
        // Downtown LA, well inside the 50-mile radius of an LA clinician.
        case(
            "CA",
            GeoPoint::new(34.0407, -118.2468),
            UrgencyLevel::High,
            CaseStatus::PendingReview,
            "chest tightness and shortness of breath for two hours",
            12,
        ),
        // Pasadena, also in range.
        case(
            "CA",
            GeoPoint::new(34.1478, -118.1445),
            UrgencyLevel::Moderate,
            CaseStatus::PendingReview,
            "three days of fever and a productive cough",
            45,
        ),
        // San Diego: licensed state, but ~112 miles out — distance excludes it.
        case(
            "CA",
            GeoPoint::new(32.7157, -117.1611),
            UrgencyLevel::Low,
            CaseStatus::Initiated,
            "itchy rash on both forearms",
            90,
        ),
        // Las Vegas: in range of nobody in the demo roster's NV licensing
        // only if the clinician is close enough; ~230 miles from LA.
        case(
            "NV",
            GeoPoint::new(36.1699, -115.1398),
            UrgencyLevel::Moderate,
            CaseStatus::PendingReview,
            "persistent migraine unresponsive to medication",
            30,
        ),
        // Manhattan, for the NY clinician.
        case(
            "NY",
            GeoPoint::new(40.7831, -73.9712),
            UrgencyLevel::Critical,
            CaseStatus::Escalated,
            "sudden facial droop and slurred speech",
            5,
        ),
        // Newark: geographically near the NY clinician but licensed in NJ.
        case(
            "NJ",
            GeoPoint::new(40.7357, -74.1724),
            UrgencyLevel::High,
            CaseStatus::PendingReview,
            "deep cut on hand, bleeding controlled",
            20,
        ),
        // Already assigned elsewhere; claimable by nobody.
        case(
            "CA",
            GeoPoint::new(34.0522, -118.2437),
            UrgencyLevel::Moderate,
            CaseStatus::Assigned,
            "follow-up on medication side effects",
            120,
        ),
        // Un-geocoded row: the (0,0) placeholder must be excluded, not routed.
        case(
            "CA",
            GeoPoint::new(0.0, 0.0),
            UrgencyLevel::Low,
            CaseStatus::PendingReview,
            "mild seasonal allergies",
            60,
        ),
    ]
}
