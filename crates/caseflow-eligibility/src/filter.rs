//! The eligibility filter: licensing + geographic radius.
//!
//! A case is visible to a clinician iff the patient's state is in the
//! clinician's licensed jurisdictions AND the patient is within 50 statute
//! miles of the practice location. The filter is a pure function over an
//! already-fetched list: no I/O, no mutation, deterministic, stable order.

use tracing::{debug, warn};

use caseflow_contracts::{
    case::CaseCandidate,
    clinician::{ClinicianProfile, JurisdictionSet},
    error::{CaseflowError, CaseflowResult},
    location::GeoPoint,
};

use crate::distance::distance_miles;

/// The geographic radius, in statute miles, within which a licensed
/// clinician may claim a case. The boundary is inclusive.
pub const ELIGIBILITY_RADIUS_MILES: f64 = 50.0;

/// The licensing + distance predicate for one clinician.
///
/// Construct via [`EligibilityFilter::for_clinician`], which validates the
/// profile up front: filtering never runs on a profile missing location or
/// licensing data, and never silently returns an empty list in that case.
#[derive(Debug, Clone)]
pub struct EligibilityFilter {
    practice_location: GeoPoint,
    jurisdictions: JurisdictionSet,
    radius_miles: f64,
}

impl EligibilityFilter {
    /// Build a filter from a clinician profile.
    ///
    /// Returns `CaseflowError::Configuration` if the profile has no usable
    /// practice location (missing, placeholder (0,0), or out of range) or
    /// an empty jurisdiction set. This is a hard failure for the caller —
    /// no default location or jurisdiction is invented.
    pub fn for_clinician(clinician: &ClinicianProfile) -> CaseflowResult<Self> {
        let location = clinician
            .practice_location
            .filter(GeoPoint::is_usable)
            .ok_or_else(|| CaseflowError::Configuration {
                reason: "clinician location or licensing information not found".to_string(),
            })?;

        if clinician.licensed_jurisdictions.is_empty() {
            return Err(CaseflowError::Configuration {
                reason: "clinician location or licensing information not found".to_string(),
            });
        }

        Ok(Self {
            practice_location: location,
            jurisdictions: clinician.licensed_jurisdictions.clone(),
            radius_miles: ELIGIBILITY_RADIUS_MILES,
        })
    }

    /// The pure eligibility predicate for one candidate.
    ///
    /// True iff the patient's state is licensed AND the great-circle
    /// distance from the practice location is within the radius (inclusive).
    /// A candidate with an unusable patient location is never eligible.
    pub fn is_eligible(&self, candidate: &CaseCandidate) -> bool {
        if !candidate.patient_location.is_usable() {
            return false;
        }

        let is_licensed_state = self.jurisdictions.has(&candidate.patient_state);
        let distance = distance_miles(&self.practice_location, &candidate.patient_location);

        is_licensed_state && distance <= self.radius_miles
    }

    /// Partition `candidates` down to the cases this clinician may claim.
    ///
    /// Stable: output preserves the relative order of the input. Candidates
    /// with unusable patient locations are a per-record data-quality
    /// problem — they are excluded and logged, and never abort the batch.
    pub fn filter_cases(&self, candidates: &[CaseCandidate]) -> Vec<CaseCandidate> {
        let eligible: Vec<CaseCandidate> = candidates
            .iter()
            .filter(|candidate| {
                if !candidate.patient_location.is_usable() {
                    warn!(
                        case_id = %candidate.id,
                        latitude = candidate.patient_location.latitude,
                        longitude = candidate.patient_location.longitude,
                        "excluding case with unusable patient location"
                    );
                    return false;
                }
                self.is_eligible(candidate)
            })
            .cloned()
            .collect();

        debug!(
            candidates = candidates.len(),
            eligible = eligible.len(),
            "eligibility filter applied"
        );

        eligible
    }
}
