//! Clinician identity and licensing types.
//!
//! A clinician may only be shown (and may only claim) cases whose patients
//! sit inside one of the clinician's licensed jurisdictions. Jurisdictions
//! are modeled as US state codes; the set is granted when the profile is
//! provisioned and is never widened at filter time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CaseflowError, CaseflowResult},
    location::GeoPoint,
};

/// Stable, human-readable identifier for a clinician.
///
/// Example: ClinicianId("dr-rivera")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClinicianId(pub String);

impl ClinicianId {
    /// Construct a clinician id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ClinicianId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A licensing authority's territory, modeled as a US state code.
///
/// Stored normalized to uppercase so "ca" and "CA" compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jurisdiction(pub String);

impl Jurisdiction {
    /// Construct a jurisdiction, normalizing the code to uppercase.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Parse and validate a state code: exactly two ASCII letters.
    ///
    /// Returns `CaseflowError::Configuration` on anything else — a roster
    /// entry with a bad code is a provisioning mistake, not data to absorb.
    pub fn parse(code: &str) -> CaseflowResult<Self> {
        let trimmed = code.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self::new(trimmed))
        } else {
            Err(CaseflowError::Configuration {
                reason: format!("invalid jurisdiction code '{}'", code),
            })
        }
    }
}

/// The full set of jurisdictions a clinician is licensed in.
///
/// Uniqueness is guaranteed by the underlying `HashSet`; order is
/// irrelevant to eligibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionSet {
    inner: HashSet<Jurisdiction>,
}

impl JurisdictionSet {
    /// Grant a jurisdiction to this set. Duplicate grants are idempotent.
    pub fn grant(&mut self, jurisdiction: Jurisdiction) {
        self.inner.insert(jurisdiction);
    }

    /// Return true if the set contains the given jurisdiction.
    pub fn has(&self, jurisdiction: &Jurisdiction) -> bool {
        self.inner.contains(jurisdiction)
    }

    /// Return an iterator over all granted jurisdictions.
    pub fn all(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.inner.iter()
    }

    /// Return true if no jurisdiction has been granted.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<Jurisdiction> for JurisdictionSet {
    fn from_iter<I: IntoIterator<Item = Jurisdiction>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// A clinician's routing-relevant profile.
///
/// `practice_location` is optional because upstream provisioning may not
/// have geocoded the practice address yet; the eligibility filter refuses
/// to run on such a profile rather than guessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicianProfile {
    /// Who this profile belongs to.
    pub id: ClinicianId,
    /// Display name for logs and operator tooling.
    pub display_name: String,
    /// Geocoded primary practice address, if provisioning completed.
    pub practice_location: Option<GeoPoint>,
    /// All jurisdictions this clinician may practice in.
    pub licensed_jurisdictions: JurisdictionSet,
}
