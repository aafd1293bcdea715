//! TOML roster loading and validation.
//!
//! `TomlRoster` loads a `RosterConfig` from a TOML string or file,
//! validates every entry at load time, and resolves clinician ids to
//! `ClinicianProfile`s on demand.
//!
//! Load-time validation:
//!
//! 1. Clinician ids must be non-empty and unique across the roster.
//! 2. Every jurisdiction code must parse (two ASCII letters).
//! 3. A present practice location must be a usable coordinate — the (0,0)
//!    placeholder some provisioning flows write for un-geocoded addresses
//!    is rejected here rather than allowed to reach the distance math.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use caseflow_contracts::{
    clinician::{ClinicianId, ClinicianProfile, Jurisdiction, JurisdictionSet},
    error::{CaseflowError, CaseflowResult},
    location::GeoPoint,
};

use crate::config::{ClinicianEntry, RosterConfig};

/// A validated clinician roster loaded from a TOML document.
///
/// Construct via `from_toml_str` or `from_file`, then resolve profiles
/// by id with [`TomlRoster::profile`].
#[derive(Debug)]
pub struct TomlRoster {
    profiles: HashMap<ClinicianId, ClinicianProfile>,
}

impl TomlRoster {
    /// Parse `s` as TOML and build a validated roster.
    ///
    /// Returns `CaseflowError::Configuration` if the TOML is malformed or
    /// any entry fails validation.
    pub fn from_toml_str(s: &str) -> CaseflowResult<Self> {
        let config: RosterConfig = toml::from_str(s).map_err(|e| CaseflowError::Configuration {
            reason: format!("failed to parse roster TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML roster.
    pub fn from_file(path: &Path) -> CaseflowResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CaseflowError::Configuration {
            reason: format!("failed to read roster file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate a parsed config and index profiles by id.
    fn from_config(config: RosterConfig) -> CaseflowResult<Self> {
        let mut profiles = HashMap::new();

        for entry in config.clinicians {
            let profile = Self::validate_entry(entry)?;
            if profiles.contains_key(&profile.id) {
                return Err(CaseflowError::Configuration {
                    reason: format!("duplicate clinician id '{}' in roster", profile.id),
                });
            }
            profiles.insert(profile.id.clone(), profile);
        }

        info!(clinicians = profiles.len(), "roster loaded");
        Ok(Self { profiles })
    }

    fn validate_entry(entry: ClinicianEntry) -> CaseflowResult<ClinicianProfile> {
        if entry.id.trim().is_empty() {
            return Err(CaseflowError::Configuration {
                reason: "roster entry with empty clinician id".to_string(),
            });
        }

        let mut jurisdictions = JurisdictionSet::default();
        for code in &entry.licensed_jurisdictions {
            jurisdictions.grant(Jurisdiction::parse(code)?);
        }

        let practice_location = match entry.practice_location {
            Some(loc) => {
                let point = GeoPoint::new(loc.latitude, loc.longitude);
                if !point.is_usable() {
                    return Err(CaseflowError::Configuration {
                        reason: format!(
                            "clinician '{}' has an unusable practice location ({}, {}); \
                             geocode the practice address before rostering",
                            entry.id, loc.latitude, loc.longitude
                        ),
                    });
                }
                Some(point)
            }
            None => {
                warn!(
                    clinician_id = %entry.id,
                    "roster entry has no practice location; eligibility filtering \
                     will be unavailable for this clinician"
                );
                None
            }
        };

        Ok(ClinicianProfile {
            id: ClinicianId::new(entry.id),
            display_name: entry.display_name,
            practice_location,
            licensed_jurisdictions: jurisdictions,
        })
    }

    /// Resolve a clinician id to its profile.
    ///
    /// Returns `CaseflowError::Configuration` for an unknown id — an
    /// unrostered clinician asking for cases is a provisioning problem.
    pub fn profile(&self, id: &ClinicianId) -> CaseflowResult<&ClinicianProfile> {
        self.profiles.get(id).ok_or_else(|| CaseflowError::Configuration {
            reason: format!("clinician '{}' is not in the roster", id),
        })
    }

    /// Iterate over all rostered profiles, in no particular order.
    pub fn profiles(&self) -> impl Iterator<Item = &ClinicianProfile> {
        self.profiles.values()
    }

    /// The number of rostered clinicians.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if the roster has no clinicians.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
