//! Roster configuration schema.
//!
//! A `RosterConfig` is deserialized from TOML and holds one `ClinicianEntry`
//! per provisioned clinician. Entries carry raw strings and numbers; the
//! loader in `roster.rs` validates them and resolves each entry to a
//! `ClinicianProfile`.

use serde::{Deserialize, Serialize};

/// A practice location as written in the roster file.
///
/// Example in TOML:
/// ```toml
/// [clinicians.practice_location]
/// latitude = 34.0522
/// longitude = -118.2437
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationEntry {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single clinician as written in the roster file.
///
/// `practice_location` may be omitted for a clinician whose practice
/// address has not been geocoded yet; such an entry loads fine but cannot
/// be used to build an eligibility filter until the location is filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicianEntry {
    /// Stable identifier, unique across the roster.
    pub id: String,

    /// Display name for logs and operator tooling.
    pub display_name: String,

    /// Geocoded practice address, if provisioning completed.
    pub practice_location: Option<LocationEntry>,

    /// State codes this clinician is licensed in. Validated at load:
    /// each must be exactly two ASCII letters.
    #[serde(default)]
    pub licensed_jurisdictions: Vec<String>,
}

/// The top-level structure deserialized from a TOML roster file.
///
/// Example:
/// ```toml
/// [[clinicians]]
/// id = "dr-rivera"
/// display_name = "Dr. A. Rivera"
/// licensed_jurisdictions = ["CA", "NV"]
///
/// [clinicians.practice_location]
/// latitude = 34.0522
/// longitude = -118.2437
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// All provisioned clinicians.
    pub clinicians: Vec<ClinicianEntry>,
}
