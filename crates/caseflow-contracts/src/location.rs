//! Geographic coordinate type shared by clinician profiles and case records.
//!
//! Coordinates are WGS-84 decimal degrees. Several data-entry flows upstream
//! stub ungeocoded addresses as (0, 0); that placeholder must be detected and
//! kept out of any distance computation, so `GeoPoint` carries the check.

use serde::{Deserialize, Serialize};

/// A WGS-84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (-90.0 to 90.0).
    pub latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0).
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True iff this is the (0, 0) placeholder written by data-entry flows
    /// that never geocoded an address.
    ///
    /// A placeholder point means "location unset", not "a point in the Gulf
    /// of Guinea" — it must be treated as missing data.
    pub fn is_placeholder(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// True iff both coordinates are finite and within WGS-84 range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// True iff this point is valid and not the ungeocoded placeholder —
    /// i.e. safe to feed into a distance computation.
    pub fn is_usable(&self) -> bool {
        self.is_valid() && !self.is_placeholder()
    }
}
