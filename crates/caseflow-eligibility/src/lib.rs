//! # caseflow-eligibility
//!
//! Licensing + geographic-radius eligibility filtering for triage cases.
//!
//! ## Overview
//!
//! This crate provides [`EligibilityFilter`], the predicate deciding which
//! triage cases a clinician is legally and geographically permitted to
//! claim: the patient's state must be in the clinician's licensed
//! jurisdictions AND the patient must be within
//! [`ELIGIBILITY_RADIUS_MILES`] (50 statute miles, inclusive) of the
//! practice location, measured by Haversine great-circle distance.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use caseflow_eligibility::EligibilityFilter;
//!
//! let filter = EligibilityFilter::for_clinician(&profile)?;
//! let visible = filter.filter_cases(&candidates);
//! ```
//!
//! ## Guarantees
//!
//! Filtering is a pure, synchronous computation over an in-memory list:
//! no I/O, no mutation of the input, deterministic, idempotent, and stable
//! (output preserves input order). An incomplete clinician profile fails
//! construction with a configuration error rather than silently filtering
//! to nothing; a candidate with an unusable patient location is excluded
//! per-record and logged, never failing the batch.

pub mod distance;
pub mod filter;

pub use distance::{distance_miles, EARTH_RADIUS_MILES};
pub use filter::{EligibilityFilter, ELIGIBILITY_RADIUS_MILES};

// ── Tests ─────────────────────────────────────────────────────────────────────
