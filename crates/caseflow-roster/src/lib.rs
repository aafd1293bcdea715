//! # caseflow-roster
//!
//! A TOML-driven clinician roster for the caseflow routing crates.
//!
//! ## Overview
//!
//! This crate provides [`TomlRoster`], which loads clinician profiles —
//! identity, geocoded practice location, licensed jurisdictions — from a
//! TOML file and validates them at load time. Roster entries are the
//! configuration input to the eligibility filter in caseflow-eligibility.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use caseflow_roster::TomlRoster;
//!
//! let roster = TomlRoster::from_file(Path::new("roster.toml"))?;
//! let profile = roster.profile(&clinician_id)?;
//! ```
//!
//! ## Validation
//!
//! Duplicate ids, malformed jurisdiction codes, and placeholder (0,0)
//! practice locations are rejected at load. An entry may omit its practice
//! location entirely; it loads with a warning and fails later, at filter
//! construction, with a configuration error.

pub mod config;
pub mod roster;

pub use config::{ClinicianEntry, LocationEntry, RosterConfig};
pub use roster::TomlRoster;

// ── Tests ─────────────────────────────────────────────────────────────────────
