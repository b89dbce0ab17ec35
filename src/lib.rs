//! Work-time and geofence calculation engine for a construction-site
//! attendance system.
//!
//! This crate converts raw clock-in/clock-out punches plus a configurable
//! break policy into a structured breakdown of worked, overtime, night and
//! holiday minutes, validates punch locations against site geofences, and
//! estimates the resulting pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
