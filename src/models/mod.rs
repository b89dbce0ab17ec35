//! Core data models for the timeclock engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod geo;
mod interval;
mod pay;
mod result;

pub use breakdown::{BreakDetail, WorkTimeBreakdown};
pub(crate) use breakdown::hhmm;
pub use geo::{GeoPoint, GeofenceSpec};
pub use interval::WorkInterval;
pub use pay::PayEstimate;
pub use result::{AuditStep, AuditTrace, AuditWarning, GeofenceCheck, TimesheetResult};
