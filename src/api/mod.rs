//! HTTP API module for the time-clock engine.
//!
//! This module provides the REST API endpoints for calculating timesheets
//! from clock-in/clock-out punch pairs and evaluating geofence checks.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GeofenceRequest, TimesheetRequest};
pub use response::ApiError;
pub use state::AppState;
