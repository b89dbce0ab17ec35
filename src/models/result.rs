//! Timesheet result models.
//!
//! This module contains the [`TimesheetResult`] type and its associated
//! structures that capture all outputs from a clock-out calculation:
//! the work-time breakdown, the optional pay estimate and geofence check,
//! and a complete audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayEstimate, WorkTimeBreakdown};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application so a payroll reviewer can replay the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate anomalies that were absorbed rather than rejected
/// (reversed punches, or premium minutes counted under more than one rule),
/// so a separate alerting layer can surface them without blocking payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The outcome of evaluating a punch location against a site geofence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceCheck {
    /// Great-circle distance from the reading to the fence center, in meters.
    pub distance_meters: f64,
    /// Whether the reading fell inside the fence (boundary inclusive).
    pub within: bool,
}

/// The complete result of a clock-out calculation.
///
/// This is what the attendance record handlers persist: the structured
/// time breakdown, the optional pay estimate (present when an hourly wage
/// was supplied), the optional geofence check (present when both a reading
/// and a site fence were supplied), and the audit trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The structured work-time breakdown.
    pub breakdown: WorkTimeBreakdown,
    /// The pay estimate, when an hourly wage was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<PayEstimate>,
    /// The geofence check for the clock-out location, when evaluable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geofence: Option<GeofenceCheck>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
