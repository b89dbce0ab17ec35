//! Configuration types for the timeclock engine.
//!
//! These are the strongly-typed structures deserialized from YAML
//! configuration files. Break-slot clock times are parsed from "HH:MM" at
//! the deserialization boundary, so malformed configuration is rejected
//! early instead of flowing untyped into the calculator.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The break-policy schema version this engine understands.
pub const BREAK_POLICY_VERSION: u32 = 1;

/// An unpaid break window, naive of date.
///
/// A slot whose `end` is numerically before its `start` represents a window
/// that wraps past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSlot {
    /// The wall-clock start of the window.
    #[serde(with = "crate::models::hhmm")]
    pub start: NaiveTime,
    /// The wall-clock end of the window.
    #[serde(with = "crate::models::hhmm")]
    pub end: NaiveTime,
    /// Optional label (e.g., "lunch").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A company's ordered sequence of unpaid break windows.
///
/// The policy carries an explicit schema version; loaders reject versions
/// this engine does not understand rather than guessing at field meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicy {
    /// Schema version of the policy blob.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Break windows in policy order.
    #[serde(default)]
    pub slots: Vec<BreakSlot>,
}

fn default_version() -> u32 {
    BREAK_POLICY_VERSION
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            version: BREAK_POLICY_VERSION,
            slots: Vec::new(),
        }
    }
}

/// The nightly wall-clock window eligible for the night premium.
///
/// The default 22:00–05:00 window spans midnight: `start` is on one
/// calendar day and `end` on the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// When the night window opens.
    #[serde(with = "crate::models::hhmm")]
    pub start: NaiveTime,
    /// When the night window closes (on the following day when before `start`).
    #[serde(with = "crate::models::hhmm")]
    pub end: NaiveTime,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(22, 0, 0).expect("valid night start"),
            end: NaiveTime::from_hms_opt(5, 0, 0).expect("valid night end"),
        }
    }
}

/// Premium multipliers applied by the pay estimator.
///
/// `overtime` multiplies the base wage for overtime hours; `night` and
/// `holiday` are additive premiums on top of pay already counted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRates {
    /// Overtime wage multiplier.
    pub overtime: Decimal,
    /// Additive night premium multiplier.
    pub night: Decimal,
    /// Additive holiday premium multiplier.
    pub holiday: Decimal,
}

impl Default for PremiumRates {
    fn default() -> Self {
        Self {
            overtime: Decimal::new(125, 2),
            night: Decimal::new(25, 2),
            holiday: Decimal::new(35, 2),
        }
    }
}

/// The work policy governing a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPolicy {
    /// Minutes in a standard working day; worked minutes beyond this are
    /// overtime.
    #[serde(default = "default_standard_day_minutes")]
    pub standard_day_minutes: i64,
    /// The nightly premium window.
    #[serde(default)]
    pub night_window: NightWindow,
    /// Premium multipliers for the pay estimator.
    #[serde(default)]
    pub premiums: PremiumRates,
}

fn default_standard_day_minutes() -> i64 {
    480
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            standard_day_minutes: default_standard_day_minutes(),
            night_window: NightWindow::default(),
            premiums: PremiumRates::default(),
        }
    }
}
