//! Configuration loading and management for the timeclock engine.
//!
//! This module provides functionality to load company policy configuration
//! from YAML files: the break policy (unpaid break windows) and the work
//! policy (standard-day threshold, night window, premium multipliers).
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Break slots configured: {}", config.break_policy().slots.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BREAK_POLICY_VERSION, BreakPolicy, BreakSlot, NightWindow, PremiumRates, WorkPolicy};
