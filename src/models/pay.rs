//! Pay estimate model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The estimated pay derived from a work-time breakdown.
///
/// Each component is floored to whole currency units independently before
/// summation, matching how the payroll layer rounds monetary amounts down.
/// The night and holiday components are additive premiums on top of the
/// base and overtime pay.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::PayEstimate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let estimate = PayEstimate {
///     base_pay: Decimal::from_str("16000").unwrap(),
///     overtime_pay: Decimal::from_str("0").unwrap(),
///     night_pay: Decimal::from_str("0").unwrap(),
///     holiday_pay: Decimal::from_str("0").unwrap(),
///     gross_pay: Decimal::from_str("16000").unwrap(),
/// };
/// assert_eq!(estimate.gross_pay, estimate.base_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayEstimate {
    /// Pay for regular (non-overtime) worked hours at the base wage.
    pub base_pay: Decimal,
    /// Pay for overtime hours at the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Additive premium for night hours.
    pub night_pay: Decimal,
    /// Additive premium for rest-day hours.
    pub holiday_pay: Decimal,
    /// Sum of the four floored components.
    pub gross_pay: Decimal,
}
