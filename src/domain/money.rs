use crate::error::PaymentError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// An amount in the smallest currency subdivision (kopecks for UAH).
///
/// Conversion from major units multiplies by 100 and rounds to an integer,
/// half away from zero: `0.005` becomes `1`, `19.99` becomes `1999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Converts a major-unit total. Negative totals and totals that do not
    /// fit in an `i64` are rejected as [`PaymentError::InvalidOrder`].
    pub fn from_major(total: Decimal) -> Result<Self, PaymentError> {
        if total.is_sign_negative() && !total.is_zero() {
            return Err(PaymentError::InvalidOrder(format!(
                "order total {total} is negative"
            )));
        }

        total
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .map(Self)
            .ok_or_else(|| {
                PaymentError::InvalidOrder(format!("order total {total} is out of range"))
            })
    }

    /// Raw count of minor units.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
