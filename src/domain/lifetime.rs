use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

pub const SECONDS_PER_HOUR: i64 = 3600;

/// Substituted when the configured lifetime is zero or negative, in seconds.
pub const DEFAULT_LIFETIME_SECONDS: i64 = 3600;

/// Payment lifetime as the provider expects it: hours, up to 4 decimals.
///
/// The merchant setting is unit-ambiguous. Values of at least 3600 are read as
/// seconds and converted; anything smaller is taken to be hours already. The
/// boundary is inclusive, so `3600` means one hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifetimeHours(Decimal);

impl LifetimeHours {
    pub fn from_setting(value: Decimal) -> Self {
        let value = if value <= Decimal::ZERO {
            Decimal::from(DEFAULT_LIFETIME_SECONDS)
        } else {
            value
        };

        let seconds_per_hour = Decimal::from(SECONDS_PER_HOUR);
        if value >= seconds_per_hour {
            Self(value / seconds_per_hour)
        } else {
            Self(value)
        }
    }
}

impl fmt::Display for LifetimeHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        write!(f, "{rounded}")
    }
}

impl Serialize for LifetimeHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
