use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// ISO 4217 style three-letter currency code, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Validates and upper-cases a three-letter code such as `uah`.
    pub fn new(code: &str) -> Result<Self, PaymentError> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(PaymentError::InvalidOrder(format!(
                "'{code}' is not a three-letter currency code"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order lifecycle states this adapter reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    /// Payment pending at the provider; set once a redirect URL was issued.
    OnHold,
}

/// Read-only view of an order as supplied by the shop's order system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: OrderId,
    /// Total in major currency units, e.g. `19.99`.
    pub total: Decimal,
    pub currency: Currency,
}

impl OrderSnapshot {
    /// Creates a snapshot of an order's payable state.
    pub fn new(id: impl Into<OrderId>, total: Decimal, currency: Currency) -> Self {
        Self {
            id: id.into(),
            total,
            currency,
        }
    }

    /// Human-readable description sent to the provider, e.g. `Order #42`.
    pub fn description(&self) -> String {
        format!("Order #{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_is_normalized_to_upper_case() {
        let currency = Currency::new(" uah ").unwrap();
        assert_eq!(currency.as_str(), "UAH");
    }

    #[test]
    fn test_currency_rejects_bad_codes() {
        assert!(Currency::new("UA").is_err());
        assert!(Currency::new("UAHX").is_err());
        assert!(Currency::new("U4H").is_err());
    }

    #[test]
    fn test_order_description() {
        let order = OrderSnapshot::new(42, dec!(10.00), Currency::new("UAH").unwrap());
        assert_eq!(order.description(), "Order #42");
    }

    #[test]
    fn test_order_status_serializes_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::OnHold).unwrap();
        assert_eq!(json, "\"on-hold\"");
    }
}
