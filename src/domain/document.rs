use super::lifetime::LifetimeHours;
use super::money::MinorUnits;
use super::order::{Currency, OrderId};
use crate::error::Result;
use crate::interfaces::xml::request_writer;
use serde::{Deserialize, Serialize, Serializer};

/// Version sent in the `Api-Version` header of every PaymentCreate call.
pub const API_VERSION: &str = "1.40";

/// Card numbers accepted by the provider's sandbox environment.
pub struct SandboxCards {
    pub success: &'static [&'static str],
    pub success_under_100: &'static [&'static str],
    pub fail: &'static [&'static str],
    pub preauth: &'static [&'static str],
}

pub const SANDBOX_CARDS: SandboxCards = SandboxCards {
    success: &["3333333333333331", "3333333333332705", "3333333333333000"],
    success_under_100: &["3333333333333430", "3333333333331509"],
    fail: &["3333333333333349", "3333333333336409"],
    preauth: &["3333333333333356"],
};

/// A one-time salt and the merchant's HMAC-SHA512 signature over it.
///
/// Built fresh for each payment attempt and consumed by the request builder.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedEnvelope {
    pub salt: String,
    pub signature: String,
}

/// Order reference carried through the provider in `<info>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPayload {
    pub order_id: OrderId,
}

impl CorrelationPayload {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Recovers the order reference from the text a callback hands back.
    pub fn parse(info: &str) -> Result<Self> {
        Ok(serde_json::from_str(info)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Auth {
    pub mch_id: String,
    pub salt: String,
    pub sign: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Urls {
    pub good: String,
    pub bad: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry {
    pub amount: MinorUnits,
    pub currency: Currency,
    pub desc: String,
    /// Serialized [`CorrelationPayload`].
    pub info: String,
}

/// The `<payment>` document submitted to PaymentCreate.
///
/// Field order is the element order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename = "payment")]
pub struct PaymentRequestDocument {
    pub auth: Auth,
    pub urls: Urls,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(serialize_with = "transaction_list")]
    pub transactions: Vec<TransactionEntry>,
    pub lifetime: LifetimeHours,
    pub lang: String,
    pub return_url: String,
}

impl PaymentRequestDocument {
    /// Serialized form posted as the `data` field.
    pub fn to_xml(&self) -> Result<String> {
        request_writer::write_document(self)
    }
}

/// Wraps the entries as `<transactions><transaction>..</transaction>..</transactions>`.
fn transaction_list<S: Serializer>(
    transactions: &[TransactionEntry],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Transactions<'a> {
        transaction: &'a [TransactionEntry],
    }

    Transactions {
        transaction: transactions,
    }
    .serialize(serializer)
}
