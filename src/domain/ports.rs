use super::document::PaymentRequestDocument;
use super::merchant::MerchantConfig;
use super::order::{OrderId, OrderSnapshot, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

#[async_trait]
pub trait OrderSystem: Send + Sync {
    async fn get_order(&self, id: OrderId) -> Result<OrderSnapshot>;
    async fn set_order_status(&self, id: OrderId, status: OrderStatus, note: &str) -> Result<()>;
}

#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn merchant_config(&self, gateway_id: &str) -> Result<Option<MerchantConfig>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Notice,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Notice => f.write_str("notice"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// User-facing messages. Never consulted for control flow.
#[async_trait]
pub trait NoticeSink: Send + Sync {
    async fn add_notice(&self, message: &str, severity: Severity);
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Submits the document and returns the raw response body.
    async fn send(&self, doc: &PaymentRequestDocument) -> Result<String>;
}

pub type OrderSystemBox = Box<dyn OrderSystem>;
pub type ConfigStoreBox = Box<dyn ConfigStore>;
pub type NoticeSinkBox = Box<dyn NoticeSink>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
