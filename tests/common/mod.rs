#![allow(dead_code)]

use async_trait::async_trait;
use ipay_tokly::domain::document::{CorrelationPayload, PaymentRequestDocument};
use ipay_tokly::domain::merchant::MerchantConfig;
use ipay_tokly::domain::order::{Currency, OrderSnapshot};
use ipay_tokly::domain::ports::PaymentGateway;
use ipay_tokly::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the fake provider answers.
#[derive(Clone)]
pub enum Reply {
    Body(String),
    /// `<payment><url>https://pay.example/<order id></url></payment>`
    UrlPerOrder,
    TransportFailure,
}

/// Gateway double that keeps every document it was asked to send.
#[derive(Clone)]
pub struct RecordingGateway {
    reply: Reply,
    sent: Arc<Mutex<Vec<PaymentRequestDocument>>>,
}

impl RecordingGateway {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(body: &str) -> Self {
        Self::new(Reply::Body(body.to_string()))
    }

    pub async fn sent(&self) -> Vec<PaymentRequestDocument> {
        self.sent.lock().await.clone()
    }

    pub async fn calls(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn send(&self, doc: &PaymentRequestDocument) -> Result<String> {
        self.sent.lock().await.push(doc.clone());

        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::UrlPerOrder => {
                let payload = CorrelationPayload::parse(&doc.transactions[0].info)?;
                Ok(format!(
                    "<payment><url>https://pay.example/{}</url></payment>",
                    payload.order_id
                ))
            }
            Reply::TransportFailure => Err(PaymentError::Transport("connection reset".into())),
        }
    }
}

pub fn merchant_config() -> MerchantConfig {
    MerchantConfig {
        mch_id: "1234".to_string(),
        sign_key: "3a7b9c1d".to_string(),
        return_url: "https://shop.example/checkout/return".to_string(),
        ..MerchantConfig::default()
    }
}

pub fn order(id: u64, total: Decimal) -> OrderSnapshot {
    OrderSnapshot::new(id, total, Currency::new("UAH").unwrap())
}
