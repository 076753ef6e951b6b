use crate::domain::order::OrderId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Gateway error: {0}")]
    Gateway(String),
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),
    #[error("Crypto error: {0}")]
    Crypto(String),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
