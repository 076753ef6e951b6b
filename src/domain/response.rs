use crate::error::PaymentError;

/// Classification of a raw PaymentCreate response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    /// A bare `error: ...` line; carries the trimmed body.
    PlainTextError(String),
    /// The body is not XML; carries parser diagnostics.
    Malformed(String),
    /// Well-formed XML without a payment URL.
    GatewayError(String),
    Success(String),
}

/// Result of a single payment attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The customer should be sent to this URL.
    Redirect(String),
    Failed(PaymentError),
}

impl Outcome {
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(url) => Some(url),
            Outcome::Failed(_) => None,
        }
    }
}
