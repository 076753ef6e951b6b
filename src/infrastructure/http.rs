use crate::domain::document::{API_VERSION, PaymentRequestDocument};
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Production PaymentCreate endpoint.
pub const ENDPOINT: &str = "https://tokly.ipay.ua/api302";

/// Bound on a whole PaymentCreate exchange, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// PaymentCreate over HTTPS.
///
/// The document is posted as the single form field `data`. One attempt per
/// call, no retries; connection failures and timeouts surface as
/// [`PaymentError::Transport`](crate::error::PaymentError::Transport).
/// Non-2xx answers are returned like any other body, since the provider
/// reports its errors in the payload.
#[derive(Clone)]
pub struct ToklyClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl ToklyClient {
    /// Creates a client for the production endpoint.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(ENDPOINT)
    }

    /// Creates a client posting to `endpoint`, with the default timeout.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_http(REQUEST_TIMEOUT)?,
            endpoint: endpoint.into(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Replaces the request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: build_http(timeout)?,
            timeout,
            ..self
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn build_http(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

#[async_trait]
impl PaymentGateway for ToklyClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, doc: &PaymentRequestDocument) -> Result<String> {
        let xml = doc.to_xml()?;

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("Api-Version", API_VERSION)
            .form(&[("data", xml.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "provider answered with a non-success status");
        }

        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "provider response received");
        Ok(body)
    }
}
