use crate::domain::ports::{NoticeSink, Severity};
use async_trait::async_trait;

/// Forwards notices to the `tracing` subscriber, for hosts without a UI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNoticeSink;

#[async_trait]
impl NoticeSink for TracingNoticeSink {
    async fn add_notice(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Notice => tracing::info!(target: "ipay_tokly::notice", %severity, "{message}"),
            Severity::Error => tracing::error!(target: "ipay_tokly::notice", %severity, "{message}"),
        }
    }
}
