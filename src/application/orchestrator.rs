use super::builder::build_request;
use super::interpreter::interpret;
use crate::domain::document::{SANDBOX_CARDS, SignedEnvelope};
use crate::domain::merchant::MerchantConfig;
use crate::domain::order::{OrderId, OrderSnapshot, OrderStatus};
use crate::domain::ports::{
    ConfigStoreBox, NoticeSinkBox, OrderSystemBox, PaymentGatewayBox, Severity,
};
use crate::domain::response::{GatewayResponse, Outcome};
use crate::error::{PaymentError, Result};
use tracing::{info, instrument, warn};

/// Settings key under which the merchant configuration is stored.
pub const GATEWAY_ID: &str = "ipay_tokly";

/// Note attached to the order when it is moved to on-hold.
pub const PENDING_NOTE: &str = "Awaiting payment via iPay Tokly";

const INVALID_XML_MESSAGE: &str = "invalid XML response";

/// Runs PaymentCreate for an order: sign, build, send, interpret, and move the
/// order to on-hold when the provider hands back a redirect URL.
///
/// Holds no per-payment state; one instance can serve concurrent requests.
pub struct PaymentOrchestrator {
    gateway: PaymentGatewayBox,
    orders: OrderSystemBox,
    configs: ConfigStoreBox,
    notices: NoticeSinkBox,
}

impl PaymentOrchestrator {
    /// Creates an orchestrator wired to the given ports.
    pub fn new(
        gateway: PaymentGatewayBox,
        orders: OrderSystemBox,
        configs: ConfigStoreBox,
        notices: NoticeSinkBox,
    ) -> Self {
        Self {
            gateway,
            orders,
            configs,
            notices,
        }
    }

    /// Creates a payment for the order stored under `order_id`, using the
    /// merchant settings kept for [`GATEWAY_ID`].
    #[instrument(skip(self))]
    pub async fn process_payment(&self, order_id: OrderId) -> Outcome {
        let cfg = match self.load_config().await {
            Ok(cfg) => cfg,
            Err(err) => return self.fail(err).await,
        };

        let order = match self.orders.get_order(order_id).await {
            Ok(order) => order,
            Err(err) => return self.fail(err).await,
        };

        self.create_payment(&order, &cfg).await
    }

    /// Creates a payment for `order` with the given merchant settings.
    ///
    /// Errors never touch the order; they are reported to the notice sink and
    /// returned as [`Outcome::Failed`].
    #[instrument(skip_all, fields(order_id = %order.id, sandbox = cfg.sandbox))]
    pub async fn create_payment(&self, order: &OrderSnapshot, cfg: &MerchantConfig) -> Outcome {
        match self.try_create_payment(order, cfg).await {
            Ok(url) => {
                info!("payment created");
                Outcome::Redirect(url)
            }
            Err(err) => self.fail(err).await,
        }
    }

    async fn try_create_payment(&self, order: &OrderSnapshot, cfg: &MerchantConfig) -> Result<String> {
        cfg.validate()?;

        let envelope = SignedEnvelope::seal(cfg.sign_key())?;
        let doc = build_request(order, cfg, envelope)?;

        if cfg.debug {
            let xml = doc.to_xml()?;
            self.notice(format!("iPay Request (payment XML): {xml}")).await;
            if cfg.sandbox {
                self.notice(format!(
                    "Sandbox Mode Active - use test cards: {}",
                    SANDBOX_CARDS.success.join(", ")
                ))
                .await;
            }
        }

        let body = self.gateway.send(&doc).await?;

        if cfg.debug {
            self.notice(format!("iPay Response raw: {body}")).await;
        }

        match interpret(&body) {
            GatewayResponse::Success(url) => {
                self.orders
                    .set_order_status(order.id, OrderStatus::OnHold, PENDING_NOTE)
                    .await?;
                Ok(url)
            }
            GatewayResponse::PlainTextError(message) | GatewayResponse::GatewayError(message) => {
                Err(PaymentError::Gateway(message))
            }
            GatewayResponse::Malformed(diagnostics) => {
                let message = if cfg.debug {
                    format!("{INVALID_XML_MESSAGE}: {diagnostics}")
                } else {
                    INVALID_XML_MESSAGE.to_string()
                };
                Err(PaymentError::MalformedResponse(message))
            }
        }
    }

    async fn load_config(&self) -> Result<MerchantConfig> {
        let cfg = self
            .configs
            .merchant_config(GATEWAY_ID)
            .await?
            .ok_or_else(|| {
                PaymentError::Configuration(format!("no settings stored for {GATEWAY_ID}"))
            })?;

        if !cfg.enabled {
            return Err(PaymentError::Configuration(format!(
                "{} is disabled",
                cfg.title
            )));
        }
        Ok(cfg)
    }

    async fn notice(&self, message: String) {
        self.notices.add_notice(&message, Severity::Notice).await;
    }

    async fn fail(&self, err: PaymentError) -> Outcome {
        warn!(error = %err, "payment creation failed");
        self.notices
            .add_notice(&format!("iPay {err}"), Severity::Error)
            .await;
        Outcome::Failed(err)
    }
}
