use crate::domain::document::{
    Auth, CorrelationPayload, Environment, PaymentRequestDocument, SignedEnvelope,
    TransactionEntry, Urls,
};
use crate::domain::lifetime::LifetimeHours;
use crate::domain::merchant::MerchantConfig;
use crate::domain::money::MinorUnits;
use crate::domain::order::OrderSnapshot;
use crate::error::Result;

/// Assembles the PaymentCreate document for one order.
///
/// Expects `cfg` to have passed [`MerchantConfig::validate`].
pub fn build_request(
    order: &OrderSnapshot,
    cfg: &MerchantConfig,
    envelope: SignedEnvelope,
) -> Result<PaymentRequestDocument> {
    let amount = MinorUnits::from_major(order.total)?;
    let info = CorrelationPayload { order_id: order.id }.to_json()?;

    Ok(PaymentRequestDocument {
        auth: Auth {
            mch_id: cfg.mch_id().to_string(),
            salt: envelope.salt,
            sign: envelope.signature,
        },
        urls: Urls {
            good: cfg.success_url().to_string(),
            bad: cfg.failure_url().to_string(),
        },
        environment: cfg.sandbox.then_some(Environment::Sandbox),
        transactions: vec![TransactionEntry {
            amount,
            currency: order.currency.clone(),
            desc: order.description(),
            info,
        }],
        lifetime: LifetimeHours::from_setting(cfg.lifetime),
        lang: cfg.language().to_string(),
        return_url: cfg.return_url().to_string(),
    })
}
