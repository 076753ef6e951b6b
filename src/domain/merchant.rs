use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_LANGUAGE: &str = "ua";
pub const DEFAULT_TITLE: &str = "iPay Tokly";

/// Merchant settings for the gateway, as stored by the shop.
///
/// Optional URLs and the language may be left blank; they fall back to the
/// return URL and [`DEFAULT_LANGUAGE`] respectively. Credentials are trimmed
/// before use.
#[derive(Clone, Deserialize)]
pub struct MerchantConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub mch_id: String,
    #[serde(default)]
    pub sign_key: String,
    #[serde(default)]
    pub return_url: String,
    #[serde(default)]
    pub url_good: Option<String>,
    #[serde(default)]
    pub url_bad: Option<String>,
    #[serde(default = "default_language")]
    pub lang: String,
    /// Seconds or hours, see [`crate::domain::lifetime::LifetimeHours`].
    #[serde(default = "default_lifetime")]
    pub lifetime: Decimal,
    #[serde(default)]
    pub sandbox: bool,
    #[serde(default)]
    pub debug: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_lifetime() -> Decimal {
    Decimal::from(crate::domain::lifetime::DEFAULT_LIFETIME_SECONDS)
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            title: default_title(),
            mch_id: String::new(),
            sign_key: String::new(),
            return_url: String::new(),
            url_good: None,
            url_bad: None,
            lang: default_language(),
            lifetime: default_lifetime(),
            sandbox: false,
            debug: false,
        }
    }
}

impl MerchantConfig {
    /// Checks that the merchant id, signing key and return URL are present.
    pub fn validate(&self) -> Result<(), PaymentError> {
        let missing: Vec<&str> = [
            ("mch_id", self.mch_id()),
            ("sign_key", self.sign_key()),
            ("return_url", self.return_url()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::Configuration(format!(
                "merchant settings are not filled in: {}",
                missing.join(", ")
            )))
        }
    }

    /// Merchant id with surrounding whitespace removed.
    pub fn mch_id(&self) -> &str {
        self.mch_id.trim()
    }

    pub fn sign_key(&self) -> &str {
        self.sign_key.trim()
    }

    pub fn return_url(&self) -> &str {
        self.return_url.trim()
    }

    /// `url_good`, or the return URL when it is unset or blank.
    pub fn success_url(&self) -> &str {
        non_blank(self.url_good.as_deref()).unwrap_or_else(|| self.return_url())
    }

    /// `url_bad`, or the return URL when it is unset or blank.
    pub fn failure_url(&self) -> &str {
        non_blank(self.url_bad.as_deref()).unwrap_or_else(|| self.return_url())
    }

    /// Checkout language, `ua` unless configured.
    pub fn language(&self) -> &str {
        non_blank(Some(self.lang.as_str())).unwrap_or(DEFAULT_LANGUAGE)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Debug for MerchantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantConfig")
            .field("enabled", &self.enabled)
            .field("title", &self.title)
            .field("mch_id", &self.mch_id)
            .field("sign_key", &"*** redacted ***")
            .field("return_url", &self.return_url)
            .field("url_good", &self.url_good)
            .field("url_bad", &self.url_bad)
            .field("lang", &self.lang)
            .field("lifetime", &self.lifetime)
            .field("sandbox", &self.sandbox)
            .field("debug", &self.debug)
            .finish()
    }
}
