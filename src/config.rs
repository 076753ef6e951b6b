//! Settings for the `ipay-tokly` binary.
//!
//! The library itself never reads files or the environment; hosts hand it a
//! [`MerchantConfig`] through a `ConfigStore`.

use crate::domain::merchant::MerchantConfig;
use crate::error::Result;
use crate::infrastructure::http::ENDPOINT;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Prefix for environment overrides, e.g. `IPAY__MERCHANT__SIGN_KEY`.
pub const ENV_PREFIX: &str = "IPAY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub merchant: MerchantConfig,
    #[serde(default)]
    pub gateway: GatewaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    ENDPOINT.to_string()
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Settings {
    /// Loads a TOML settings file, then applies `IPAY__`-prefixed overrides.
    pub fn new(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
