use crate::domain::document::SignedEnvelope;
use crate::error::{PaymentError, Result};
use ring::digest;
use ring::hmac;
use ring::rand::{SecureRandom, SystemRandom};
use time::OffsetDateTime;

/// Produces a fresh salt: SHA-1 of the current time in nanoseconds and 16
/// bytes from the OS random source, hex encoded.
///
/// No state is kept between calls, so concurrent callers cannot observe
/// each other's salt.
pub fn generate_salt() -> Result<String> {
    let mut noise = [0u8; 16];
    SystemRandom::new()
        .fill(&mut noise)
        .map_err(|_| PaymentError::Crypto("system random source unavailable".to_string()))?;

    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();

    let mut ctx = digest::Context::new(&digest::SHA1_FOR_LEGACY_USE_ONLY);
    ctx.update(&nanos.to_be_bytes());
    ctx.update(&noise);
    Ok(hex::encode(ctx.finish().as_ref()))
}

/// HMAC-SHA512 of `salt` keyed by `key`, lowercase hex.
pub fn sign(salt: &str, key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(PaymentError::Configuration(
            "signing key is empty".to_string(),
        ));
    }

    let key = hmac::Key::new(hmac::HMAC_SHA512, key.as_bytes());
    Ok(hex::encode(hmac::sign(&key, salt.as_bytes()).as_ref()))
}

impl SignedEnvelope {
    /// Generates a salt and signs it with the merchant key.
    pub fn seal(key: &str) -> Result<Self> {
        let salt = generate_salt()?;
        let signature = sign(&salt, key)?;
        Ok(Self { salt, signature })
    }
}
