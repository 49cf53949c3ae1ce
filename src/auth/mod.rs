//! Authentication — credential guard and request signing.
//!
//! ## Security Model
//!
//! - Credentials are read once, at client construction. A missing variable is
//!   a fatal misconfiguration: construction aborts before any network-capable
//!   component is built.
//! - The secret key and passphrase are private fields and never leave this
//!   module; `Debug` output is redacted.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ConfigError;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OKX_API_KEY";
/// Environment variable holding the API secret.
pub const ENV_SECRET_KEY: &str = "OKX_SECRET_KEY";
/// Environment variable holding the API passphrase.
pub const ENV_PASSPHRASE: &str = "OKX_PASSPHRASE";

/// API credentials for the exchange.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) api_key: String,
    secret_key: String,
    pub(crate) passphrase: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            passphrase: passphrase.into(),
        }
    }

    /// Load credentials from the process environment.
    ///
    /// Requires [`ENV_API_KEY`], [`ENV_SECRET_KEY`] and [`ENV_PASSPHRASE`].
    /// Every missing variable is reported at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut read = |name: &str| match std::env::var(name) {
            Ok(v) if !v.is_empty() => Some(v),
            _ => {
                missing.push(name.to_string());
                None
            }
        };

        let api_key = read(ENV_API_KEY);
        let secret_key = read(ENV_SECRET_KEY);
        let passphrase = read(ENV_PASSPHRASE);

        if !missing.is_empty() {
            tracing::error!(missing = missing.join(", "), "credentials missing from environment");
            return Err(ConfigError::MissingCredentials(missing));
        }

        // All three are Some once `missing` is empty.
        Ok(Self {
            api_key: api_key.unwrap_or_default(),
            secret_key: secret_key.unwrap_or_default(),
            passphrase: passphrase.unwrap_or_default(),
        })
    }

    /// Sign a request per the exchange's scheme:
    /// `Base64(HMAC-SHA256(secret, timestamp + method + request_path + body))`.
    pub(crate) fn sign(&self, timestamp: &str, method: &str, request_path: &str, body: &str) -> String {
        let mut mac = match Hmac::<Sha256>::new_from_slice(self.secret_key.as_bytes()) {
            Ok(mac) => mac,
            Err(e) => {
                // Unreachable for HMAC (any key length is valid), but an empty
                // signature fails the request loudly rather than panicking here.
                tracing::error!(error = %e, "HMAC key initialization failed");
                return String::new();
            }
        };
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(request_path.as_bytes());
        mac.update(body.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_deterministic_and_base64() {
        let creds = Credentials::new("key", "secret", "phrase");
        let sig = creds.sign("2024-01-01T00:00:00.000Z", "GET", "/api/v5/account/balance", "");
        let again = creds.sign("2024-01-01T00:00:00.000Z", "GET", "/api/v5/account/balance", "");
        assert_eq!(sig, again);
        assert!(base64::engine::general_purpose::STANDARD.decode(&sig).is_ok());
    }

    #[test]
    fn sign_varies_with_path() {
        let creds = Credentials::new("key", "secret", "phrase");
        let a = creds.sign("ts", "GET", "/api/v5/account/balance", "");
        let b = creds.sign("ts", "GET", "/api/v5/asset/balances", "");
        assert_ne!(a, b);
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::new("key", "hunter2", "open-sesame");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("open-sesame"));
        assert!(printed.contains("<redacted>"));
    }
}
