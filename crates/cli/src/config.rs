//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CARDAPIO_WHATSAPP_BASE_URL` - Messaging endpoint (default: `https://wa.me`)
//! - `CARDAPIO_WHATSAPP_PHONE` - Store phone number (default: `+5581998451051`)
//! - `CARDAPIO_CLEAR_AFTER_CHECKOUT` - Empty the cart after checkout (default: false)
//! - `CARDAPIO_OPEN_HOUR` - First open hour, inclusive (default: 18)
//! - `CARDAPIO_CLOSE_HOUR` - Last open hour, inclusive (default: 23)

use cardapio_core::handoff::{DEFAULT_BASE_URL, DEFAULT_PHONE};
use cardapio_core::{CheckoutOptions, Handoff, HandoffError, OpeningHours};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront settings for a terminal session.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where finished orders are sent
    pub handoff: Handoff,
    /// Checkout behavior
    pub checkout: CheckoutOptions,
    /// Opening hours for the open/closed badge
    pub hours: OpeningHours,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = get_or_default(&lookup, "CARDAPIO_WHATSAPP_BASE_URL", DEFAULT_BASE_URL);
        let phone = get_or_default(&lookup, "CARDAPIO_WHATSAPP_PHONE", DEFAULT_PHONE);
        let handoff = Handoff::new(&base_url, &phone).map_err(|e| {
            let key = match e {
                HandoffError::InvalidPhone(_) => "CARDAPIO_WHATSAPP_PHONE",
                HandoffError::InvalidBaseUrl(_) | HandoffError::NotHierarchical(_) => {
                    "CARDAPIO_WHATSAPP_BASE_URL"
                }
            };
            ConfigError::InvalidEnvVar(key.to_string(), e.to_string())
        })?;

        let clear_after_checkout = match lookup("CARDAPIO_CLEAR_AFTER_CHECKOUT") {
            Some(value) => parse_bool("CARDAPIO_CLEAR_AFTER_CHECKOUT", &value)?,
            None => false,
        };

        let open = parse_hour(&lookup, "CARDAPIO_OPEN_HOUR", OpeningHours::DEFAULT_OPEN)?;
        let close = parse_hour(&lookup, "CARDAPIO_CLOSE_HOUR", OpeningHours::DEFAULT_CLOSE)?;
        let hours = OpeningHours::new(open, close).map_err(|e| {
            ConfigError::InvalidEnvVar("CARDAPIO_OPEN_HOUR".to_string(), e.to_string())
        })?;

        Ok(Self {
            handoff,
            checkout: CheckoutOptions {
                clear_after_checkout,
            },
            hours,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse a boolean flag (`true`/`false`/`1`/`0`/`yes`/`no`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got '{other}'"),
        )),
    }
}

/// Parse an hour of the day, falling back to `default` when unset.
fn parse_hour(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u32,
) -> Result<u32, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(!config.checkout.clear_after_checkout);
        assert_eq!(config.hours, OpeningHours::default());
        assert_eq!(
            config.handoff.url_for("oi").as_str(),
            "https://wa.me/+5581998451051?text=oi"
        );
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CARDAPIO_WHATSAPP_BASE_URL", "https://chat.example.com/send"),
            ("CARDAPIO_WHATSAPP_PHONE", "5511999990000"),
            ("CARDAPIO_CLEAR_AFTER_CHECKOUT", "yes"),
            ("CARDAPIO_OPEN_HOUR", "11"),
            ("CARDAPIO_CLOSE_HOUR", "15"),
        ])
        .unwrap();

        assert!(config.checkout.clear_after_checkout);
        assert_eq!(config.hours, OpeningHours::new(11, 15).unwrap());
        assert_eq!(
            config.handoff.url_for("x").as_str(),
            "https://chat.example.com/send/5511999990000?text=x"
        );
    }

    #[test]
    fn test_invalid_bool() {
        let result = load(&[("CARDAPIO_CLEAR_AFTER_CHECKOUT", "sometimes")]);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_invalid_hour() {
        assert!(load(&[("CARDAPIO_OPEN_HOUR", "six")]).is_err());
        assert!(load(&[("CARDAPIO_CLOSE_HOUR", "24")]).is_err());
        assert!(load(&[("CARDAPIO_OPEN_HOUR", "22"), ("CARDAPIO_CLOSE_HOUR", "20")]).is_err());
    }

    #[test]
    fn test_invalid_phone() {
        let result = load(&[("CARDAPIO_WHATSAPP_PHONE", "not-a-phone")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "CARDAPIO_WHATSAPP_PHONE"
        ));
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("K", "TRUE").unwrap());
        assert!(parse_bool("K", "1").unwrap());
        assert!(!parse_bool("K", "no").unwrap());
        assert!(!parse_bool("K", "").unwrap());
    }
}
