//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WIX_SITE_ID` - Site whose store catalog is listed
//! - `WIX_API_KEY` - API key with read access to the store catalog
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_PAGE_SIZE` - Products per listing page (default: 8)
//! - `STOREFRONT_QUERY_RETRIES` - Retries after a failed product query (default: 3)
//! - `WIX_API_BASE_URL` - Catalog API base URL (default: <https://www.wixapis.com>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use lama_core::DEFAULT_PAGE_SIZE;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_QUERY_RETRIES: u32 = 3;
const DEFAULT_WIX_API_BASE_URL: &str = "https://www.wixapis.com";
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Listing behaviour
    pub listing: ListingSettings,
    /// Hosted catalog API configuration
    pub wix: WixConfig,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Settings for the product listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSettings {
    /// Products per page (always > 0)
    pub page_size: u32,
    /// Retries after the first failed product query
    pub query_retries: u32,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            query_retries: DEFAULT_QUERY_RETRIES,
        }
    }
}

/// Hosted catalog API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct WixConfig {
    /// API base URL, without trailing slash
    pub api_base_url: Url,
    /// Site ID sent with every request
    pub site_id: String,
    /// API key (server-side only)
    pub api_key: SecretString,
}

impl std::fmt::Debug for WixConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WixConfig")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("site_id", &self.site_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Sentry configuration.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API key fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default::<IpAddr>("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env_or_default::<u16>("STOREFRONT_PORT", "3000")?;

        Ok(Self {
            host,
            port,
            listing: ListingSettings::from_env()?,
            wix: WixConfig::from_env()?,
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ListingSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let page_size = parse_env_or_default::<u32>(
            "STOREFRONT_PAGE_SIZE",
            &DEFAULT_PAGE_SIZE.to_string(),
        )?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_PAGE_SIZE".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let query_retries = parse_env_or_default::<u32>(
            "STOREFRONT_QUERY_RETRIES",
            &DEFAULT_QUERY_RETRIES.to_string(),
        )?;

        Ok(Self {
            page_size,
            query_retries,
        })
    }
}

impl WixConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_base = get_env_or_default("WIX_API_BASE_URL", DEFAULT_WIX_API_BASE_URL);
        let api_base_url = parse_base_url(&raw_base)
            .map_err(|e| ConfigError::InvalidEnvVar("WIX_API_BASE_URL".to_string(), e))?;

        Ok(Self {
            api_base_url,
            site_id: get_required_env("WIX_SITE_ID")?,
            api_key: get_validated_secret("WIX_API_KEY")?,
        })
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_env_or_default::<f32>("SENTRY_SAMPLE_RATE", "1.0")?,
            traces_sample_rate: parse_env_or_default::<f32>("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable (empty counts as unset).
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse the API base URL and strip any trailing slash from its path.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Real API keys are long random tokens
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wix_config() -> WixConfig {
        WixConfig {
            api_base_url: Url::parse("https://www.wixapis.com").unwrap(),
            site_id: "site-1234".to_string(),
            api_key: SecretString::from("IST.super_secret_api_key"),
        }
    }

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_high() {
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "WIX_API_KEY");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "WIX_API_KEY");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "WIX_API_KEY");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_base_url_strips_trailing_slash() {
        let url = parse_base_url("https://proxy.internal/wix/").unwrap();
        assert_eq!(url.as_str(), "https://proxy.internal/wix");
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        assert!(parse_base_url("ftp://www.wixapis.com").is_err());
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_listing_settings_default() {
        let settings = ListingSettings::default();
        assert_eq!(settings.page_size, 8);
        assert_eq!(settings.query_retries, 3);
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            listing: ListingSettings::default(),
            wix: wix_config(),
            sentry: SentryConfig::default(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_wix_config_debug_redacts_api_key() {
        let debug_output = format!("{:?}", wix_config());

        assert!(debug_output.contains("site-1234"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_api_key"));
    }
}
