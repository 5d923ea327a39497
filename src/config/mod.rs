use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::core::{AppError, Result};

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub razorpay: RazorpayConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Origin of the checkout SPA; unset means permissive CORS (development)
    pub cors_allowed_origin: Option<String>,
    /// GST rate (percent) applied when the caller does not supply one
    pub default_gst_rate: Decimal,
}

/// Razorpay credentials and endpoint configuration.
///
/// The key pair and the webhook secret are independent: a missing key pair
/// disables every network operation, a missing webhook secret disables only
/// webhook verification. Neither prevents startup.
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
    pub webhook_secret: Option<String>,
    pub base_url: String,
    pub retry: Option<RetryConfig>,
}

/// Opt-in retry policy for provider calls. Absent means no internal
/// retries; a failed call is reported immediately.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub min_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let default_gst_rate = match env_opt("DEFAULT_GST_RATE") {
            Some(raw) => Decimal::from_str(&raw)
                .map_err(|_| AppError::configuration("Invalid DEFAULT_GST_RATE"))?,
            None => Decimal::from(18u32),
        };

        let retry = match env_opt("RAZORPAY_MAX_RETRIES") {
            Some(raw) => {
                let max_attempts: u32 = raw
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid RAZORPAY_MAX_RETRIES"))?;
                if max_attempts == 0 {
                    None
                } else {
                    Some(RetryConfig {
                        max_attempts,
                        min_backoff_ms: env_opt("RAZORPAY_RETRY_MIN_BACKOFF_MS")
                            .map(|v| v.parse())
                            .transpose()
                            .map_err(|_| {
                                AppError::configuration("Invalid RAZORPAY_RETRY_MIN_BACKOFF_MS")
                            })?
                            .unwrap_or(250),
                        max_backoff_ms: env_opt("RAZORPAY_RETRY_MAX_BACKOFF_MS")
                            .map(|v| v.parse())
                            .transpose()
                            .map_err(|_| {
                                AppError::configuration("Invalid RAZORPAY_RETRY_MAX_BACKOFF_MS")
                            })?
                            .unwrap_or(10_000),
                    })
                }
            }
            None => None,
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                cors_allowed_origin: env_opt("CORS_ALLOWED_ORIGIN"),
                default_gst_rate,
            },
            server: ServerConfig::from_env()?,
            razorpay: RazorpayConfig {
                key_id: env_opt("RAZORPAY_KEY_ID"),
                key_secret: env_opt("RAZORPAY_KEY_SECRET"),
                webhook_secret: env_opt("RAZORPAY_WEBHOOK_SECRET"),
                base_url: env_opt("RAZORPAY_BASE_URL")
                    .unwrap_or_else(|| "https://api.razorpay.com".to_string()),
                retry,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // A half-configured key pair is a deployment mistake, not a
        // deliberately disabled payment path
        match (&self.razorpay.key_id, &self.razorpay.key_secret) {
            (Some(_), None) => {
                return Err(AppError::configuration(
                    "RAZORPAY_KEY_ID is set but RAZORPAY_KEY_SECRET is not",
                ))
            }
            (None, Some(_)) => {
                return Err(AppError::configuration(
                    "RAZORPAY_KEY_SECRET is set but RAZORPAY_KEY_ID is not",
                ))
            }
            _ => {}
        }

        if let Some(retry) = &self.razorpay.retry {
            if retry.max_backoff_ms < retry.min_backoff_ms {
                return Err(AppError::configuration(
                    "RAZORPAY_RETRY_MAX_BACKOFF_MS must be >= RAZORPAY_RETRY_MIN_BACKOFF_MS",
                ));
            }
        }

        if self.app.default_gst_rate < Decimal::ZERO
            || self.app.default_gst_rate > Decimal::from(100u32)
        {
            return Err(AppError::configuration(
                "DEFAULT_GST_RATE must be between 0 and 100",
            ));
        }

        Ok(())
    }

    /// Warn operators about disabled payment paths without refusing to start
    pub fn log_startup_warnings(&self) {
        if self.razorpay.key_id.is_none() || self.razorpay.key_secret.is_none() {
            warn!("Razorpay key pair not configured; order, payment and refund operations are disabled");
        }
        if self.razorpay.webhook_secret.is_none() {
            warn!("Razorpay webhook secret not configured; webhook verification is disabled");
        }
    }
}

impl RazorpayConfig {
    /// Minimal config for tests and embedding callers
    pub fn with_credentials(
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
        webhook_secret: Option<String>,
    ) -> Self {
        Self {
            key_id: Some(key_id.into()),
            key_secret: Some(key_secret.into()),
            webhook_secret,
            base_url: "https://api.razorpay.com".to_string(),
            retry: None,
        }
    }

    /// Config with no credentials at all; every network call fails fast
    pub fn unconfigured() -> Self {
        Self {
            key_id: None,
            key_secret: None,
            webhook_secret: None,
            base_url: "https://api.razorpay.com".to_string(),
            retry: None,
        }
    }
}
