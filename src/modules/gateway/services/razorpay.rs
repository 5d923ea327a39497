use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::super::models::{CreateOrderRequest, CreateRefundRequest, Order, Payment, Refund};
use super::provider::PaymentProvider;
use crate::config::RazorpayConfig;
use crate::core::{AppError, Result};

/// Razorpay REST client.
///
/// Holds its configuration explicitly so callers construct and inject it;
/// there is no module-level instance. Missing credentials do not prevent
/// construction, but every network operation fails fast until both halves
/// of the key pair are configured.
pub struct RazorpayClient {
    http: ClientWithMiddleware,
    credentials: Option<Credentials>,
    base_url: String,
}

#[derive(Clone)]
struct Credentials {
    key_id: String,
    key_secret: String,
}

/// Error body shape the provider returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    code: String,
    description: String,
}

impl RazorpayClient {
    /// Build a client from configuration.
    ///
    /// A retry policy is applied only when the configuration opts in;
    /// otherwise a failed call is reported immediately and retrying is the
    /// caller's decision.
    pub fn from_config(config: &RazorpayConfig) -> Self {
        let mut builder = ClientBuilder::new(reqwest::Client::new());

        if let Some(retry) = &config.retry {
            let policy = ExponentialBackoff::builder()
                .retry_bounds(
                    Duration::from_millis(retry.min_backoff_ms),
                    Duration::from_millis(retry.max_backoff_ms),
                )
                .build_with_max_retries(retry.max_attempts);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(policy));
        }

        let credentials = match (&config.key_id, &config.key_secret) {
            (Some(key_id), Some(key_secret)) => Some(Credentials {
                key_id: key_id.clone(),
                key_secret: key_secret.clone(),
            }),
            _ => None,
        };

        Self {
            http: builder.build(),
            credentials,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or_else(|| {
            AppError::not_configured("Razorpay key id and key secret are required")
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let credentials = self.credentials()?;
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .basic_auth(&credentials.key_id, Some(&credentials.key_secret))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let credentials = self.credentials()?;
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(&credentials.key_id, Some(&credentials.key_secret))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::provider(format!("Failed to read Razorpay response: {}", e)))?;

        if !status.is_success() {
            // Surface the provider's own description when the body carries
            // one; otherwise keep the raw body
            let message = match serde_json::from_str::<ProviderErrorBody>(&body) {
                Ok(parsed) if !parsed.error.code.is_empty() => {
                    format!("{}: {}", parsed.error.code, parsed.error.description)
                }
                Ok(parsed) => parsed.error.description,
                Err(_) => format!("HTTP {} ({})", status.as_u16(), body),
            };
            return Err(AppError::provider(message));
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::provider(format!("Failed to parse Razorpay response: {}", e)))
    }
}

fn transport_error(e: reqwest_middleware::Error) -> AppError {
    match e {
        reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => {
            AppError::provider(format!("Razorpay gateway timeout: {}", e))
        }
        reqwest_middleware::Error::Reqwest(e) if e.is_connect() => {
            AppError::provider(format!("Razorpay gateway unreachable: {}", e))
        }
        e => AppError::provider(format!("Razorpay request failed: {}", e)),
    }
}

#[async_trait]
impl PaymentProvider for RazorpayClient {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order> {
        self.post("/v1/orders", &request).await
    }

    async fn fetch_order(&self, order_id: &str) -> Result<Order> {
        self.get(&format!("/v1/orders/{}", order_id)).await
    }

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment> {
        self.get(&format!("/v1/payments/{}", payment_id)).await
    }

    async fn create_refund(
        &self,
        payment_id: &str,
        request: CreateRefundRequest,
    ) -> Result<Refund> {
        self.post(&format!("/v1/payments/{}/refund", payment_id), &request)
            .await
    }

    async fn fetch_refund(&self, payment_id: &str, refund_id: &str) -> Result<Refund> {
        self.get(&format!("/v1/payments/{}/refunds/{}", payment_id, refund_id))
            .await
    }

    fn key_id(&self) -> Result<&str> {
        Ok(&self.credentials()?.key_id)
    }

    fn name(&self) -> &str {
        "razorpay"
    }
}
