use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::config::RazorpayConfig;
use crate::core::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Verifies provider signatures on checkout callbacks and webhooks.
///
/// This is the sole trust boundary between "the browser claims a payment
/// happened" and "the provider attests a payment happened". Every
/// downstream state change is gated on a `true` result from one of these
/// checks.
#[derive(Clone)]
pub struct SignatureVerifier {
    key_secret: Option<String>,
    webhook_secret: Option<String>,
}

impl SignatureVerifier {
    pub fn new(key_secret: Option<String>, webhook_secret: Option<String>) -> Self {
        Self {
            key_secret,
            webhook_secret,
        }
    }

    pub fn from_config(config: &RazorpayConfig) -> Self {
        Self::new(config.key_secret.clone(), config.webhook_secret.clone())
    }

    /// Verify the signature the checkout widget hands back after payment.
    ///
    /// The signed message is `"{order_id}|{payment_id}"`, keyed by the key
    /// secret. A mismatch is a `false` return, never an error; errors mean
    /// the call itself was malformed or the adapter lacks credentials.
    pub fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<bool> {
        if order_id.is_empty() || payment_id.is_empty() || signature.is_empty() {
            return Err(AppError::missing_parameters(
                "order_id, payment_id and signature are all required",
            ));
        }

        let secret = self.key_secret.as_deref().ok_or_else(|| {
            AppError::not_configured("Razorpay key secret is required for signature verification")
        })?;

        let message = format!("{}|{}", order_id, payment_id);
        Ok(hmac_matches(secret, message.as_bytes(), signature))
    }

    /// Verify a webhook against the exact raw body bytes.
    ///
    /// The HMAC must be computed over the bytes as received; re-serializing
    /// the JSON can reorder keys and invalidate a genuine signature. An
    /// unconfigured webhook secret disables verification and every payload
    /// is reported unverified.
    pub fn verify_webhook_signature(&self, raw_body: &[u8], signature: &str) -> bool {
        let Some(secret) = self.webhook_secret.as_deref() else {
            warn!("Webhook received but RAZORPAY_WEBHOOK_SECRET is not configured; rejecting");
            return false;
        };

        if signature.is_empty() {
            return false;
        }

        hmac_matches(secret, raw_body, signature)
    }
}

/// Constant-time comparison of an expected HMAC-SHA256 against a hex
/// signature. Undecodable hex can never match.
fn hmac_matches(secret: &str, message: &[u8], signature_hex: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(message);

    match hex::decode(signature_hex.trim()) {
        Ok(signature) => mac.verify_slice(&signature).is_ok(),
        Err(_) => false,
    }
}
