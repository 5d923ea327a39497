use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::checkout::models::{CheckoutState, OrderStore};
use crate::modules::gateway::models::WebhookEvent;
use crate::modules::gateway::services::SignatureVerifier;

/// Result of handling a verified webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Event verified and applied to local checkout state
    Processed {
        event: String,
        order_id: Option<String>,
    },
    /// Same event delivered before; nothing was mutated
    Duplicate { event_key: String },
    /// Verified but not applicable (unhandled type or unknown order)
    Ignored { event: String },
}

/// Verifies, deduplicates and applies provider webhook events.
///
/// Verification always happens first; an unverified payload never touches
/// checkout state. Processing is idempotent: redelivery of an event is
/// detected by the provider event id (or a digest of the raw body when the
/// header is missing) and acknowledged without side effects.
pub struct WebhookProcessor {
    verifier: SignatureVerifier,
    orders: Arc<OrderStore>,
    seen_events: Mutex<HashSet<String>>,
}

impl WebhookProcessor {
    pub fn new(verifier: SignatureVerifier, orders: Arc<OrderStore>) -> Self {
        Self {
            verifier,
            orders,
            seen_events: Mutex::new(HashSet::new()),
        }
    }

    /// Process a webhook delivery from its exact raw body bytes.
    ///
    /// `signature` is the value of the provider signature header;
    /// `event_id` is the provider's delivery id header when present.
    pub fn process(
        &self,
        raw_body: &[u8],
        signature: &str,
        event_id: Option<&str>,
    ) -> Result<WebhookOutcome> {
        if !self.verifier.verify_webhook_signature(raw_body, signature) {
            return Err(AppError::unauthorized("webhook signature verification failed"));
        }

        let event: WebhookEvent = serde_json::from_slice(raw_body)?;

        let event_key = match event_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => hex::encode(Sha256::digest(raw_body)),
        };

        {
            let mut seen = self
                .seen_events
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if !seen.insert(event_key.clone()) {
                info!(event = %event.event, event_key = %event_key, "Duplicate webhook delivery");
                return Ok(WebhookOutcome::Duplicate { event_key });
            }
        }

        self.apply(event)
    }

    fn apply(&self, event: WebhookEvent) -> Result<WebhookOutcome> {
        let order_id = event.order_id().map(str::to_string);

        let state = match event.event.as_str() {
            "order.paid" | "payment.captured" => Some(CheckoutState::Paid),
            "payment.failed" => Some(CheckoutState::Failed),
            "refund.processed" => Some(CheckoutState::Refunded),
            _ => None,
        };

        let Some(state) = state else {
            info!(event = %event.event, "Webhook event type not handled");
            return Ok(WebhookOutcome::Ignored { event: event.event });
        };

        let Some(order_id) = order_id else {
            warn!(event = %event.event, "Webhook event carries no order reference");
            return Ok(WebhookOutcome::Ignored { event: event.event });
        };

        if !self.orders.mark(&order_id, state) {
            // Orders created by other instances or before a restart are not
            // in the local mirror; acknowledge so the provider stops
            // redelivering
            info!(event = %event.event, order_id = %order_id, "Webhook for untracked order");
            return Ok(WebhookOutcome::Ignored { event: event.event });
        }

        info!(
            event = %event.event,
            order_id = %order_id,
            state = ?state,
            "Checkout state updated from webhook"
        );

        Ok(WebhookOutcome::Processed {
            event: event.event,
            order_id: Some(order_id),
        })
    }
}
