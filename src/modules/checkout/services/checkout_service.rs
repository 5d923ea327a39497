use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use super::super::models::{CheckoutState, OrderStore, TrackedOrder};
use crate::core::{AppError, Currency, Result};
use crate::modules::gateway::models::{CreateOrderRequest, Order, Payment};
use crate::modules::gateway::services::{PaymentProvider, SignatureVerifier};
use crate::modules::invoices::{GstBreakdown, GstCalculator};
use crate::modules::videos;

/// Order intake input, amounts in caller-facing major units
#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub amount: Decimal,
    pub currency: Currency,
    pub receipt: Option<String>,
    pub notes: BTreeMap<String, String>,
    pub video_url: Option<String>,
}

/// Everything the browser widget needs to collect a payment
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOrder {
    pub order: Order,
    pub key_id: String,
    pub gst: GstBreakdown,
}

/// Order intake service: validates, converts to minor units, and hands the
/// order to the injected payment provider.
pub struct CheckoutService {
    provider: Arc<dyn PaymentProvider>,
    verifier: SignatureVerifier,
    orders: Arc<OrderStore>,
    gst: GstCalculator,
}

impl CheckoutService {
    pub fn new(
        provider: Arc<dyn PaymentProvider>,
        verifier: SignatureVerifier,
        orders: Arc<OrderStore>,
        gst: GstCalculator,
    ) -> Self {
        Self {
            provider,
            verifier,
            orders,
            gst,
        }
    }

    /// Create a provider order for a promotion purchase.
    ///
    /// The amount must be positive; conversion to minor units rounds the
    /// scaled value half-away-from-zero. When a video URL is supplied it is
    /// validated and its id is recorded in the order notes so fulfilment
    /// knows which video the payment promotes. All validation happens
    /// before any provider call.
    pub async fn create_order(&self, input: CreateOrderInput) -> Result<CheckoutOrder> {
        let amount_minor = input.currency.to_minor_units(input.amount)?;

        let mut notes = input.notes;
        if let Some(video_url) = &input.video_url {
            let video_id = videos::extract_video_id(video_url).ok_or_else(|| {
                AppError::validation(format!("not a recognized YouTube URL: {}", video_url))
            })?;
            notes.insert("video_id".to_string(), video_id);
            notes.insert("video_url".to_string(), video_url.trim().to_string());
        }

        let receipt = input
            .receipt
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| format!("rcpt_{}", Uuid::new_v4().simple()));

        let mut request = CreateOrderRequest::new(amount_minor, input.currency, receipt);
        request.notes = notes;

        info!(
            provider = %self.provider.name(),
            amount_minor = amount_minor,
            currency = %input.currency,
            receipt = %request.receipt,
            "Creating payment order"
        );

        let order = match self.provider.create_order(request).await {
            Ok(order) => {
                info!(order_id = %order.id, status = %order.status, "Order created");
                order
            }
            Err(e) => {
                error!(error = %e, "Order creation failed");
                return Err(e);
            }
        };

        self.orders.track(&order);

        let gst = self.gst.calculate(input.amount, None)?;
        let key_id = self.provider.key_id()?.to_string();

        Ok(CheckoutOrder { order, key_id, gst })
    }

    /// Verify the signature returned by the checkout widget.
    ///
    /// Returns the verification boolean; a `true` result transitions the
    /// tracked order to paid. Fulfilment must be gated on this result.
    pub fn verify_payment(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<bool> {
        let valid = self
            .verifier
            .verify_payment_signature(order_id, payment_id, signature)?;

        if valid {
            info!(order_id = %order_id, payment_id = %payment_id, "Payment signature verified");
            self.orders.mark(order_id, CheckoutState::Paid);
        } else {
            info!(order_id = %order_id, payment_id = %payment_id, "Payment signature rejected");
        }

        Ok(valid)
    }

    pub async fn fetch_order(&self, order_id: &str) -> Result<Order> {
        self.provider.fetch_order(order_id).await
    }

    pub async fn fetch_payment(&self, payment_id: &str) -> Result<Payment> {
        self.provider.fetch_payment(payment_id).await
    }

    /// Public key id for widget initialization
    pub fn key_id(&self) -> Result<String> {
        Ok(self.provider.key_id()?.to_string())
    }

    pub fn order_state(&self, order_id: &str) -> Option<CheckoutState> {
        self.orders.state(order_id)
    }

    /// Local checkout-funnel view of an order, when this instance created it
    pub fn tracked_order(&self, order_id: &str) -> Option<TrackedOrder> {
        self.orders.get(order_id)
    }
}
