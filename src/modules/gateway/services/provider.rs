use async_trait::async_trait;

use super::super::models::{CreateOrderRequest, CreateRefundRequest, Order, Payment, Refund};
use crate::core::Result;

/// Payment provider seam for order, payment and refund operations.
///
/// Production wires in [`super::RazorpayClient`]; tests substitute a fake so
/// checkout and refund logic can be exercised without a network.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an order at the provider and return its entity verbatim
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order>;

    /// Fetch an order by its provider id
    async fn fetch_order(&self, order_id: &str) -> Result<Order>;

    /// Fetch a payment by its provider id
    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment>;

    /// Create a full or partial refund against a captured payment
    async fn create_refund(&self, payment_id: &str, request: CreateRefundRequest)
        -> Result<Refund>;

    /// Fetch refund status; idempotent read with no side effects
    async fn fetch_refund(&self, payment_id: &str, refund_id: &str) -> Result<Refund>;

    /// Public key id the browser widget initializes with
    fn key_id(&self) -> Result<&str>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
