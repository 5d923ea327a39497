use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info};

use crate::core::{AppError, Currency, Result};
use crate::modules::gateway::models::{CreateRefundRequest, Refund, RefundSpeed};
use crate::modules::gateway::services::PaymentProvider;

/// Refund input, amount in caller-facing major units.
///
/// An absent amount requests a full refund of the captured payment.
#[derive(Debug, Clone)]
pub struct RefundInput {
    pub payment_id: String,
    pub amount: Option<Decimal>,
    pub currency: Currency,
    pub speed: RefundSpeed,
    pub notes: Option<BTreeMap<String, String>>,
}

/// Issues full and partial refunds against captured payments.
///
/// Concurrent refunds against the same payment are serialized by the
/// provider; a rejection such as "fully refunded already" surfaces as a
/// provider error for the caller to handle, not a crash.
pub struct RefundService {
    provider: Arc<dyn PaymentProvider>,
}

impl RefundService {
    pub fn new(provider: Arc<dyn PaymentProvider>) -> Self {
        Self { provider }
    }

    pub async fn process_refund(&self, input: RefundInput) -> Result<Refund> {
        if input.payment_id.trim().is_empty() {
            return Err(AppError::MissingPaymentId);
        }

        let amount_minor = input
            .amount
            .map(|amount| input.currency.to_minor_units(amount))
            .transpose()?;

        let request = CreateRefundRequest {
            amount: amount_minor,
            speed: input.speed,
            notes: input.notes,
        };

        info!(
            payment_id = %input.payment_id,
            amount_minor = ?amount_minor,
            speed = ?input.speed,
            "Requesting refund"
        );

        match self.provider.create_refund(&input.payment_id, request).await {
            Ok(refund) => {
                info!(
                    refund_id = %refund.id,
                    payment_id = %refund.payment_id,
                    status = %refund.status,
                    "Refund created"
                );
                Ok(refund)
            }
            Err(e) => {
                error!(payment_id = %input.payment_id, error = %e, "Refund failed");
                Err(e)
            }
        }
    }

    /// Fetch refund status; read-only and safe to repeat
    pub async fn fetch_refund_details(&self, payment_id: &str, refund_id: &str) -> Result<Refund> {
        if payment_id.trim().is_empty() {
            return Err(AppError::MissingPaymentId);
        }

        self.provider.fetch_refund(payment_id, refund_id).await
    }
}
