use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// Order-creation request sent to the provider.
///
/// `amount` is always integer minor units; `payment_capture = 1` asks the
/// provider to capture authorized payments immediately, so there is no
/// manual capture step anywhere in the checkout flow.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub amount: i64,
    pub currency: Currency,
    pub receipt: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
    pub payment_capture: u8,
}

impl CreateOrderRequest {
    pub fn new(amount: i64, currency: Currency, receipt: String) -> Self {
        Self {
            amount,
            currency,
            receipt,
            notes: BTreeMap::new(),
            payment_capture: 1,
        }
    }
}

/// Provider order entity, returned verbatim to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
    #[serde(default)]
    pub attempts: i32,
    pub notes: Option<serde_json::Value>,
    pub created_at: i64,
}
