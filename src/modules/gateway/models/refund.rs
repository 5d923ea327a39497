use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Refund processing speed exposed to callers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundSpeed {
    #[default]
    Normal,
    /// Instant refund where the payment method supports it; the provider
    /// calls this processing mode "optimum" on the wire
    #[serde(rename = "optimum", alias = "expedited")]
    Expedited,
}

/// Refund-creation request sent to the provider.
///
/// An absent `amount` asks the provider to refund the full captured amount.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    pub speed: RefundSpeed,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<BTreeMap<String, String>>,
}

/// Provider refund entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    pub currency: String,
    pub payment_id: String,
    pub notes: Option<serde_json::Value>,
    pub receipt: Option<String>,
    pub status: String,
    pub speed_requested: Option<String>,
    pub speed_processed: Option<String>,
    pub created_at: i64,
}
