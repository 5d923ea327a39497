use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax breakdown for a checkout amount. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub base_amount: Decimal,
    /// Rate in percent (18 means 18%)
    pub gst_rate: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
}
