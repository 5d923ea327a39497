use rust_decimal::Decimal;

use super::super::models::GstBreakdown;
use crate::core::error::{AppError, Result};

/// GstCalculator produces tax breakdowns for checkout amounts.
///
/// Pure arithmetic over `Decimal`; every field of the result is rounded to
/// 2 decimal places.
#[derive(Debug, Clone)]
pub struct GstCalculator {
    default_rate: Decimal,
}

impl GstCalculator {
    pub fn new(default_rate: Decimal) -> Self {
        Self { default_rate }
    }

    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    /// Calculate the GST breakdown for a base amount.
    ///
    /// A `None` rate uses the configured default.
    pub fn calculate(&self, base_amount: Decimal, gst_rate: Option<Decimal>) -> Result<GstBreakdown> {
        let gst_rate = gst_rate.unwrap_or(self.default_rate);
        self.validate_rate(gst_rate)?;

        if base_amount < Decimal::ZERO {
            return Err(AppError::validation("GST base amount cannot be negative"));
        }

        let base_amount = base_amount.round_dp(2);
        let gst_amount = (base_amount * gst_rate / Decimal::from(100u32)).round_dp(2);
        let total_amount = (base_amount + gst_amount).round_dp(2);

        Ok(GstBreakdown {
            base_amount,
            gst_rate,
            gst_amount,
            total_amount,
        })
    }

    /// Validate a GST rate is a percentage between 0 and 100
    pub fn validate_rate(&self, gst_rate: Decimal) -> Result<()> {
        if gst_rate < Decimal::ZERO {
            return Err(AppError::validation("GST rate cannot be negative"));
        }

        if gst_rate > Decimal::from(100u32) {
            return Err(AppError::validation("GST rate cannot exceed 100%"));
        }

        Ok(())
    }
}

impl Default for GstCalculator {
    fn default() -> Self {
        Self::new(Decimal::from(18u32))
    }
}
