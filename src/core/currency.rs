use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{AppError, Result};

/// Currencies the checkout accepts, with their minor-unit scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee (100 paise)
    #[default]
    INR,
    /// US Dollar (100 cents)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::INR | Currency::USD => 2,
        }
    }

    /// Converts a caller-facing major-unit amount into integer minor units.
    ///
    /// The scaled value is rounded half-away-from-zero, so `10.005` rupees
    /// become `1001` paise. Non-positive amounts are rejected before any
    /// conversion happens.
    pub fn to_minor_units(&self, amount: Decimal) -> Result<i64> {
        if amount <= Decimal::ZERO {
            return Err(AppError::invalid_amount(format!(
                "amount must be greater than zero, got {}",
                amount
            )));
        }

        let factor = Decimal::from(10u64.pow(self.scale()));
        (amount * factor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(|| {
                AppError::invalid_amount(format!("amount {} is out of range for {}", amount, self))
            })
    }

    /// Converts integer minor units back to a major-unit decimal
    pub fn from_minor_units(&self, minor: i64) -> Decimal {
        Decimal::new(minor, self.scale())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::INR => write!(f, "INR"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Unsupported currency: {}", s)),
        }
    }
}
