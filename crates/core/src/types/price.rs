//! Money as a decimal amount plus its currency.
//!
//! Amounts ride through serde as strings (`rust_decimal`'s serde-with-str
//! feature), so `"10.50"` stays `"10.50"` instead of becoming a float.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's major unit: dollars, not cents.
    pub amount: Decimal,
    /// Currency the amount is denominated in.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// A price in an explicit currency.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self { amount, currency_code }
    }

    /// A price in the storefront's default currency.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// A USD price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::usd(Decimal::new(cents, 2))
    }

    /// Zero in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::usd(Decimal::ZERO)
    }
}

/// The currencies the shop knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Symbol prefixed to rendered amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }
}
