//! Read-only views of the board

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated quantity resting at one price on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price per unit
    pub price: Decimal,
    /// Sum of live order quantities at this price
    pub quantity: Decimal,
}

impl PriceLevel {
    /// Create a price level row
    #[must_use]
    pub const fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }
}

impl From<(Decimal, Decimal)> for PriceLevel {
    fn from((price, quantity): (Decimal, Decimal)) -> Self {
        Self { price, quantity }
    }
}

/// Both ledgers captured at one instant.
///
/// Buy levels are ordered by price descending, sell levels ascending. The
/// snapshot owns its rows; later board activity does not affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    /// Buy levels, best (highest) price first
    pub buy: Vec<PriceLevel>,
    /// Sell levels, best (lowest) price first
    pub sell: Vec<PriceLevel>,
    /// Board state version the snapshot was taken at
    pub sequence: u64,
}

impl SummarySnapshot {
    /// No levels on either side
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }

    /// Highest buy level
    #[must_use]
    pub fn best_buy(&self) -> Option<PriceLevel> {
        self.buy.first().copied()
    }

    /// Lowest sell level
    #[must_use]
    pub fn best_sell(&self) -> Option<PriceLevel> {
        self.sell.first().copied()
    }

    /// Total buy quantity across all levels
    #[must_use]
    pub fn total_buy_quantity(&self) -> Decimal {
        self.buy.iter().map(|level| level.quantity).sum()
    }

    /// Total sell quantity across all levels
    #[must_use]
    pub fn total_sell_quantity(&self) -> Decimal {
        self.sell.iter().map(|level| level.quantity).sum()
    }
}
