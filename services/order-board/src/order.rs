//! Order definitions and input validation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("BUY"),
            Self::Sell => f.write_str("SELL"),
        }
    }
}

/// A single participant's request to buy or sell a quantity at a unit price.
///
/// Orders are plain immutable values. Two orders are the same order only when
/// every field matches, so `Eq` and `Hash` cover the whole value rather than
/// just `order_id`. Decimal comparison is numeric: `1.0` and `1.00` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    user_id: String,
    quantity: Decimal,
    price_per_unit: Decimal,
    side: OrderSide,
}

impl Order {
    /// Create an order. No validation happens here; the board decides
    /// whether an order is acceptable when it is submitted.
    pub fn new(
        order_id: impl Into<String>,
        user_id: impl Into<String>,
        quantity: Decimal,
        price_per_unit: Decimal,
        side: OrderSide,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            user_id: user_id.into(),
            quantity,
            price_per_unit,
            side,
        }
    }

    /// Caller-supplied order identity
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Owner of the order
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Order quantity
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Price per unit
    #[must_use]
    pub const fn price_per_unit(&self) -> Decimal {
        self.price_per_unit
    }

    /// Order side
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Quantity must be strictly positive and price must be non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.quantity > Decimal::ZERO && self.price_per_unit >= Decimal::ZERO
    }
}
