//! Error types for the order board
//!
//! These never describe bad input. Rejected submissions and cancellations are
//! reported through [`crate::status`]; a `BoardError` means the board's own
//! bookkeeping reached a state it should not be able to reach, or that the
//! board could not be configured.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::order::OrderSide;

/// Order board error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Adding to a price level overflowed the decimal range or precision
    #[error("{side} level at {price} overflowed adding {quantity}")]
    LedgerOverflow {
        /// Ledger side
        side: OrderSide,
        /// Price level
        price: Decimal,
        /// Quantity being added
        quantity: Decimal,
    },

    /// A live order has no matching price level
    #[error("{side} level at {price} is missing")]
    MissingPriceLevel {
        /// Ledger side
        side: OrderSide,
        /// Price level
        price: Decimal,
    },

    /// Removing a quantity would leave the level below zero
    #[error("{side} level at {price} holds {available}, cannot remove {requested}")]
    NegativeLevelQuantity {
        /// Ledger side
        side: OrderSide,
        /// Price level
        price: Decimal,
        /// Quantity currently aggregated at the level
        available: Decimal,
        /// Quantity the cancellation tried to remove
        requested: Decimal,
    },

    /// The quantity left after a removal needs more digits than a decimal holds
    #[error("{side} level at {price} holds {available}, removing {requested} would round")]
    InexactLevelQuantity {
        /// Ledger side
        side: OrderSide,
        /// Price level
        price: Decimal,
        /// Quantity currently aggregated at the level
        available: Decimal,
        /// Quantity the cancellation tried to remove
        requested: Decimal,
    },

    /// A stored level holds a zero or negative quantity
    #[error("{side} level at {price} holds non-positive quantity {quantity}")]
    CorruptPriceLevel {
        /// Ledger side
        side: OrderSide,
        /// Price level
        price: Decimal,
        /// Stored quantity
        quantity: Decimal,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// What went wrong
        message: String,
    },
}

impl BoardError {
    /// True for errors raised by broken ledger bookkeeping rather than setup
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }
}

impl From<config::ConfigError> for BoardError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

/// Type alias for board results
pub type BoardResult<T> = Result<T, BoardError>;
