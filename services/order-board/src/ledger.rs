//! Per-side price ledger
//!
//! Maps a price to the quantity aggregated across all live orders of one side
//! at that price. Levels exist only while they hold a positive quantity: the
//! first order at a price creates the level and cancelling the last one
//! deletes it.
//!
//! Both mutators check everything they need before touching the map, so an
//! `Err` always leaves the ledger exactly as it was.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{BoardError, BoardResult};
use crate::order::OrderSide;
use crate::summary::PriceLevel;

/// What a ledger update did to its price level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChange {
    /// First quantity at a new price
    Created,
    /// Quantity added to an existing level
    Increased,
    /// Quantity removed, level still holds some
    Decreased,
    /// Level emptied and deleted
    Removed,
}

/// Aggregated quantity per price for one side of the board
#[derive(Debug, Clone)]
pub struct PriceLedger {
    side: OrderSide,
    levels: BTreeMap<Decimal, Decimal>,
}

impl PriceLedger {
    /// Create an empty ledger for `side`
    #[must_use]
    pub const fn new(side: OrderSide) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Side this ledger aggregates
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Add `quantity` at `price`, creating the level if needed.
    ///
    /// A sum that cannot be held exactly is an overflow rather than a rounding.
    pub fn add(&mut self, price: Decimal, quantity: Decimal) -> BoardResult<LevelChange> {
        match self.levels.entry(price) {
            Entry::Occupied(mut entry) => {
                let current = *entry.get();
                if current <= Decimal::ZERO {
                    return Err(BoardError::CorruptPriceLevel {
                        side: self.side,
                        price,
                        quantity: current,
                    });
                }
                let total = exact_sum(current, quantity).ok_or(BoardError::LedgerOverflow {
                    side: self.side,
                    price,
                    quantity,
                })?;
                entry.insert(total);
                Ok(LevelChange::Increased)
            }
            Entry::Vacant(entry) => {
                entry.insert(quantity);
                Ok(LevelChange::Created)
            }
        }
    }

    /// Remove `quantity` from the level at `price`.
    ///
    /// An exact match deletes the level. Removing more than the level holds,
    /// or removing from a level that does not exist, means the ledger and the
    /// order set have drifted apart and is reported as an error. So is a
    /// remainder that could only be stored rounded.
    pub fn remove(&mut self, price: Decimal, quantity: Decimal) -> BoardResult<LevelChange> {
        let current = *self.levels.get(&price).ok_or(BoardError::MissingPriceLevel {
            side: self.side,
            price,
        })?;

        match current.cmp(&quantity) {
            Ordering::Equal => {
                self.levels.remove(&price);
                Ok(LevelChange::Removed)
            }
            Ordering::Greater => {
                let remaining = exact_difference(current, quantity).ok_or(
                    BoardError::InexactLevelQuantity {
                        side: self.side,
                        price,
                        available: current,
                        requested: quantity,
                    },
                )?;
                self.levels.insert(price, remaining);
                Ok(LevelChange::Decreased)
            }
            Ordering::Less => Err(BoardError::NegativeLevelQuantity {
                side: self.side,
                price,
                available: current,
                requested: quantity,
            }),
        }
    }

    /// Quantity at `price`, if the level exists
    #[must_use]
    pub fn get(&self, price: Decimal) -> Option<Decimal> {
        self.levels.get(&price).copied()
    }

    /// Number of price levels
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// No price levels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sum over all levels
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.levels.values().copied().sum()
    }

    /// Levels from lowest to highest price
    pub fn ascending(&self) -> impl Iterator<Item = PriceLevel> + '_ {
        self.levels.iter().map(|(&price, &quantity)| PriceLevel::new(price, quantity))
    }

    /// Levels from highest to lowest price
    pub fn descending(&self) -> impl Iterator<Item = PriceLevel> + '_ {
        self.levels
            .iter()
            .rev()
            .map(|(&price, &quantity)| PriceLevel::new(price, quantity))
    }

    /// Levels in best-first order for this side: highest price first for
    /// buys, lowest first for sells. At most `limit` rows.
    #[must_use]
    pub fn best_first(&self, limit: usize) -> Vec<PriceLevel> {
        match self.side {
            OrderSide::Buy => self.descending().take(limit).collect(),
            OrderSide::Sell => self.ascending().take(limit).collect(),
        }
    }
}

// Decimal arithmetic rounds instead of failing once a result needs more than
// 28 digits, and it only ever lowers the result scale below the operands' when
// it rounds. Normalized operands keep that check from tripping on trailing zeros.
fn exact_sum(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());
    let sum = lhs.checked_add(rhs)?;
    (sum.scale() >= lhs.scale().max(rhs.scale())).then_some(sum)
}

fn exact_difference(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());
    let difference = lhs.checked_sub(rhs)?;
    (difference.scale() >= lhs.scale().max(rhs.scale())).then_some(difference)
}
