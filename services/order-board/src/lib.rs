//! Live Order Board
//!
//! In-memory board of live buy and sell orders with two continuously
//! maintained aggregate views: total quantity per price level for each side.
//!
//! Features:
//! - Full-value duplicate detection on submission
//! - Partial and full cancellation of a price level's aggregated quantity
//! - Exact decimal arithmetic for quantities and prices
//! - One lock over the order set and both ledgers, so snapshots are always
//!   consistent
//! - Internal invariant violations reported separately from rejections
//!
//! ```
//! use order_board::{LiveOrderBoard, Order, OrderSide, SubmissionResult};
//! use rust_decimal::Decimal;
//!
//! let board = LiveOrderBoard::new();
//! let order = Order::new("ord-1", "user-1", Decimal::new(35, 1), Decimal::from(306), OrderSide::Sell);
//! assert_eq!(board.submit_order(order)?, SubmissionResult::Accepted);
//!
//! let summary = board.summary();
//! assert_eq!(summary.sell[0].quantity, Decimal::new(35, 1));
//! # Ok::<(), order_board::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod order;
pub mod status;
pub mod summary;

pub use crate::board::LiveOrderBoard;
pub use crate::config::BoardConfig;
pub use crate::error::{BoardError, BoardResult};
pub use crate::ledger::{LevelChange, PriceLedger};
pub use crate::metrics::{BoardMetrics, MetricsSnapshot};
pub use crate::order::{Order, OrderSide};
pub use crate::status::{CancellationResult, SubmissionResult};
pub use crate::summary::{PriceLevel, SummarySnapshot};
