//! The live order board
//!
//! The board keeps three structures in one consistency domain: the set of
//! live orders and one [`PriceLedger`] per side. They live together in a
//! single [`BoardState`] behind one `RwLock`, so every submit and cancel is
//! serialized against every other, and every read sees the set and both
//! ledgers at the same instant.
//!
//! Invariant: for each side and each price level present in that side's
//! ledger, the level quantity equals the sum of the quantities of the live
//! orders of that side at that price, and is strictly positive.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use rustc_hash::{FxBuildHasher, FxHashSet};
use tracing::{debug, error, info, warn};

use crate::config::BoardConfig;
use crate::error::BoardResult;
use crate::ledger::{LevelChange, PriceLedger};
use crate::metrics::{BoardMetrics, MetricsSnapshot};
use crate::order::{Order, OrderSide};
use crate::status::{CancellationResult, SubmissionResult};
use crate::summary::SummarySnapshot;

/// Everything guarded by the board lock
#[derive(Debug)]
struct BoardState {
    orders: FxHashSet<Order>,
    buy: PriceLedger,
    sell: PriceLedger,
    /// Bumped on every accepted submission or cancellation
    sequence: u64,
}

impl BoardState {
    fn new(order_capacity: usize) -> Self {
        Self {
            orders: FxHashSet::with_capacity_and_hasher(order_capacity, FxBuildHasher),
            buy: PriceLedger::new(OrderSide::Buy),
            sell: PriceLedger::new(OrderSide::Sell),
            sequence: 0,
        }
    }

    fn ledger(&self, side: OrderSide) -> &PriceLedger {
        match side {
            OrderSide::Buy => &self.buy,
            OrderSide::Sell => &self.sell,
        }
    }

    fn ledger_mut(&mut self, side: OrderSide) -> &mut PriceLedger {
        match side {
            OrderSide::Buy => &mut self.buy,
            OrderSide::Sell => &mut self.sell,
        }
    }

    fn snapshot(&self, levels: usize) -> SummarySnapshot {
        SummarySnapshot {
            buy: self.buy.best_first(levels),
            sell: self.sell.best_first(levels),
            sequence: self.sequence,
        }
    }
}

/// Live order board
///
/// Construct as many boards as needed; each owns its own state. Share one
/// across threads with `Arc<LiveOrderBoard>`.
#[derive(Debug)]
pub struct LiveOrderBoard {
    config: BoardConfig,
    state: RwLock<BoardState>,
    metrics: BoardMetrics,
}

impl Default for LiveOrderBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveOrderBoard {
    /// Create a board with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create a board from `config`
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        info!(
            board = %config.name,
            order_capacity = config.order_capacity,
            "Initializing live order board"
        );
        Self {
            state: RwLock::new(BoardState::new(config.order_capacity)),
            config,
            metrics: BoardMetrics::new(),
        }
    }

    /// Board configuration
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Submit an order.
    ///
    /// Invalid and duplicate orders come back as `Ok` rejections and leave the
    /// board untouched. `Err` is reserved for ledger invariant violations.
    pub fn submit_order(&self, order: Order) -> BoardResult<SubmissionResult> {
        let outcome = self.apply_submission(&order);
        match &outcome {
            Ok(SubmissionResult::Accepted) => debug!(
                board = %self.config.name,
                order_id = order.order_id(),
                side = %order.side(),
                price = %order.price_per_unit(),
                quantity = %order.quantity(),
                "Order submitted"
            ),
            Ok(rejection) => warn!(
                board = %self.config.name,
                order_id = order.order_id(),
                reason = ?rejection,
                "Order submission rejected"
            ),
            Err(err) => {
                self.metrics.record_internal_error();
                error!(
                    board = %self.config.name,
                    order_id = order.order_id(),
                    error = %err,
                    "Ledger invariant violated during submission"
                );
            }
        }
        if let Ok(result) = &outcome {
            self.metrics.record_submission(*result);
        }
        outcome
    }

    fn apply_submission(&self, order: &Order) -> BoardResult<SubmissionResult> {
        if !order.is_valid() {
            return Ok(SubmissionResult::RejectedInvalid);
        }

        let mut state = self.state.write();
        if state.orders.contains(order) {
            return Ok(SubmissionResult::RejectedDuplicate);
        }

        // The ledger either creates or increments the level, or fails without
        // changing anything; only then does the order join the set.
        let change = state
            .ledger_mut(order.side())
            .add(order.price_per_unit(), order.quantity())?;
        debug_assert!(matches!(change, LevelChange::Created | LevelChange::Increased));

        state.orders.insert(order.clone());
        state.sequence += 1;
        Ok(SubmissionResult::Accepted)
    }

    /// Cancel a live order matched by full value.
    ///
    /// An order that is not live comes back as an `Ok` rejection. `Err` means
    /// the ledger no longer agrees with the order set.
    pub fn cancel_order(&self, order: &Order) -> BoardResult<CancellationResult> {
        let outcome = self.apply_cancellation(order);
        match &outcome {
            Ok(CancellationResult::Accepted) => debug!(
                board = %self.config.name,
                order_id = order.order_id(),
                side = %order.side(),
                price = %order.price_per_unit(),
                quantity = %order.quantity(),
                "Order cancelled"
            ),
            Ok(CancellationResult::RejectedNotFound) => warn!(
                board = %self.config.name,
                order_id = order.order_id(),
                "Order cancellation rejected, order not live"
            ),
            Err(err) => {
                self.metrics.record_internal_error();
                error!(
                    board = %self.config.name,
                    order_id = order.order_id(),
                    error = %err,
                    "Ledger invariant violated during cancellation"
                );
            }
        }
        if let Ok(result) = &outcome {
            self.metrics.record_cancellation(*result);
        }
        outcome
    }

    fn apply_cancellation(&self, order: &Order) -> BoardResult<CancellationResult> {
        let mut state = self.state.write();
        if !state.orders.contains(order) {
            return Ok(CancellationResult::RejectedNotFound);
        }

        state
            .ledger_mut(order.side())
            .remove(order.price_per_unit(), order.quantity())?;

        state.orders.remove(order);
        state.sequence += 1;
        Ok(CancellationResult::Accepted)
    }

    /// Both ledgers at one instant: buys highest price first, sells lowest
    /// price first.
    #[must_use]
    pub fn summary(&self) -> SummarySnapshot {
        self.state.read().snapshot(usize::MAX)
    }

    /// Like [`summary`](Self::summary) but limited to the best `levels` rows
    /// per side
    #[must_use]
    pub fn depth(&self, levels: usize) -> SummarySnapshot {
        self.state.read().snapshot(levels)
    }

    /// Depth limited to the configured `max_depth_levels`
    #[must_use]
    pub fn depth_default(&self) -> SummarySnapshot {
        self.depth(self.config.max_depth_levels)
    }

    /// Copy of every live order, sorted for stable output
    #[must_use]
    pub fn live_orders(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.state.read().orders.iter().cloned().collect();
        orders.sort_by(|a, b| {
            a.order_id()
                .cmp(b.order_id())
                .then_with(|| a.user_id().cmp(b.user_id()))
                .then_with(|| a.side().cmp(&b.side()))
                .then_with(|| a.price_per_unit().cmp(&b.price_per_unit()))
                .then_with(|| a.quantity().cmp(&b.quantity()))
        });
        orders
    }

    /// Whether an order with exactly this value is live
    #[must_use]
    pub fn contains(&self, order: &Order) -> bool {
        self.state.read().orders.contains(order)
    }

    /// Number of live orders
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().orders.len()
    }

    /// No live orders
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().orders.is_empty()
    }

    /// Aggregated quantity at one price on one side
    #[must_use]
    pub fn level_quantity(&self, side: OrderSide, price: Decimal) -> Option<Decimal> {
        self.state.read().ledger(side).get(price)
    }

    /// Current operation counters
    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
