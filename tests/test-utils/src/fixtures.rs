//! Test fixtures for common board setups

use order_board::{BoardConfig, LiveOrderBoard, Order, SubmissionResult};
use rstest::*;

use crate::factories::{OrderFactory, example_sell_orders};

/// Empty board with the default configuration
#[fixture]
pub fn board() -> LiveOrderBoard {
    LiveOrderBoard::with_config(BoardConfig::default().with_name("test-board"))
}

/// Fresh order factory
#[fixture]
pub fn factory() -> OrderFactory {
    OrderFactory::new()
}

/// Board already holding the four worked-example sell orders
#[fixture]
pub fn example_sell_board() -> (LiveOrderBoard, Vec<Order>) {
    let board = LiveOrderBoard::with_config(BoardConfig::default().with_name("example-sell"));
    let orders = example_sell_orders();
    for order in &orders {
        let result = board.submit_order(order.clone());
        assert_eq!(result, Ok(SubmissionResult::Accepted));
    }
    (board, orders)
}
