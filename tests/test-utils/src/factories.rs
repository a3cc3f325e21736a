//! Factory patterns for generating test orders

use fake::{Fake, Faker};
use order_board::{Order, OrderSide};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

/// Factory for creating orders with unique ids and overridable defaults
pub struct OrderFactory {
    prefix: String,
    next_id: AtomicU64,
    default_user: String,
    default_side: OrderSide,
}

impl Default for OrderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFactory {
    pub fn new() -> Self {
        Self {
            prefix: "ORD".to_string(),
            next_id: AtomicU64::new(1),
            default_user: "user-1".to_string(),
            default_side: OrderSide::Buy,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.default_user = user.into();
        self
    }

    pub fn with_side(mut self, side: OrderSide) -> Self {
        self.default_side = side;
        self
    }

    /// Next unique order id, e.g. `ORD-000001`
    pub fn next_order_id(&self) -> String {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{}-{:06}", self.prefix, id)
    }

    /// Order on the default side
    pub fn build(&self, quantity: Decimal, price: Decimal) -> Order {
        self.build_side(self.default_side, quantity, price)
    }

    pub fn build_side(&self, side: OrderSide, quantity: Decimal, price: Decimal) -> Order {
        Order::new(
            self.next_order_id(),
            self.default_user.clone(),
            quantity,
            price,
            side,
        )
    }

    pub fn buy(&self, quantity: Decimal, price: Decimal) -> Order {
        self.build_side(OrderSide::Buy, quantity, price)
    }

    pub fn sell(&self, quantity: Decimal, price: Decimal) -> Order {
        self.build_side(OrderSide::Sell, quantity, price)
    }

    /// Random valid order: either side, quantity with up to two decimal
    /// places, whole price inside `price_range`
    pub fn build_random(&self, price_range: (i64, i64)) -> Order {
        let side = if Faker.fake::<bool>() { OrderSide::Buy } else { OrderSide::Sell };
        let quantity = Decimal::new((1..100_000i64).fake::<i64>(), 2);
        let price = Decimal::from((price_range.0..price_range.1).fake::<i64>());
        self.build_side(side, quantity, price)
    }

    pub fn build_batch(&self, count: usize, price_range: (i64, i64)) -> Vec<Order> {
        (0..count).map(|_| self.build_random(price_range)).collect()
    }
}

/// The four sell orders from the worked example: 3.5@306, 1.2@310, 1.5@307,
/// 2@306, one per user
pub fn example_sell_orders() -> Vec<Order> {
    [
        ("user1", Decimal::new(35, 1), 306),
        ("user2", Decimal::new(12, 1), 310),
        ("user3", Decimal::new(15, 1), 307),
        ("user4", Decimal::from(2), 306),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (user, quantity, price))| {
        Order::new(
            format!("SELL-{}", i + 1),
            user,
            quantity,
            Decimal::from(price),
            OrderSide::Sell,
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let factory = OrderFactory::new().with_prefix("T");
        let a = factory.buy(Decimal::ONE, Decimal::TEN);
        let b = factory.buy(Decimal::ONE, Decimal::TEN);
        assert_ne!(a, b);
        assert_eq!(a.order_id(), "T-000001");
    }

    #[test]
    fn test_random_orders_are_valid() {
        let factory = OrderFactory::new();
        for order in factory.build_batch(200, (1, 50)) {
            assert!(order.is_valid());
            assert!(order.price_per_unit() < Decimal::from(50));
        }
    }
}
