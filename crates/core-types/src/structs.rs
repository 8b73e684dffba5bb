use crate::enums::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-exchange balance snapshot: quote currency available for buying and
/// base asset available for selling. Both are non-negative at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFunds {
    /// Quote-currency balance (e.g., EUR).
    pub quote: Decimal,
    /// Base-asset balance (e.g., BTC).
    pub base: Decimal,
}

impl AvailableFunds {
    pub fn new(quote: Decimal, base: Decimal) -> Self {
        Self { quote, base }
    }
}

/// A single resting order as it appears in an exchange snapshot.
///
/// `side` and `kind` are carried as free-form source tags ("Buy"/"Sell",
/// "Limit", ...); the engine only reads `amount` and `price`, and only
/// treats the order as eligible when both are strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub time: DateTime<Utc>,
    pub side: String,
    pub kind: String,
    /// Order size in base-asset units.
    pub amount: Decimal,
    /// Price in quote currency per base unit.
    pub price: Decimal,
}

/// The two sides of one exchange's book. No sortedness is assumed; the
/// planner imposes its own execution-priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

/// One venue: the atomic unit of capital and inventory isolation. Funds on
/// exchange A can never satisfy a fill attributed to exchange B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub available_funds: AvailableFunds,
    pub order_book: OrderBook,
}

/// One fill line of an execution plan: a price level partially or fully
/// consumed on a single exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOrder {
    pub exchange_id: String,
    pub side: Side,
    pub price: Decimal,
    /// Filled quantity in base-asset units, an exact multiple of the step size.
    pub quantity: Decimal,
    /// Quote-currency value of the fill, truncated to internal precision.
    pub notional: Decimal,
}

/// Resulting balances of one exchange after applying every fill assigned
/// to it. Emitted for every input exchange, used or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTradeBalance {
    pub exchange_id: String,
    pub quote: Decimal,
    pub base: Decimal,
}

/// The complete output of one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub side: Side,
    pub requested: Decimal,
    pub filled: Decimal,
    /// `requested - filled`; zero when liquidity and balances sufficed.
    pub shortfall: Decimal,
    pub weighted_average_price: Decimal,
    pub total_notional: Decimal,
    /// Fill lines in the order they were assigned.
    pub orders: Vec<ExecutionOrder>,
    /// One entry per input exchange, in input order.
    pub post_trade_balances: Vec<PostTradeBalance>,
}
