//! # Planner Crate
//!
//! The allocation engine: a pure function that turns a snapshot of several
//! exchanges' order books and balances into a cross-venue execution plan
//! for one BUY or SELL request.
//!
//! ## Architectural Principles
//!
//! - **Pure computation:** `compute_plan` performs no I/O, holds no state
//!   between calls, and never mutates its input. Running balances are a
//!   private copy owned by the single call activation, so concurrent
//!   invocations for independent requests are safe by construction.
//! - **Per-exchange isolation:** funds and inventory on one exchange can
//!   never subsidize a fill attributed to another. The greedy loop enforces
//!   the capacity constraint against the running balance of the level's
//!   own exchange on every iteration.
//! - **Conservative quantization:** every quantity is floored to the
//!   base-asset step and every notional truncated toward zero, so the plan
//!   never over-claims against a balance, a level size, or the instrument's
//!   precision.
//!
//! ## Public API
//!
//! - `compute_plan`: the single entry point.
//! - `precision`: the fixed-point step/rounding helpers.
//! - `PlannerError`: the validation failures this crate can raise.

use core_types::{Exchange, ExecutionOrder, ExecutionPlan, PostTradeBalance, Side};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub mod error;
pub mod precision;

// Re-export the key components to provide a clean, public-facing API.
pub use error::PlannerError;

/// A transient consumption unit: one resting order's (price, size) tagged
/// with its owning exchange. Built fresh per call and discarded after the
/// fill loop; one source order yields exactly one level, with no depth
/// aggregation across orders at the same price.
#[derive(Debug, Clone, Copy)]
struct PriceLevel<'a> {
    exchange_id: &'a str,
    price: Decimal,
    size: Decimal,
}

/// Running copy of one exchange's balances, mutated as fills are assigned.
#[derive(Debug, Clone, Copy)]
struct RunningBalance {
    quote: Decimal,
    base: Decimal,
}

/// Computes the execution plan for a single request against an immutable
/// snapshot.
///
/// Merges the relevant side of every exchange's book into one virtual book
/// ordered by execution priority (cheapest ask first for BUY, highest bid
/// first for SELL, ties broken by larger size), then greedily consumes
/// levels until the requested quantity is satisfied or liquidity runs out.
///
/// Insufficient liquidity is not an error: the plan comes back with a
/// non-zero `shortfall`. The only failure is a non-positive requested
/// quantity, rejected before any processing.
pub fn compute_plan(
    exchanges: &[Exchange],
    side: Side,
    requested: Decimal,
) -> Result<ExecutionPlan, PlannerError> {
    if requested <= Decimal::ZERO {
        return Err(PlannerError::NonPositiveQuantity(requested));
    }

    // Seed the running balances from the snapshot. Keyed by exchange id; a
    // duplicated id shares one pool, seeded from the last entry's funds
    // rather than double-counting capital.
    let mut balances: HashMap<&str, RunningBalance> = exchanges
        .iter()
        .map(|exchange| {
            (
                exchange.id.as_str(),
                RunningBalance {
                    quote: exchange.available_funds.quote,
                    base: exchange.available_funds.base,
                },
            )
        })
        .collect();

    let levels = sorted_levels(exchanges, side);

    let mut orders: Vec<ExecutionOrder> = Vec::new();
    let mut remaining = requested;
    let mut filled = Decimal::ZERO;
    let mut notional = Decimal::ZERO;

    for level in levels {
        if remaining <= Decimal::ZERO {
            break;
        }

        // Balances were seeded from the same exchange list the levels came
        // from, so the lookup cannot miss.
        let Some(balance) = balances.get_mut(level.exchange_id) else {
            continue;
        };

        // The most this level can fill: bounded by what is still wanted,
        // by the level's own size, and by the exchange's capacity (quote
        // funds for BUY, base inventory for SELL).
        let capacity = match side {
            Side::Buy => balance.quote / level.price,
            Side::Sell => balance.base,
        };
        let quantity = precision::floor_to_step(remaining.min(level.size).min(capacity));

        // A capacity-exhausted exchange must not shadow later levels on
        // other venues: skip, never terminate.
        if quantity <= Decimal::ZERO {
            continue;
        }

        let line_notional = precision::truncate_notional(level.price * quantity);

        orders.push(ExecutionOrder {
            exchange_id: level.exchange_id.to_string(),
            side,
            price: level.price,
            quantity,
            notional: line_notional,
        });

        match side {
            Side::Buy => {
                balance.quote -= line_notional;
                balance.base += quantity;
            }
            Side::Sell => {
                balance.quote += line_notional;
                balance.base -= quantity;
            }
        }

        remaining -= quantity;
        filled += quantity;
        notional += line_notional;
    }

    let weighted_average_price = if filled > Decimal::ZERO {
        notional / filled
    } else {
        Decimal::ZERO
    };

    // Final balance view for every input exchange, touched or not, in
    // input order.
    let post_trade_balances = exchanges
        .iter()
        .map(|exchange| {
            let balance = balances[exchange.id.as_str()];
            PostTradeBalance {
                exchange_id: exchange.id.clone(),
                quote: balance.quote,
                base: balance.base,
            }
        })
        .collect();

    tracing::debug!(
        side = %side,
        requested = %requested,
        filled = %filled,
        lines = orders.len(),
        "execution plan computed"
    );

    Ok(ExecutionPlan {
        side,
        requested,
        filled,
        shortfall: requested - filled,
        weighted_average_price,
        total_notional: notional,
        orders,
        post_trade_balances,
    })
}

/// Flattens the relevant side of every book into one candidate sequence and
/// orders it for greedy consumption.
///
/// Levels with non-positive price or size are corrupt source data and are
/// dropped before sorting. BUY consumes cheapest asks first, SELL highest
/// bids first; equal prices prefer the larger size, which favours deeper
/// liquidity and fewer fill lines.
fn sorted_levels(exchanges: &[Exchange], side: Side) -> Vec<PriceLevel<'_>> {
    let mut levels: Vec<PriceLevel<'_>> = exchanges
        .iter()
        .flat_map(|exchange| {
            let source = match side {
                Side::Buy => &exchange.order_book.asks,
                Side::Sell => &exchange.order_book.bids,
            };
            source.iter().map(move |order| PriceLevel {
                exchange_id: exchange.id.as_str(),
                price: order.price,
                size: order.amount,
            })
        })
        .filter(|level| level.price > Decimal::ZERO && level.size > Decimal::ZERO)
        .collect();

    match side {
        Side::Buy => {
            levels.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| b.size.cmp(&a.size)))
        }
        Side::Sell => {
            levels.sort_by(|a, b| b.price.cmp(&a.price).then_with(|| b.size.cmp(&a.size)))
        }
    }

    levels
}
