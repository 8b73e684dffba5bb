//! # Core Types Crate
//!
//! Shared data model for the meta-exchange planner. Defines the snapshot
//! entities consumed from the loader (`Exchange`, `OrderBook`, `Order`,
//! `AvailableFunds`) and the plan entities produced by the allocation
//! engine (`ExecutionPlan`, `ExecutionOrder`, `PostTradeBalance`).
//!
//! Snapshot types are read-only inputs: the engine never mutates them and
//! works on its own running copies of the balances.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Side;
pub use error::CoreError;
pub use structs::{
    AvailableFunds, Exchange, ExecutionOrder, ExecutionPlan, Order, OrderBook, PostTradeBalance,
};
