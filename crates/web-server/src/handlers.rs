use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Path, State},
};
use core_types::{ExecutionPlan, Side};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;

/// # GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// # POST /api/execute/:side/:quantity
///
/// Computes a fresh execution plan against the current snapshot folder.
/// Side and quantity travel as path strings and are validated here; the
/// loader and planner only ever see well-formed input.
pub async fn execute(
    State(state): State<Arc<AppState>>,
    Path((side, quantity)): Path<(String, String)>,
) -> Result<Json<ExecutionPlan>, AppError> {
    let side = Side::from_str(&side).map_err(|e| AppError::InvalidRequest(e.to_string()))?;
    let quantity = parse_quantity(&quantity, state.config.limits.max_quantity)?;

    let exchanges = snapshot::load_exchanges(&state.config.snapshot.orderbooks_dir).await?;
    let plan = planner::compute_plan(&exchanges, side, quantity)?;

    Ok(Json(plan))
}

/// Parses and bounds a requested quantity from its path segment.
fn parse_quantity(raw: &str, max_quantity: Decimal) -> Result<Decimal, AppError> {
    let quantity = Decimal::from_str(raw)
        .map_err(|_| AppError::InvalidRequest(format!("unparsable quantity '{}'", raw)))?;

    if quantity <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(format!(
            "quantity must be greater than 0, got {}",
            quantity
        )));
    }
    if quantity > max_quantity {
        return Err(AppError::InvalidRequest(format!(
            "quantity {} exceeds the maximum of {}",
            quantity, max_quantity
        )));
    }

    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantity_must_be_a_decimal() {
        assert!(parse_quantity("0.5", dec!(1000)).is_ok());
        assert!(parse_quantity("abc", dec!(1000)).is_err());
        assert!(parse_quantity("", dec!(1000)).is_err());
    }

    #[test]
    fn quantity_must_be_positive_and_bounded() {
        assert!(parse_quantity("0", dec!(1000)).is_err());
        assert!(parse_quantity("-1", dec!(1000)).is_err());
        assert!(parse_quantity("1000", dec!(1000)).is_ok());
        assert!(parse_quantity("1000.00000001", dec!(1000)).is_err());
    }
}
