use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Requested quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),
}
