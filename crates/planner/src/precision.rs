use rust_decimal::Decimal;

/// Decimal places of the base-asset step size. The step is `10^-8`: no
/// fill may trade a finer increment than the instrument supports.
pub const QTY_SCALE: u32 = 8;

/// Internal quote-currency precision for notional values.
pub const NOTIONAL_SCALE: u32 = 8;

/// Floors a base-asset quantity to a multiple of the step size.
///
/// Quantities in the fill loop are always non-negative, so truncation
/// toward zero and flooring coincide. The result never exceeds the input,
/// which keeps the quantization conservative against balances and level
/// sizes.
pub fn floor_to_step(value: Decimal) -> Decimal {
    value.trunc_with_scale(QTY_SCALE)
}

/// Truncates a quote-currency amount toward zero at internal precision.
///
/// Applied after the `price * quantity` multiplication so the plan never
/// reports more quote currency changing hands than actually does.
pub fn truncate_notional(value: Decimal) -> Decimal {
    value.trunc_with_scale(NOTIONAL_SCALE)
}
