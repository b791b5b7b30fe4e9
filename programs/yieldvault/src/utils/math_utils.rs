use crate::constants::PRECISION_FACTOR;

/// Fixed-point yield rate per block, scaled by `PRECISION_FACTOR`.
///
/// Formula: `yield_rate_bps * PRECISION_FACTOR / (100 * period)` where a zero
/// period is treated as one block so the division is always defined.
pub fn rate_per_block(yield_rate_bps: u64, yield_period_blocks: u64) -> u128 {
    let period = yield_period_blocks.max(1) as u128;
    (yield_rate_bps as u128) * PRECISION_FACTOR / (100 * period)
}

/// Computes `a * b * c / PRECISION_FACTOR`.
///
/// The product saturates at `u128::MAX` instead of overflowing. Callers cap the
/// result below any value a saturated product could produce, so saturation
/// never leaks into a returned amount.
pub fn fixed_point_product(a: u128, b: u128, c: u128) -> u128 {
    a.saturating_mul(b).saturating_mul(c) / PRECISION_FACTOR
}

/// Narrows a `u128` to `u64`, clamping at `u64::MAX`.
pub fn saturate_to_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
