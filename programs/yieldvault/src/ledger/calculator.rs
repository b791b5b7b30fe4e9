use crate::constants::{MAX_ACCRUAL_WINDOW_BLOCKS, REWARD_CEILING_DIVISOR};
use crate::utils::math_utils::{fixed_point_product, rate_per_block, saturate_to_u64};

/// Computes the yield a position has earned since its checkpoint.
///
/// Formula: `deposit * rate_per_block * blocks_elapsed / PRECISION_FACTOR`, where
/// `rate_per_block = yield_rate_bps * PRECISION_FACTOR / (100 * max(period, 1))`.
///
/// `blocks_elapsed` is capped at `MAX_ACCRUAL_WINDOW_BLOCKS` so a stale
/// checkpoint cannot compound without bound, and the result never exceeds
/// `deposit / 10` whatever the rate or window.
///
/// Pure and total: returns 0 for an empty deposit or a checkpoint at or after
/// `current_block`, and never panics or overflows.
pub fn compute_pending(
    deposit: u64,
    checkpoint_block: u64,
    current_block: u64,
    yield_rate_bps: u64,
    yield_period_blocks: u64,
) -> u64 {
    if deposit == 0 || current_block <= checkpoint_block {
        return 0;
    }

    let blocks_elapsed = (current_block - checkpoint_block).min(MAX_ACCRUAL_WINDOW_BLOCKS);
    let rate_factor = rate_per_block(yield_rate_bps, yield_period_blocks);

    let raw = saturate_to_u64(fixed_point_product(
        deposit as u128,
        rate_factor,
        blocks_elapsed as u128,
    ));

    raw.min(deposit / REWARD_CEILING_DIVISOR)
}
