use super::constants::{
    MAX_F64_EXPONENT, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, NEGATIVE_TICK_SCALE,
    NEGATIVE_TICK_SCALE_F64, POSITIVE_TICK_SCALE, POSITIVE_TICK_SCALE_F64, Q96,
};
use crate::errors::AmmRsError;
use crate::math::utils::f64_to_u256;
use alloy_primitives::U256;

/// Q128.128 multipliers `1 / sqrt(1.0001)^(2^i)` for bits 1..19 of the absolute tick,
/// as used by the on-chain TickMath library.
const TICK_BIT_FACTORS: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

const TICK_BIT_ONE: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Approximates sqrt(1.0001^tick) * 2^96 with floating-point exponentiation.
///
/// The result always lies in `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`, even for ticks outside
/// `[MIN_TICK, MAX_TICK]`, but it is only meaningful for in-range ticks. For those it is
/// within a relative error of 1e-10 (or one unit, whichever is larger) of
/// [`exact_sqrt_ratio_at_tick`].
pub fn sqrt_ratio_at_tick(tick: i32) -> U256 {
    let exponent = f64::from(tick.unsigned_abs()) * 1.0001_f64.ln() / 2.0;

    if exponent > MAX_F64_EXPONENT {
        tracing::debug!(tick, exponent, "Tick exponent overflows f64, clamping to bound");
        return if tick < 0 {
            MIN_SQRT_RATIO + U256::from(1)
        } else {
            MAX_SQRT_RATIO - U256::from(1)
        };
    }

    let ratio = exponent.exp();

    let sqrt_ratio = if tick < 0 {
        // 1 / ratio, computed as Q96 * 10^36 / floor(ratio * 10^36)
        match f64_to_u256(ratio * NEGATIVE_TICK_SCALE_F64) {
            Some(denominator) if !denominator.is_zero() => Q96 * NEGATIVE_TICK_SCALE / denominator,
            _ => {
                tracing::trace!(tick, ratio, "Inverted ratio underflowed");
                MIN_SQRT_RATIO + U256::from(1)
            }
        }
    } else {
        match f64_to_u256(ratio * POSITIVE_TICK_SCALE_F64).and_then(|scaled| scaled.checked_mul(Q96)) {
            Some(product) => product / POSITIVE_TICK_SCALE,
            None => {
                tracing::trace!(tick, ratio, "Ratio is not representable");
                MAX_SQRT_RATIO - U256::from(1)
            }
        }
    };

    sqrt_ratio.clamp(MIN_SQRT_RATIO, MAX_SQRT_RATIO)
}

/// Calculates sqrt(1.0001^tick) * 2^96 bit-exactly, the way the on-chain TickMath
/// library does (a product of per-bit Q128.128 constants, rounded up to Q64.96).
pub fn exact_sqrt_ratio_at_tick(tick: i32) -> Result<U256, AmmRsError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(AmmRsError::TickOutOfBounds(tick));
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(TICK_BIT_ONE)
    } else {
        U256::from(1u8) << 128usize
    };

    for (mask, factor) in TICK_BIT_FACTORS {
        if abs_tick & mask != 0 {
            ratio = (ratio * U256::from(factor)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up
    let remainder: U256 = ratio & ((U256::from(1u8) << 32usize) - U256::from(1u8));
    let round_up = if remainder.is_zero() { U256::ZERO } else { U256::from(1) };
    Ok((ratio >> 32) + round_up)
}

/// Returns the greatest tick whose exact sqrt ratio is <= `sqrt_ratio_x96`.
/// Unlike the on-chain version, `MAX_SQRT_RATIO` itself is accepted and maps to `MAX_TICK`.
pub fn tick_at_sqrt_ratio(sqrt_ratio_x96: U256) -> Result<i32, AmmRsError> {
    if !(MIN_SQRT_RATIO..=MAX_SQRT_RATIO).contains(&sqrt_ratio_x96) {
        return Err(AmmRsError::SqrtRatioOutOfBounds(sqrt_ratio_x96));
    }

    let (mut low, mut high) = (MIN_TICK, MAX_TICK);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if exact_sqrt_ratio_at_tick(mid)? <= sqrt_ratio_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}
