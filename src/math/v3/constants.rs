use alloy_primitives::U256;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// 2^96, the fixed-point unit of a Q64.96 sqrt price.
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// Fixed-point scale applied to the float ratio for non-negative ticks.
pub const POSITIVE_TICK_SCALE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);
pub const POSITIVE_TICK_SCALE_F64: f64 = 1e18;

/// Fixed-point scale (10^36) applied to the float ratio before inverting it for negative ticks.
pub const NEGATIVE_TICK_SCALE: U256 =
    U256::from_limbs([12919594847110692864, 54210108624275221, 0, 0]);
pub const NEGATIVE_TICK_SCALE_F64: f64 = 1e36;

/// Largest exponent `x` for which `f64::exp(x)` is finite (`ln(f64::MAX) ≈ 709.78`).
/// Only valid for IEEE-754 binary64; a different float width needs its own bound.
pub const MAX_F64_EXPONENT: f64 = 709.0;

/// Fractional decimal digits kept by the exact price conversion.
pub const PRICE_FRACTION_DIGITS: usize = 18;
