use super::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, PRICE_FRACTION_DIGITS};
use super::tick_math::sqrt_ratio_at_tick;
use crate::errors::AmmRsError;
use crate::math::utils::{format_fixed_point, u256_to_f64};
use alloy_primitives::{U256, U512};

fn check_sqrt_ratio(sqrt_ratio_x96: U256) -> Result<(), AmmRsError> {
    if (MIN_SQRT_RATIO..=MAX_SQRT_RATIO).contains(&sqrt_ratio_x96) {
        Ok(())
    } else {
        Err(AmmRsError::SqrtRatioOutOfBounds(sqrt_ratio_x96))
    }
}

fn pow10(exponent: u32) -> Option<U512> {
    U512::from(10u8).checked_pow(U512::from(exponent))
}

/// `sqrt^2 * 10^decimals0 * 10^18 / (2^192 * 10^decimals1)`, or `None` if an intermediate
/// does not fit in 512 bits.
fn scaled_price(sqrt_ratio_x96: U256, decimals0: u8, decimals1: u8) -> Option<U512> {
    let sqrt_ratio = U512::from(sqrt_ratio_x96);
    let numerator = (sqrt_ratio * sqrt_ratio)
        .checked_mul(pow10(u32::from(decimals0))?)?
        .checked_mul(pow10(PRICE_FRACTION_DIGITS as u32)?)?;
    let denominator = (U512::from(1u8) << 192usize).checked_mul(pow10(u32::from(decimals1))?)?;
    Some(numerator / denominator)
}

/// Order-of-magnitude estimate of the price, used when the exact path overflows.
fn price_log10(sqrt_ratio_x96: U256, decimals0: u8, decimals1: u8) -> f64 {
    2.0 * u256_to_f64(sqrt_ratio_x96).log10() - 192.0 * 2f64.log10() + f64::from(decimals0)
        - f64::from(decimals1)
}

/// Correctly rounded `10^exponent`, identical to the literal `1e{exponent}`.
fn pow10_f64(exponent: i32) -> Result<f64, AmmRsError> {
    format!("1e{exponent}")
        .parse::<f64>()
        .map_err(|e| AmmRsError::CalculationError(format!("Failed to parse 1e{exponent}: {e}")))
}

/// Renders the price of token0 in token1 units as an exact decimal string with at most
/// 18 fractional digits (truncated, trailing zeros stripped).
pub fn price_string_at_sqrt_ratio(
    sqrt_ratio_x96: U256,
    decimals0: u8,
    decimals1: u8,
) -> Result<String, AmmRsError> {
    check_sqrt_ratio(sqrt_ratio_x96)?;
    let scaled = scaled_price(sqrt_ratio_x96, decimals0, decimals1).ok_or_else(|| {
        AmmRsError::CalculationError("Price exceeds 512-bit intermediate precision".into())
    })?;
    Ok(format_fixed_point(scaled, PRICE_FRACTION_DIGITS))
}

/// Converts a Q64.96 sqrt price into a human-scale price of token0 denominated in token1.
///
/// Out-of-range sqrt ratios are rejected. If the exact 512-bit computation overflows, the
/// result saturates to `f64::INFINITY` for huge prices and `0.0` for tiny ones.
pub fn price_at_sqrt_ratio(
    sqrt_ratio_x96: U256,
    decimals0: u8,
    decimals1: u8,
) -> Result<f64, AmmRsError> {
    check_sqrt_ratio(sqrt_ratio_x96)?;

    let Some(scaled) = scaled_price(sqrt_ratio_x96, decimals0, decimals1) else {
        let magnitude = price_log10(sqrt_ratio_x96, decimals0, decimals1);
        tracing::debug!(%sqrt_ratio_x96, decimals0, decimals1, magnitude, "Price computation overflowed");
        return Ok(if magnitude >= 0.0 { f64::INFINITY } else { 0.0 });
    };

    format_fixed_point(scaled, PRICE_FRACTION_DIGITS)
        .parse::<f64>()
        .map_err(|e| AmmRsError::CalculationError(format!("Failed to parse price: {e}")))
}

/// Price of token0 in token1 units at `tick`. Tick 0 short-circuits to `10^(decimals0 - decimals1)`.
pub fn price_at_tick(tick: i32, decimals0: u8, decimals1: u8) -> Result<f64, AmmRsError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(AmmRsError::TickOutOfBounds(tick));
    }
    if tick == 0 {
        return pow10_f64(i32::from(decimals0) - i32::from(decimals1));
    }
    price_at_sqrt_ratio(sqrt_ratio_at_tick(tick), decimals0, decimals1)
}
