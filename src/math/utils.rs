use alloy_primitives::U256;
use std::fmt::Display;

/// Converts a U256 into a f64, manually combining its limbs.
/// This is an approximation and will lose precision for very large numbers,
/// but is suitable for price calculations.
pub fn u256_to_f64(value: U256) -> f64 {
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * TWO_POW_64 + (*limb as f64))
}

/// Converts a non-negative finite f64 into a U256, rounding toward zero.
/// Returns `None` for NaN, infinities, negative values and anything >= 2^256.
pub fn f64_to_u256(value: f64) -> Option<U256> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value < 1.0 {
        return Some(U256::ZERO);
    }

    let bits = value.to_bits();
    // value >= 1.0 is always a normal float, so the implicit leading bit is set.
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);

    if exponent >= 0 {
        if exponent > 256 - 53 {
            return None;
        }
        Some(U256::from(mantissa) << (exponent as usize))
    } else {
        Some(U256::from(mantissa >> ((-exponent) as u32)))
    }
}

/// Renders an integer that carries `decimals` implied fractional digits as a
/// decimal string, stripping trailing fractional zeros.
/// `format_fixed_point(1_500_000, 6) == "1.5"`, `format_fixed_point(2_000_000, 6) == "2"`.
pub fn format_fixed_point<T: Display>(scaled: T, decimals: usize) -> String {
    let digits = scaled.to_string();
    let digits = if digits.len() <= decimals {
        format!("{digits:0>width$}", width = decimals + 1)
    } else {
        digits
    };

    let (integer, fraction) = digits.split_at(digits.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}
