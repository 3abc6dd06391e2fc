//! Decoding of the packed `int256` returned by a simulated swap: amount0 in the low
//! 128 bits, amount1 in the high 128 bits, each an independent two's-complement `int128`.
//!
//! The raw functions take an [`I256`], so a value outside the signed 256-bit domain cannot
//! reach them. Untyped inputs must go through [`BalanceDelta::from_word`] or the `FromStr`
//! impl, which reject anything that is not exactly 256 bits wide. Feeding a truncated or
//! over-wide value into the bit manipulation would silently corrupt the decoded signs.

use crate::errors::AmmRsError;
use alloy_primitives::{I256, U256};
use std::str::FromStr;

/// Reinterprets the low 128 bits of `raw` as a two's-complement `int128`.
fn low_i128(raw: U256) -> i128 {
    let limbs = raw.as_limbs();
    (((limbs[1] as u128) << 64) | limbs[0] as u128) as i128
}

/// Sign-extended low 128 bits of the packed delta.
pub fn amount0_delta(packed: I256) -> i128 {
    low_i128(packed.into_raw())
}

/// Sign-extended high 128 bits of the packed delta.
pub fn amount1_delta(packed: I256) -> i128 {
    low_i128(packed.asr(128).into_raw())
}

/// Per-token balance change of a swap. Positive amounts are credited to the caller,
/// negative amounts are owed by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BalanceDelta {
    pub amount0: i128,
    pub amount1: i128,
}

impl BalanceDelta {
    pub fn new(amount0: i128, amount1: i128) -> Self {
        Self { amount0, amount1 }
    }

    pub fn from_packed(packed: I256) -> Self {
        Self {
            amount0: amount0_delta(packed),
            amount1: amount1_delta(packed),
        }
    }

    /// Packs as `(amount1 << 128) | (amount0 & (2^128 - 1))`.
    pub fn to_packed(&self) -> I256 {
        let high = U256::from(self.amount1 as u128) << 128usize;
        let low = U256::from(self.amount0 as u128);
        I256::from_raw(high | low)
    }

    /// Decodes a 32-byte big-endian ABI word, as returned by an `eth_call` of the swap.
    pub fn from_word(word: &[u8]) -> Result<Self, AmmRsError> {
        let bytes = <[u8; 32]>::try_from(word).map_err(|_| {
            AmmRsError::InvalidPackedDelta(format!("expected 32 bytes, got {}", word.len()))
        })?;
        Ok(Self::from_packed(I256::from_raw(U256::from_be_bytes(bytes))))
    }

    /// True when one leg goes in and the other comes out, or nothing moved.
    pub fn is_well_formed(&self) -> bool {
        (self.amount0 == 0 && self.amount1 == 0) || (self.amount0.signum() * self.amount1.signum() < 0)
    }

    /// Magnitude of the credited leg, i.e. what a swap preview shows as "amount received".
    pub fn amount_received(&self) -> u128 {
        [self.amount0, self.amount1]
            .into_iter()
            .filter(|amount| *amount > 0)
            .max()
            .map_or(0, i128::unsigned_abs)
    }

    /// Magnitude of the owed leg.
    pub fn amount_paid(&self) -> u128 {
        [self.amount0, self.amount1]
            .into_iter()
            .filter(|amount| *amount < 0)
            .min()
            .map_or(0, i128::unsigned_abs)
    }
}

impl From<I256> for BalanceDelta {
    fn from(packed: I256) -> Self {
        Self::from_packed(packed)
    }
}

impl From<BalanceDelta> for I256 {
    fn from(delta: BalanceDelta) -> Self {
        delta.to_packed()
    }
}

impl FromStr for BalanceDelta {
    type Err = AmmRsError;

    /// Accepts a signed decimal `int256` or a `0x`-prefixed word of exactly 64 hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let packed = match s.strip_prefix("0x") {
            Some(hex) if hex.len() != 64 => {
                return Err(AmmRsError::InvalidPackedDelta(format!(
                    "expected 64 hex digits, got {}",
                    hex.len()
                )));
            }
            Some(hex) => U256::from_str_radix(hex, 16)
                .map(I256::from_raw)
                .map_err(|e| AmmRsError::InvalidPackedDelta(format!("{s}: {e}")))?,
            None => I256::from_dec_str(s)
                .map_err(|e| AmmRsError::InvalidPackedDelta(format!("{s}: {e}")))?,
        };
        Ok(Self::from_packed(packed))
    }
}
