//! Pre-transaction estimates shown while the user is still typing: the dynamic trading fee
//! and the liquidity-deposit reward. Both rank an action by whether it moves the pool
//! price toward the governance-configured desired price.

pub mod fee;
pub mod oracle;
pub mod pool;
pub mod reward;

/// Absolute slack when comparing two distances to the desired price.
pub const DISTANCE_TOLERANCE: f64 = 1e-9;

/// Where an action leaves the price relative to the desired price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceDirection {
    Toward,
    Away,
    Neutral,
}

/// Compares `|before - desired|` with `|after - desired|`. Differences within
/// [`DISTANCE_TOLERANCE`], and any non-finite input, classify as `Neutral`.
pub fn classify_price_move(before: f64, after: f64, desired: f64) -> PriceDirection {
    let distance_before = (before - desired).abs();
    let distance_after = (after - desired).abs();

    if !distance_before.is_finite() || !distance_after.is_finite() {
        return PriceDirection::Neutral;
    }

    if distance_after < distance_before - DISTANCE_TOLERANCE {
        PriceDirection::Toward
    } else if distance_after > distance_before + DISTANCE_TOLERANCE {
        PriceDirection::Away
    } else {
        PriceDirection::Neutral
    }
}
