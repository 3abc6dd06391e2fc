use alloy_primitives::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmmRsError {
    #[error("Tick {0} is outside the valid tick range")]
    TickOutOfBounds(i32),

    #[error("Sqrt ratio {0} is outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO]")]
    SqrtRatioOutOfBounds(U256),

    #[error("Malformed packed delta: {0}")]
    InvalidPackedDelta(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}
