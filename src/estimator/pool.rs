use serde::{Deserialize, Serialize};

/// Read-only snapshot of the pool values the estimators need, as supplied by the UI layer.
/// Prices are token B per token A (`token_a` is the pool's first token).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolState {
    pub current_price: f64,
    pub desired_price: f64,
    /// Fraction in (0, 1), e.g. `0.003` for 0.3%.
    pub base_fee: f64,
    pub decimals0: u8,
    pub decimals1: u8,
    pub token_a: String,
    pub token_b: String,
}

impl PoolState {
    pub fn is_first_token(&self, symbol: &str) -> bool {
        self.token_a == symbol
    }

    pub fn is_second_token(&self, symbol: &str) -> bool {
        self.token_b == symbol
    }
}
