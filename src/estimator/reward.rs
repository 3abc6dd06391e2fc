use super::oracle::PriceOracle;
use super::pool::PoolState;
use super::{PriceDirection, classify_price_move};
use serde::{Deserialize, Serialize};

/// Reward rate for deposits whose ratio is closer to the desired price than the pool is.
pub const HELPFUL_REWARD_FACTOR: f64 = 0.05;
pub const BASE_REWARD_FACTOR: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEstimate {
    /// Governance tokens, never negative.
    pub reward: f64,
    pub explanation: String,
}

impl RewardEstimate {
    fn zero(explanation: &str) -> Self {
        Self {
            reward: 0.0,
            explanation: explanation.to_string(),
        }
    }
}

fn usd_value<O: PriceOracle + ?Sized>(prices: &O, symbol: &str, amount: f64) -> f64 {
    match prices.usd_price(symbol) {
        Some(price) => amount * price,
        None => {
            tracing::debug!(symbol, "No USD price for token, valuing at zero");
            0.0
        }
    }
}

/// Estimates the governance-token reward for depositing `amount_a` of token A and
/// `amount_b` of token B.
///
/// The deposit ratio `amount_a / amount_b` (or the current price when `amount_b` is zero)
/// is compared against the current price. Deposits that move toward the desired price earn
/// [`HELPFUL_REWARD_FACTOR`] of their USD value, all others [`BASE_REWARD_FACTOR`].
pub fn estimate_deposit_reward<O: PriceOracle + ?Sized>(
    amount_a: f64,
    amount_b: f64,
    pool: Option<&PoolState>,
    prices: &O,
) -> RewardEstimate {
    let Some(pool) = pool else {
        return RewardEstimate::zero("Select a pool to estimate rewards.");
    };
    let is_positive = |amount: f64| amount > 0.0;
    if !is_positive(amount_a) && !is_positive(amount_b) {
        return RewardEstimate::zero("Enter amounts to estimate rewards.");
    }

    let deposit_ratio = if amount_b == 0.0 {
        pool.current_price
    } else {
        amount_a / amount_b
    };
    let direction = classify_price_move(pool.current_price, deposit_ratio, pool.desired_price);
    let factor = match direction {
        PriceDirection::Toward => HELPFUL_REWARD_FACTOR,
        PriceDirection::Away | PriceDirection::Neutral => BASE_REWARD_FACTOR,
    };

    let value = usd_value(prices, &pool.token_a, amount_a) + usd_value(prices, &pool.token_b, amount_b);
    let raw_reward = factor * value;
    // also maps NaN to zero
    let reward = if raw_reward > 0.0 { raw_reward } else { 0.0 };

    tracing::debug!(
        amount_a,
        amount_b,
        deposit_ratio,
        ?direction,
        value,
        reward,
        "Estimated deposit reward"
    );

    let explanation = match direction {
        PriceDirection::Toward => format!(
            "Deposit ratio helps move the price toward the target: {:.0}% of ${value:.2} deposited.",
            factor * 100.0
        ),
        PriceDirection::Away | PriceDirection::Neutral => format!(
            "Standard reward rate: {:.0}% of ${value:.2} deposited.",
            factor * 100.0
        ),
    };

    RewardEstimate { reward, explanation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pool() -> PoolState {
        PoolState {
            current_price: 5.0,
            desired_price: 6.0,
            base_fee: 0.003,
            decimals0: 18,
            decimals1: 18,
            token_a: "AAA".to_string(),
            token_b: "BBB".to_string(),
        }
    }

    fn prices() -> HashMap<String, f64> {
        HashMap::from([("AAA".to_string(), 10.0), ("BBB".to_string(), 2.0)])
    }

    #[test]
    fn test_no_pool_or_no_amounts() {
        let prices = prices();
        assert_eq!(estimate_deposit_reward(1.0, 1.0, None, &prices).reward, 0.0);

        let pool = pool();
        let estimate = estimate_deposit_reward(0.0, -1.0, Some(&pool), &prices);
        assert_eq!(estimate.reward, 0.0);
        assert!(estimate.explanation.contains("Enter amounts"));
    }

    #[test]
    fn test_zero_amount_b_falls_back_to_current_price() {
        let pool = pool();
        let estimate = estimate_deposit_reward(1.0, 0.0, Some(&pool), &prices());
        // ratio == current price: neutral, base factor on $10
        assert_eq!(estimate.reward, BASE_REWARD_FACTOR * 10.0);
        assert!(estimate.explanation.contains("Standard"));
    }

    #[test]
    fn test_helpful_ratio_gets_higher_factor() {
        let pool = pool();
        // ratio 5.5 is closer to 6 than 5 is
        let estimate = estimate_deposit_reward(11.0, 2.0, Some(&pool), &prices());
        assert_eq!(estimate.reward, HELPFUL_REWARD_FACTOR * (110.0 + 4.0));
        assert!(estimate.explanation.contains("toward"));
    }

    #[test]
    fn test_unhelpful_ratio_gets_base_factor() {
        let pool = pool();
        // ratio 2 is further from 6 than 5 is
        let estimate = estimate_deposit_reward(2.0, 1.0, Some(&pool), &prices());
        assert_eq!(estimate.reward, BASE_REWARD_FACTOR * 22.0);
    }

    #[test]
    fn test_missing_or_negative_prices_never_go_negative() {
        let pool = pool();
        let empty: HashMap<String, f64> = HashMap::new();
        assert_eq!(estimate_deposit_reward(3.0, 1.0, Some(&pool), &empty).reward, 0.0);

        let negative = HashMap::from([("AAA".to_string(), -10.0), ("BBB".to_string(), -1.0)]);
        assert_eq!(estimate_deposit_reward(3.0, 1.0, Some(&pool), &negative).reward, 0.0);

        assert_eq!(estimate_deposit_reward(-3.0, 1.0, Some(&pool), &prices()).reward, 0.0);
        assert_eq!(estimate_deposit_reward(f64::NAN, 1.0, Some(&pool), &prices()).reward, 0.0);
    }
}
