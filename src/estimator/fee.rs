use super::pool::PoolState;
use super::{PriceDirection, classify_price_move};
use serde::{Deserialize, Serialize};

pub const MIN_FEE: f64 = 0.0001;
pub const MAX_FEE: f64 = 0.05;

/// `impact = IMPACT_COEFFICIENT * sqrt(sell_amount)`
pub const IMPACT_COEFFICIENT: f64 = 0.0005;
/// Floor for the post-trade price and the `1 - impact` factor.
pub const PRICE_EPSILON: f64 = 1e-18;

pub const TOWARD_FEE_MULTIPLIER: f64 = 0.5;
pub const AWAY_FEE_MULTIPLIER: f64 = 2.0;
pub const NEUTRAL_FEE_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimate {
    /// Fraction, e.g. `0.006` for 0.6%.
    pub fee_percentage: f64,
    pub explanation: String,
}

fn clamp_fee(fee: f64) -> f64 {
    if fee.is_nan() {
        MIN_FEE
    } else {
        fee.clamp(MIN_FEE, MAX_FEE)
    }
}

fn percent(fee: f64) -> String {
    format!("{:.2}%", fee * 100.0)
}

/// Heuristic price after selling `sell_amount` into the pool. Selling token A pushes the
/// A-denominated price down, selling token B pushes it up.
pub fn price_after_sell(price_before: f64, sell_amount: f64, selling_first_token: bool) -> f64 {
    let impact = IMPACT_COEFFICIENT * sell_amount.sqrt();
    let retained = (1.0 - impact).max(PRICE_EPSILON);
    let price_after = if selling_first_token {
        price_before * retained
    } else {
        price_before / retained
    };
    price_after.max(PRICE_EPSILON)
}

/// Estimates the dynamic fee for selling `sell_amount` of `sell_token`.
///
/// Trades that push the price toward `desired_price` pay half the base fee, trades that push
/// it away pay double, and the result is always clamped into `[MIN_FEE, MAX_FEE]`.
/// Without a pool the fee is `0`; with no positive amount it is the (clamped) base fee.
pub fn estimate_dynamic_fee(
    sell_amount: f64,
    sell_token: &str,
    pool: Option<&PoolState>,
) -> FeeEstimate {
    let Some(pool) = pool else {
        return FeeEstimate {
            fee_percentage: 0.0,
            explanation: "Select a pool to estimate the trading fee.".to_string(),
        };
    };

    if sell_amount.is_nan() || sell_amount <= 0.0 {
        let fee = clamp_fee(pool.base_fee);
        return FeeEstimate {
            fee_percentage: fee,
            explanation: format!("Base fee {} applies. Enter an amount to see the dynamic fee.", percent(fee)),
        };
    }

    let selling_first_token = pool.is_first_token(sell_token);
    if !selling_first_token && !pool.is_second_token(sell_token) {
        tracing::debug!(sell_token, token_a = %pool.token_a, token_b = %pool.token_b, "Sell token not in pool");
        let fee = clamp_fee(pool.base_fee);
        return FeeEstimate {
            fee_percentage: fee,
            explanation: format!("{sell_token} is not traded in this pool; base fee {} applies.", percent(fee)),
        };
    }

    let price_before = pool.current_price;
    let price_after = price_after_sell(price_before, sell_amount, selling_first_token);
    let direction = classify_price_move(price_before, price_after, pool.desired_price);

    let multiplier = match direction {
        PriceDirection::Toward => TOWARD_FEE_MULTIPLIER,
        PriceDirection::Away => AWAY_FEE_MULTIPLIER,
        PriceDirection::Neutral => NEUTRAL_FEE_MULTIPLIER,
    };
    let fee = clamp_fee(pool.base_fee * multiplier);

    tracing::debug!(
        sell_amount,
        sell_token,
        price_before,
        price_after,
        ?direction,
        fee,
        "Estimated dynamic fee"
    );

    let explanation = match direction {
        PriceDirection::Toward => format!(
            "Trade moves the price toward the target of {}: reduced fee {}.",
            pool.desired_price,
            percent(fee)
        ),
        PriceDirection::Away => format!(
            "Trade moves the price away from the target of {}: increased fee {}.",
            pool.desired_price,
            percent(fee)
        ),
        PriceDirection::Neutral => format!(
            "Trade has no significant effect on the distance to the target: base fee {}.",
            percent(fee)
        ),
    };

    FeeEstimate {
        fee_percentage: fee,
        explanation,
    }
}
