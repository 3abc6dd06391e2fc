use alloy_primitives::{I256, U256};
use ammrs::estimator::fee::{MAX_FEE, MIN_FEE};
use ammrs::math::v3::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use ammrs::{
    BalanceDelta, PoolState, amount0_delta, amount1_delta, estimate_deposit_reward,
    estimate_dynamic_fee, exact_sqrt_ratio_at_tick, price_at_tick, sqrt_ratio_at_tick,
    tick_at_sqrt_ratio,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn pool(current_price: f64, desired_price: f64, base_fee: f64) -> PoolState {
    PoolState {
        current_price,
        desired_price,
        base_fee,
        decimals0: 18,
        decimals1: 18,
        token_a: "AAA".to_string(),
        token_b: "BBB".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_sqrt_ratio_within_bounds(tick in any::<i32>()) {
        let sqrt_ratio = sqrt_ratio_at_tick(tick);
        prop_assert!(sqrt_ratio >= MIN_SQRT_RATIO);
        prop_assert!(sqrt_ratio <= MAX_SQRT_RATIO);
    }

    #[test]
    fn prop_sqrt_ratio_monotonic(tick in MIN_TICK..MAX_TICK) {
        prop_assert!(sqrt_ratio_at_tick(tick) <= sqrt_ratio_at_tick(tick + 1));
    }

    #[test]
    fn prop_exact_tick_roundtrip(tick in MIN_TICK..=MAX_TICK) {
        let sqrt_ratio = exact_sqrt_ratio_at_tick(tick).unwrap();
        prop_assert_eq!(tick_at_sqrt_ratio(sqrt_ratio).unwrap(), tick);
    }

    #[test]
    fn prop_price_at_tick_is_non_negative(tick in MIN_TICK..=MAX_TICK, d0 in 0u8..=30, d1 in 0u8..=30) {
        let price = price_at_tick(tick, d0, d1).unwrap();
        prop_assert!(price >= 0.0);
    }

    #[test]
    fn prop_packed_delta_roundtrip(amount0 in any::<i128>(), amount1 in any::<i128>()) {
        let mask128 = (U256::from(1u8) << 128usize) - U256::from(1u8);
        let high = I256::try_from(amount1).unwrap().into_raw() << 128usize;
        let packed = I256::from_raw(high | (U256::from(amount0 as u128) & mask128));
        prop_assert_eq!(amount0_delta(packed), amount0);
        prop_assert_eq!(amount1_delta(packed), amount1);
        prop_assert_eq!(BalanceDelta::from_packed(packed).to_packed(), packed);
    }

    #[test]
    fn prop_fee_within_bounds(
        base_fee in 1e-9f64..1.0,
        sell_amount in 0.0f64..1e15,
        current_price in 1e-9f64..1e9,
        desired_price in 1e-9f64..1e9,
        sell_first in any::<bool>(),
    ) {
        let pool = pool(current_price, desired_price, base_fee);
        let token = if sell_first { "AAA" } else { "BBB" };
        let fee = estimate_dynamic_fee(sell_amount, token, Some(&pool)).fee_percentage;
        prop_assert!((MIN_FEE..=MAX_FEE).contains(&fee));
    }

    #[test]
    fn prop_reward_never_negative(
        amount_a in -1e12f64..1e12,
        amount_b in -1e12f64..1e12,
        current_price in -1e9f64..1e9,
        desired_price in -1e9f64..1e9,
        price_a in -1e6f64..1e6,
        price_b in -1e6f64..1e6,
    ) {
        let pool = pool(current_price, desired_price, 0.003);
        let prices = HashMap::from([("AAA".to_string(), price_a), ("BBB".to_string(), price_b)]);
        let reward = estimate_deposit_reward(amount_a, amount_b, Some(&pool), &prices).reward;
        prop_assert!(reward >= 0.0);
    }
}
