pub mod errors;
pub mod estimator;
pub mod math;

pub use errors::AmmRsError;

pub use estimator::fee::{FeeEstimate, estimate_dynamic_fee};
pub use estimator::oracle::PriceOracle;
pub use estimator::pool::PoolState;
pub use estimator::reward::{RewardEstimate, estimate_deposit_reward};
pub use estimator::{PriceDirection, classify_price_move};

pub use math::v3::balance_delta::{BalanceDelta, amount0_delta, amount1_delta};
pub use math::v3::price::{price_at_sqrt_ratio, price_at_tick, price_string_at_sqrt_ratio};
pub use math::v3::tick_math::{exact_sqrt_ratio_at_tick, sqrt_ratio_at_tick, tick_at_sqrt_ratio};
