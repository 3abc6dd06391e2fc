pub mod balance_delta;
pub mod constants;
pub mod price;
pub mod tick_math;
