use std::collections::{BTreeMap, HashMap};

/// Source of USD prices by token symbol.
pub trait PriceOracle {
    fn usd_price(&self, symbol: &str) -> Option<f64>;
}

impl PriceOracle for HashMap<String, f64> {
    fn usd_price(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl PriceOracle for BTreeMap<String, f64> {
    fn usd_price(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl<T: PriceOracle + ?Sized> PriceOracle for &T {
    fn usd_price(&self, symbol: &str) -> Option<f64> {
        (**self).usd_price(symbol)
    }
}
