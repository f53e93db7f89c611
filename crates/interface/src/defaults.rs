//! Last-resort values for every leaf of a [`RateSnapshot`].
//!
//! These are design constants, not a cache of earlier scrapes. They fill any
//! field the extractor could not find and are what the widget shows before
//! its first fetch completes.

use crate::{CostingBand, DealerQuote, Field, Quote, RateSnapshot};

pub const GOLD_PRICE: &str = "3034.45";
pub const GOLD_HIGH: &str = "3047.35";
pub const GOLD_LOW: &str = "3021.90";

pub const SILVER_PRICE: &str = "33.20";
pub const SILVER_HIGH: &str = "33.55";
pub const SILVER_LOW: &str = "32.93";

pub const INR_PRICE: &str = "86.020";
pub const INR_HIGH: &str = "86.301";
pub const INR_LOW: &str = "85.874";

pub const GOLD_SELL_PREMIUM: &str = "1570";
pub const GOLD_SELL_PRICE: &str = "89800";
pub const GOLD_BUY_PREMIUM: &str = "1389";
pub const GOLD_BUY_PRICE: &str = "89600";
pub const GOLD_GST_PREMIUM: &str = "2550";
pub const GOLD_GST_PRICE: &str = "90780";

pub const GOLD_COSTING_BUY: &str = "88211";
pub const GOLD_COSTING_SELL: &str = "88230";
pub const SILVER_COSTING_BUY: &str = "98551";
pub const SILVER_COSTING_SELL: &str = "98575";

/// Default for one leaf.
pub fn default_for(field: Field) -> &'static str {
    match field {
        Field::GoldPrice => GOLD_PRICE,
        Field::GoldHigh => GOLD_HIGH,
        Field::GoldLow => GOLD_LOW,
        Field::SilverPrice => SILVER_PRICE,
        Field::SilverHigh => SILVER_HIGH,
        Field::SilverLow => SILVER_LOW,
        Field::InrPrice => INR_PRICE,
        Field::InrHigh => INR_HIGH,
        Field::InrLow => INR_LOW,
        Field::GoldSellPremium => GOLD_SELL_PREMIUM,
        Field::GoldSellPrice => GOLD_SELL_PRICE,
        Field::GoldBuyPremium => GOLD_BUY_PREMIUM,
        Field::GoldBuyPrice => GOLD_BUY_PRICE,
        Field::GoldGstPremium => GOLD_GST_PREMIUM,
        Field::GoldGstPrice => GOLD_GST_PRICE,
        Field::GoldCostingBuy => GOLD_COSTING_BUY,
        Field::GoldCostingSell => GOLD_COSTING_SELL,
        Field::SilverCostingBuy => SILVER_COSTING_BUY,
        Field::SilverCostingSell => SILVER_COSTING_SELL,
    }
}

impl RateSnapshot {
    /// Snapshot made entirely of defaults.
    pub fn fallback() -> Self {
        let quote = |price: &str, high: &str, low: &str| Quote {
            price: price.to_string(),
            high: high.to_string(),
            low: low.to_string(),
        };
        let dealer = |premium: &str, price: &str| DealerQuote {
            premium: premium.to_string(),
            price: price.to_string(),
        };
        let band = |buy: &str, sell: &str| CostingBand {
            buy: buy.to_string(),
            sell: sell.to_string(),
        };

        Self {
            gold: quote(GOLD_PRICE, GOLD_HIGH, GOLD_LOW),
            silver: quote(SILVER_PRICE, SILVER_HIGH, SILVER_LOW),
            inr: quote(INR_PRICE, INR_HIGH, INR_LOW),
            gold_sell: dealer(GOLD_SELL_PREMIUM, GOLD_SELL_PRICE),
            gold_buy: dealer(GOLD_BUY_PREMIUM, GOLD_BUY_PRICE),
            gold_gst: dealer(GOLD_GST_PREMIUM, GOLD_GST_PRICE),
            gold_costing: band(GOLD_COSTING_BUY, GOLD_COSTING_SELL),
            silver_costing: band(SILVER_COSTING_BUY, SILVER_COSTING_SELL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_matches_table() {
        let fallback = RateSnapshot::fallback();
        for field in Field::ALL {
            assert_eq!(fallback.get(field), default_for(field), "{field}");
        }
        assert!(fallback.is_complete());
    }
}
