use std::fmt;

/// One leaf of a [`RateSnapshot`](crate::RateSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    GoldPrice,
    GoldHigh,
    GoldLow,
    SilverPrice,
    SilverHigh,
    SilverLow,
    InrPrice,
    InrHigh,
    InrLow,
    GoldSellPremium,
    GoldSellPrice,
    GoldBuyPremium,
    GoldBuyPrice,
    GoldGstPremium,
    GoldGstPrice,
    GoldCostingBuy,
    GoldCostingSell,
    SilverCostingBuy,
    SilverCostingSell,
}

impl Field {
    /// Display order: spot quotes, dealer quotes, costing bands.
    pub const ALL: [Field; 19] = [
        Field::GoldPrice,
        Field::GoldHigh,
        Field::GoldLow,
        Field::SilverPrice,
        Field::SilverHigh,
        Field::SilverLow,
        Field::InrPrice,
        Field::InrHigh,
        Field::InrLow,
        Field::GoldSellPremium,
        Field::GoldSellPrice,
        Field::GoldBuyPremium,
        Field::GoldBuyPrice,
        Field::GoldGstPremium,
        Field::GoldGstPrice,
        Field::GoldCostingBuy,
        Field::GoldCostingSell,
        Field::SilverCostingBuy,
        Field::SilverCostingSell,
    ];

    /// Dotted JSON path, e.g. `goldSell.premium`.
    pub fn key(self) -> &'static str {
        match self {
            Field::GoldPrice => "gold.price",
            Field::GoldHigh => "gold.high",
            Field::GoldLow => "gold.low",
            Field::SilverPrice => "silver.price",
            Field::SilverHigh => "silver.high",
            Field::SilverLow => "silver.low",
            Field::InrPrice => "inr.price",
            Field::InrHigh => "inr.high",
            Field::InrLow => "inr.low",
            Field::GoldSellPremium => "goldSell.premium",
            Field::GoldSellPrice => "goldSell.price",
            Field::GoldBuyPremium => "goldBuy.premium",
            Field::GoldBuyPrice => "goldBuy.price",
            Field::GoldGstPremium => "goldGst.premium",
            Field::GoldGstPrice => "goldGst.price",
            Field::GoldCostingBuy => "goldCosting.buy",
            Field::GoldCostingSell => "goldCosting.sell",
            Field::SilverCostingBuy => "silverCosting.buy",
            Field::SilverCostingSell => "silverCosting.sell",
        }
    }

    /// Price-type fields that the simulator is allowed to move.
    /// High/low bounds and premiums stay fixed.
    pub fn is_moving(self) -> bool {
        matches!(
            self,
            Field::GoldPrice
                | Field::SilverPrice
                | Field::InrPrice
                | Field::GoldSellPrice
                | Field::GoldBuyPrice
                | Field::GoldGstPrice
                | Field::GoldCostingBuy
                | Field::GoldCostingSell
                | Field::SilverCostingBuy
                | Field::SilverCostingSell
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
