use serde::{Deserialize, Serialize};

use crate::Field;

/// Spot quote with today's range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub price: String,
    pub high: String,
    pub low: String,
}

/// Dealer quote for gold 995 (sell, buy, GST inclusive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerQuote {
    pub premium: String,
    pub price: String,
}

/// Wholesale costing band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingBand {
    pub buy: String,
    pub sell: String,
}

/// Finalized snapshot. Every leaf is expected to be non-empty; this is what
/// goes over the wire and what the widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub gold: Quote,
    pub silver: Quote,
    pub inr: Quote,
    pub gold_sell: DealerQuote,
    pub gold_buy: DealerQuote,
    pub gold_gst: DealerQuote,
    pub gold_costing: CostingBand,
    pub silver_costing: CostingBand,
}

impl RateSnapshot {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::GoldPrice => &self.gold.price,
            Field::GoldHigh => &self.gold.high,
            Field::GoldLow => &self.gold.low,
            Field::SilverPrice => &self.silver.price,
            Field::SilverHigh => &self.silver.high,
            Field::SilverLow => &self.silver.low,
            Field::InrPrice => &self.inr.price,
            Field::InrHigh => &self.inr.high,
            Field::InrLow => &self.inr.low,
            Field::GoldSellPremium => &self.gold_sell.premium,
            Field::GoldSellPrice => &self.gold_sell.price,
            Field::GoldBuyPremium => &self.gold_buy.premium,
            Field::GoldBuyPrice => &self.gold_buy.price,
            Field::GoldGstPremium => &self.gold_gst.premium,
            Field::GoldGstPrice => &self.gold_gst.price,
            Field::GoldCostingBuy => &self.gold_costing.buy,
            Field::GoldCostingSell => &self.gold_costing.sell,
            Field::SilverCostingBuy => &self.silver_costing.buy,
            Field::SilverCostingSell => &self.silver_costing.sell,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::GoldPrice => &mut self.gold.price,
            Field::GoldHigh => &mut self.gold.high,
            Field::GoldLow => &mut self.gold.low,
            Field::SilverPrice => &mut self.silver.price,
            Field::SilverHigh => &mut self.silver.high,
            Field::SilverLow => &mut self.silver.low,
            Field::InrPrice => &mut self.inr.price,
            Field::InrHigh => &mut self.inr.high,
            Field::InrLow => &mut self.inr.low,
            Field::GoldSellPremium => &mut self.gold_sell.premium,
            Field::GoldSellPrice => &mut self.gold_sell.price,
            Field::GoldBuyPremium => &mut self.gold_buy.premium,
            Field::GoldBuyPrice => &mut self.gold_buy.price,
            Field::GoldGstPremium => &mut self.gold_gst.premium,
            Field::GoldGstPrice => &mut self.gold_gst.price,
            Field::GoldCostingBuy => &mut self.gold_costing.buy,
            Field::GoldCostingSell => &mut self.gold_costing.sell,
            Field::SilverCostingBuy => &mut self.silver_costing.buy,
            Field::SilverCostingSell => &mut self.silver_costing.sell,
        }
    }

    /// First leaf that is empty after trimming, if any.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Leaves whose value differs from `previous`. With no previous snapshot
    /// every leaf counts as changed from an empty display.
    pub fn changes_from(&self, previous: Option<&RateSnapshot>) -> Vec<FieldChange> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                let old = previous.map(|p| p.get(field)).unwrap_or("");
                let new = self.get(field);
                (old != new).then(|| FieldChange {
                    field,
                    old: old.to_string(),
                    new: new.to_string(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: Field,
    pub old: String,
    pub new: String,
}

/// Extractor output. Any group may be missing and any leaf may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silver: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inr: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_sell: Option<DealerQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_buy: Option<DealerQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_gst: Option<DealerQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_costing: Option<CostingBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silver_costing: Option<CostingBand>,
}

impl RawSnapshot {
    /// Union with `other`, group by group. Groups already present are kept.
    pub fn absorb(&mut self, other: RawSnapshot) {
        fill(&mut self.gold, other.gold);
        fill(&mut self.silver, other.silver);
        fill(&mut self.inr, other.inr);
        fill(&mut self.gold_sell, other.gold_sell);
        fill(&mut self.gold_buy, other.gold_buy);
        fill(&mut self.gold_gst, other.gold_gst);
        fill(&mut self.gold_costing, other.gold_costing);
        fill(&mut self.silver_costing, other.silver_costing);
    }

    pub fn group_count(&self) -> usize {
        [
            self.gold.is_some(),
            self.silver.is_some(),
            self.inr.is_some(),
            self.gold_sell.is_some(),
            self.gold_buy.is_some(),
            self.gold_gst.is_some(),
            self.gold_costing.is_some(),
            self.silver_costing.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.group_count() == 0
    }
}

fn fill<T>(slot: &mut Option<T>, candidate: Option<T>) {
    if slot.is_none() {
        *slot = candidate;
    }
}

impl From<RateSnapshot> for RawSnapshot {
    fn from(s: RateSnapshot) -> Self {
        Self {
            gold: Some(s.gold),
            silver: Some(s.silver),
            inr: Some(s.inr),
            gold_sell: Some(s.gold_sell),
            gold_buy: Some(s.gold_buy),
            gold_gst: Some(s.gold_gst),
            gold_costing: Some(s.gold_costing),
            silver_costing: Some(s.silver_costing),
        }
    }
}
