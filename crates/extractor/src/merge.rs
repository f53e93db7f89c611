use interface::{CostingBand, DealerQuote, Quote, RateSnapshot, RawSnapshot};

/// Totals raw extractor output against a defaults table.
#[derive(Debug, Clone)]
pub struct FallbackMerger {
    defaults: RateSnapshot,
}

impl FallbackMerger {
    pub fn new(defaults: RateSnapshot) -> Self {
        Self { defaults }
    }

    pub fn merge(&self, raw: RawSnapshot) -> RateSnapshot {
        merge(raw, &self.defaults)
    }
}

impl Default for FallbackMerger {
    fn default() -> Self {
        Self::new(RateSnapshot::fallback())
    }
}

/// Keeps every non-blank raw leaf and takes the rest from `defaults`.
/// Missing groups are copied whole from `defaults`.
pub fn merge(raw: RawSnapshot, defaults: &RateSnapshot) -> RateSnapshot {
    RateSnapshot {
        gold: merge_quote(raw.gold, &defaults.gold),
        silver: merge_quote(raw.silver, &defaults.silver),
        inr: merge_quote(raw.inr, &defaults.inr),
        gold_sell: merge_dealer(raw.gold_sell, &defaults.gold_sell),
        gold_buy: merge_dealer(raw.gold_buy, &defaults.gold_buy),
        gold_gst: merge_dealer(raw.gold_gst, &defaults.gold_gst),
        gold_costing: merge_band(raw.gold_costing, &defaults.gold_costing),
        silver_costing: merge_band(raw.silver_costing, &defaults.silver_costing),
    }
}

fn pick(raw: String, default: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn merge_quote(raw: Option<Quote>, default: &Quote) -> Quote {
    match raw {
        Some(q) => Quote {
            price: pick(q.price, &default.price),
            high: pick(q.high, &default.high),
            low: pick(q.low, &default.low),
        },
        None => default.clone(),
    }
}

fn merge_dealer(raw: Option<DealerQuote>, default: &DealerQuote) -> DealerQuote {
    match raw {
        Some(d) => DealerQuote {
            premium: pick(d.premium, &default.premium),
            price: pick(d.price, &default.price),
        },
        None => default.clone(),
    }
}

fn merge_band(raw: Option<CostingBand>, default: &CostingBand) -> CostingBand {
    match raw {
        Some(b) => CostingBand {
            buy: pick(b.buy, &default.buy),
            sell: pick(b.sell, &default.sell),
        },
        None => default.clone(),
    }
}
