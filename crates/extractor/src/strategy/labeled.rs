use interface::{CostingBand, DealerQuote, RawSnapshot};

use super::{text_of, ExtractionStrategy};
use crate::document::{HtmlDocument, Node};

const ROWS: &str = "table tr";
const CELL: &str = "td";

pub const GOLD_SELL_LABEL: &str = "GOLD 995 SELL";
pub const GOLD_BUY_LABEL: &str = "GOLD 995 BUY";
pub const GOLD_GST_LABEL: &str = "GOLD 995 GST";
pub const GOLD_COSTING_LABEL: &str = "GOLD COSTING";
pub const SILVER_COSTING_LABEL: &str = "SILVER COSTING";

/// Finds dealer and costing rows by their label text and reads the 2nd and
/// 3rd cell. Labels are matched case-sensitively; the first row carrying a
/// label wins.
pub struct LabeledRowScan;

impl ExtractionStrategy for LabeledRowScan {
    fn name(&self) -> &'static str {
        "labeled"
    }

    fn extract(&self, doc: &HtmlDocument) -> RawSnapshot {
        let mut raw = RawSnapshot::default();

        for row in doc.find_all(ROWS) {
            if raw.gold_sell.is_none() && row.contains_text(GOLD_SELL_LABEL) {
                raw.gold_sell = Some(dealer_row(&row));
            }
            if raw.gold_buy.is_none() && row.contains_text(GOLD_BUY_LABEL) {
                raw.gold_buy = Some(dealer_row(&row));
            }
            if raw.gold_gst.is_none() && row.contains_text(GOLD_GST_LABEL) {
                raw.gold_gst = Some(dealer_row(&row));
            }
            if raw.gold_costing.is_none() && row.contains_text(GOLD_COSTING_LABEL) {
                raw.gold_costing = Some(costing_row(&row));
            }
            if raw.silver_costing.is_none() && row.contains_text(SILVER_COSTING_LABEL) {
                raw.silver_costing = Some(costing_row(&row));
            }
        }

        raw
    }
}

fn dealer_row(row: &Node<'_>) -> DealerQuote {
    DealerQuote {
        premium: text_of(row.nth(CELL, 1)),
        price: text_of(row.nth(CELL, 2)),
    }
}

fn costing_row(row: &Node<'_>) -> CostingBand {
    CostingBand {
        buy: text_of(row.nth(CELL, 1)),
        sell: text_of(row.nth(CELL, 2)),
    }
}
