use interface::RawSnapshot;

use super::{costing_band, dealer_quote, ExtractionStrategy};
use crate::document::HtmlDocument;

const ROWS: &str = "table.gold_price_table tr";

const GOLD_SELL_ROW: usize = 3;
const GOLD_BUY_ROW: usize = 4;
const GOLD_GST_ROW: usize = 5;
const GOLD_COSTING_ROW: usize = 7;
const SILVER_COSTING_ROW: usize = 8;

/// Reads dealer and costing rows from fixed positions of the
/// `gold_price_table`, using the `td.premium`/`td.price` and
/// `td.buy`/`td.sell` cells. Tables with 3 rows or fewer are ignored.
pub struct FixedRowScan;

impl ExtractionStrategy for FixedRowScan {
    fn name(&self) -> &'static str {
        "fixed-row"
    }

    fn extract(&self, doc: &HtmlDocument) -> RawSnapshot {
        let rows = doc.find_all(ROWS);
        if rows.len() <= 3 {
            return RawSnapshot::default();
        }

        let dealer = |i: usize| rows.get(i).map(|r| dealer_quote(r, "td.premium", "td.price"));
        let costing = |i: usize| rows.get(i).map(|r| costing_band(r, "td.buy", "td.sell"));

        RawSnapshot {
            gold_sell: dealer(GOLD_SELL_ROW),
            gold_buy: dealer(GOLD_BUY_ROW),
            gold_gst: dealer(GOLD_GST_ROW),
            gold_costing: costing(GOLD_COSTING_ROW),
            silver_costing: costing(SILVER_COSTING_ROW),
            ..Default::default()
        }
    }
}
