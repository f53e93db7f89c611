use interface::{Quote, RawSnapshot};

use super::{costing_band, dealer_quote, first_decimal, text_of, ExtractionStrategy};
use crate::document::HtmlDocument;

/// Reads pages that tag every block with a semantic class
/// (`.gold_rates`, `.gold_sell`, `.silver_costing`, ...) instead of label
/// text. A group is reported only when its block exists.
pub struct ClassScopedScan;

impl ExtractionStrategy for ClassScopedScan {
    fn name(&self) -> &'static str {
        "class-scoped"
    }

    fn extract(&self, doc: &HtmlDocument) -> RawSnapshot {
        RawSnapshot {
            gold: spot_block(doc, ".main_rows > .gold_rates"),
            silver: spot_block(doc, ".main_rows > .silver_rates"),
            inr: spot_block(doc, ".main_rows > .inr_rates"),
            gold_sell: doc
                .first(".gold_sell")
                .map(|n| dealer_quote(&n, ".premium", ".price")),
            gold_buy: doc
                .first(".gold_buy")
                .map(|n| dealer_quote(&n, ".premium", ".price")),
            gold_gst: doc
                .first(".gold_gst")
                .map(|n| dealer_quote(&n, ".premium", ".price")),
            gold_costing: doc
                .first(".gold_costing")
                .map(|n| costing_band(&n, ".buy", ".sell")),
            silver_costing: doc
                .first(".silver_costing")
                .map(|n| costing_band(&n, ".buy", ".sell")),
        }
    }
}

fn spot_block(doc: &HtmlDocument, css: &str) -> Option<Quote> {
    let block = doc.first(css)?;
    let price = match block.find(".price") {
        Some(n) => n.text(),
        None => first_decimal(&block.text()).unwrap_or_default().to_string(),
    };

    Some(Quote {
        price,
        high: text_of(block.find(".high")),
        low: text_of(block.find(".low")),
    })
}
