use tracing::debug;

use interface::{RateError, RawSnapshot};

use crate::document::HtmlDocument;
use crate::strategy::{
    ClassScopedScan, ExtractionStrategy, FixedRowScan, LabeledRowScan, PositionalCellScan,
};

/// Runs its strategies in order and unions their output group by group.
/// The first strategy to report a group owns it.
pub struct HtmlSnapshotExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl HtmlSnapshotExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Parses `html` and extracts. Fails only when the page cannot be turned
    /// into a document at all.
    pub fn extract_html(&self, html: &str) -> Result<RawSnapshot, RateError> {
        let doc = HtmlDocument::parse(html)?;
        Ok(self.extract(&doc))
    }

    pub fn extract(&self, doc: &HtmlDocument) -> RawSnapshot {
        let mut raw = RawSnapshot::default();
        for strategy in &self.strategies {
            let found = strategy.extract(doc);
            debug!(
                "strategy {} found {} groups",
                strategy.name(),
                found.group_count()
            );
            raw.absorb(found);
        }
        raw
    }
}

impl Default for HtmlSnapshotExtractor {
    /// Positional, labeled, class-scoped, then fixed-row.
    fn default() -> Self {
        Self::new(vec![
            Box::new(PositionalCellScan),
            Box::new(LabeledRowScan),
            Box::new(ClassScopedScan),
            Box::new(FixedRowScan),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE_PAGE: &str = r#"
        <html><body>
        <table>
          <tr class="main_rows">
            <td>GOLD ($) 3040.12 <div class="rate_hl">3047.35|3021.90</div></td>
            <td>SILVER ($) 33.25 <div class="rate_hl">33.55|32.93</div></td>
            <td>INR (&#8377;) 86.040 <div class="rate_hl">86.301|85.874</div></td>
          </tr>
        </table>
        <table class="gold_price_table">
          <tr><th>PRODUCT</th><th>PREMIUM</th><th>PRICE</th></tr>
          <tr><td>GOLD 995 SELL</td><td class="premium">1575</td><td class="price">89810</td></tr>
          <tr><td>GOLD 995 BUY</td><td class="premium">1390</td><td class="price">89610</td></tr>
          <tr><td>GOLD 995 GST</td><td class="premium">2555</td><td class="price">90790</td></tr>
          <tr><td>GOLD COSTING</td><td class="buy">88215</td><td class="sell">88235</td></tr>
          <tr><td>SILVER COSTING</td><td class="buy">98555</td><td class="sell">98580</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn test_full_page() {
        let raw = HtmlSnapshotExtractor::default()
            .extract_html(LIVE_PAGE)
            .unwrap();

        assert_eq!(raw.group_count(), 8);
        assert_eq!(raw.gold.as_ref().unwrap().price, "3040.12");
        assert_eq!(raw.inr.as_ref().unwrap().price, "86.040");
        assert_eq!(raw.gold_sell.as_ref().unwrap().price, "89810");
        assert_eq!(raw.silver_costing.as_ref().unwrap().sell, "98580");
    }

    #[test]
    fn test_main_cells_only() {
        let html = r#"<table><tr class="main_rows">
                        <td>Gold 3040.12</td><td>Silver 33.20</td><td>INR 86.020</td>
                      </tr></table>"#;
        let raw = HtmlSnapshotExtractor::default().extract_html(html).unwrap();

        let gold = raw.gold.unwrap();
        assert_eq!(gold.price, "3040.12");
        assert_eq!(gold.high, "");
        assert_eq!(gold.low, "");
        assert!(raw.gold_sell.is_none());
        assert!(raw.gold_buy.is_none());
        assert!(raw.gold_gst.is_none());
        assert!(raw.gold_costing.is_none());
        assert!(raw.silver_costing.is_none());
    }

    #[test]
    fn test_earlier_strategy_wins_a_group() {
        // the labeled row and the fixed-row table both describe goldSell
        let html = r#"
            <table class="gold_price_table">
              <tr><td>x</td></tr><tr><td>x</td></tr><tr><td>x</td></tr>
              <tr><td>GOLD 995 SELL</td><td>1111</td><td>2222</td>
                  <td class="premium">9999</td><td class="price">8888</td></tr>
            </table>"#;
        let raw = HtmlSnapshotExtractor::default().extract_html(html).unwrap();

        let sell = raw.gold_sell.unwrap();
        assert_eq!(sell.premium, "1111");
        assert_eq!(sell.price, "2222");

        let fixed_first = HtmlSnapshotExtractor::new(vec![
            Box::new(FixedRowScan),
            Box::new(LabeledRowScan),
        ]);
        let sell = fixed_first.extract_html(html).unwrap().gold_sell.unwrap();
        assert_eq!(sell.premium, "9999");
        assert_eq!(sell.price, "8888");
    }

    #[test]
    fn test_order_follows_construction() {
        let html = r#"<table><tr class="main_rows">
                        <td class="gold_rates">Gold 3040.12 <span class="price">3999.99</span></td>
                      </tr></table>"#;

        let positional_first = HtmlSnapshotExtractor::new(vec![
            Box::new(PositionalCellScan),
            Box::new(ClassScopedScan),
        ]);
        let raw = positional_first.extract_html(html).unwrap();
        assert_eq!(raw.gold.unwrap().price, "3040.12");

        let class_first = HtmlSnapshotExtractor::new(vec![
            Box::new(ClassScopedScan),
            Box::new(PositionalCellScan),
        ]);
        assert_eq!(class_first.strategy_names(), vec!["class-scoped", "positional"]);
        let raw = class_first.extract_html(html).unwrap();
        assert_eq!(raw.gold.unwrap().price, "3999.99");
    }

    #[test]
    fn test_unrecognized_markup_is_not_an_error() {
        let raw = HtmlSnapshotExtractor::default()
            .extract_html("<html><body><h1>Closed for Diwali</h1></body></html>")
            .unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_no_markup_is_an_error() {
        let err = HtmlSnapshotExtractor::default()
            .extract_html("")
            .unwrap_err();
        assert!(matches!(err, RateError::MalformedDocument(_)));
    }
}
