use std::sync::OnceLock;

use regex::Regex;

use interface::{CostingBand, DealerQuote, RawSnapshot};

use crate::document::{HtmlDocument, Node};

pub mod class_scoped;
pub mod fixed_row;
pub mod labeled;
pub mod positional;

pub use class_scoped::ClassScopedScan;
pub use fixed_row::FixedRowScan;
pub use labeled::LabeledRowScan;
pub use positional::PositionalCellScan;

/// One way of reading rates off a page.
///
/// A strategy reports a group only when it found the element that group is
/// anchored on; leaves it could not read are left empty for the merger.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, doc: &HtmlDocument) -> RawSnapshot;
}

/// First `digits.digits` run in `text`.
pub(crate) fn first_decimal(text: &str) -> Option<&str> {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL
        .get_or_init(|| Regex::new(r"\d+\.\d+").expect("decimal regex is valid"))
        .find(text)
        .map(|m| m.as_str())
}

pub(crate) fn text_of(node: Option<Node<'_>>) -> String {
    node.map(|n| n.text()).unwrap_or_default()
}

pub(crate) fn dealer_quote(node: &Node<'_>, premium: &str, price: &str) -> DealerQuote {
    DealerQuote {
        premium: text_of(node.find(premium)),
        price: text_of(node.find(price)),
    }
}

pub(crate) fn costing_band(node: &Node<'_>, buy: &str, sell: &str) -> CostingBand {
    CostingBand {
        buy: text_of(node.find(buy)),
        sell: text_of(node.find(sell)),
    }
}
