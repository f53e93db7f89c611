use interface::{Quote, RawSnapshot};

use super::{first_decimal, ExtractionStrategy};
use crate::document::{HtmlDocument, Node};

const MAIN_ROWS: &str = ".main_rows";
const CELL: &str = "td";
const RANGE: &str = ".rate_hl";

/// Reads gold, silver and INR from the 1st, 2nd and 3rd cell of the first
/// `.main_rows` row. The price is the first decimal in the cell text, the
/// range comes from the cell's `high|low` element.
pub struct PositionalCellScan;

impl ExtractionStrategy for PositionalCellScan {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn extract(&self, doc: &HtmlDocument) -> RawSnapshot {
        let Some(row) = doc.first(MAIN_ROWS) else {
            return RawSnapshot::default();
        };
        let cells = row.find_all(CELL);

        RawSnapshot {
            gold: cells.first().map(quote_from_cell),
            silver: cells.get(1).map(quote_from_cell),
            inr: cells.get(2).map(quote_from_cell),
            ..Default::default()
        }
    }
}

fn quote_from_cell(cell: &Node<'_>) -> Quote {
    let text = cell.text();
    let (high, low) = cell
        .find(RANGE)
        .map(|n| split_range(&n.text()))
        .unwrap_or_default();

    Quote {
        price: first_decimal(&text).unwrap_or_default().to_string(),
        high,
        low,
    }
}

fn split_range(text: &str) -> (String, String) {
    let mut parts = text.split('|').map(str::trim);
    let high = parts.next().unwrap_or_default().to_string();
    let low = parts.next().unwrap_or_default().to_string();
    (high, low)
}
