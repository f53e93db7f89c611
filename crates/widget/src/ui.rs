use std::fmt::Write as _;

use chrono::{DateTime, Local};
use tracing::info;

use interface::{Field, FieldChange, RateSnapshot};

use crate::controller::Mode;

/// Everything the UI needs to redraw after one cycle.
#[derive(Debug)]
pub struct DisplayUpdate<'a> {
    pub snapshot: &'a RateSnapshot,
    /// Leaves whose value differs from what was on screen before.
    pub changes: &'a [FieldChange],
    pub mode: Mode,
    pub updated_at: DateTime<Local>,
}

impl DisplayUpdate<'_> {
    pub fn last_updated_label(&self) -> String {
        let time = self.updated_at.format("%H:%M:%S");
        match self.mode {
            Mode::Simulated => format!("Last updated: {time} (Simulated data)"),
            _ => format!("Last updated: {time}"),
        }
    }

    pub fn is_changed(&self, field: Field) -> bool {
        self.changes.iter().any(|c| c.field == field)
    }
}

/// Receives every snapshot the controller decides to show.
pub trait UiUpdater: Send {
    fn update(&mut self, update: &DisplayUpdate<'_>);
}

/// Renders the board as plain text. Changed leaves are marked with `*`.
pub fn render_board(update: &DisplayUpdate<'_>) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let mark = if update.is_changed(field) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{mark} {:<22} {:>12}",
            field.key(),
            update.snapshot.get(field)
        );
    }
    out.push_str(&update.last_updated_label());
    out
}

/// Writes the board to stdout and logs each emphasized change.
#[derive(Debug, Default)]
pub struct ConsoleBoard {
    redraws: usize,
}

impl ConsoleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl UiUpdater for ConsoleBoard {
    fn update(&mut self, update: &DisplayUpdate<'_>) {
        for change in update.changes {
            info!("{}: {} -> {}", change.field, change.old, change.new);
        }
        println!("{}\n", render_board(update));
        self.redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 12, 30, 5).unwrap()
    }

    #[test]
    fn test_last_updated_label() {
        let snapshot = RateSnapshot::fallback();
        let mut update = DisplayUpdate {
            snapshot: &snapshot,
            changes: &[],
            mode: Mode::Live,
            updated_at: at_noon(),
        };
        assert_eq!(update.last_updated_label(), "Last updated: 12:30:05");

        update.mode = Mode::Simulated;
        assert_eq!(
            update.last_updated_label(),
            "Last updated: 12:30:05 (Simulated data)"
        );
    }

    #[test]
    fn test_render_marks_only_changed_fields() {
        let previous = RateSnapshot::fallback();
        let mut snapshot = previous.clone();
        snapshot.gold.price = "3040.12".to_string();
        let changes = snapshot.changes_from(Some(&previous));

        let board = render_board(&DisplayUpdate {
            snapshot: &snapshot,
            changes: &changes,
            mode: Mode::Live,
            updated_at: at_noon(),
        });

        let marked: Vec<&str> = board.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("gold.price"));
        assert!(marked[0].contains("3040.12"));
        assert!(board.ends_with("Last updated: 12:30:05"));
    }

    #[test]
    fn test_console_board_counts_redraws() {
        let snapshot = RateSnapshot::fallback();
        let mut board = ConsoleBoard::new();
        board.update(&DisplayUpdate {
            snapshot: &snapshot,
            changes: &[],
            mode: Mode::Idle,
            updated_at: at_noon(),
        });
        assert_eq!(board.redraws(), 1);
    }
}
