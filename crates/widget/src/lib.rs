pub mod config;
pub mod controller;
pub mod logger;
pub mod simulate;
pub mod transport;
pub mod ui;

pub use controller::{ControllerConfig, Mode, PollingController};
pub use simulate::VariationSimulator;
pub use transport::{HttpTransport, RateTransport};
pub use ui::{ConsoleBoard, DisplayUpdate, UiUpdater};

use std::sync::Once;

static INIT: Once = Once::new();

/// Loads `.env` once per process.
fn init() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
    });
}

#[ctor::ctor]
fn setup() {
    init();
}
