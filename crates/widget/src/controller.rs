use std::{fmt, future::Future, time::Duration};

use chrono::Local;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::time::{interval_at, timeout, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use interface::{RateError, RateSnapshot};

use crate::simulate::VariationSimulator;
use crate::transport::RateTransport;
use crate::ui::{DisplayUpdate, UiUpdater};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Nothing fetched yet.
    Idle,
    /// The last cycle showed real data.
    Live,
    /// The last cycle showed synthesized data.
    Simulated,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Idle => "idle",
            Mode::Live => "live",
            Mode::Simulated => "simulated",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub refresh_interval: Duration,
    pub simulate_interval: Duration,
    pub fetch_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(30),
            simulate_interval: Duration::from_secs(5),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

/// Decides every cycle whether the UI shows fetched or simulated rates.
///
/// All state lives in this one value and is only touched through `&mut self`,
/// so the refresh cycle and the simulated tick are serialized by whoever owns
/// the controller. [`run_until`](Self::run_until) drives both timers from a
/// single task.
pub struct PollingController<T, U, R = StdRng> {
    transport: T,
    ui: U,
    simulator: VariationSimulator,
    rng: R,
    config: ControllerConfig,
    mode: Mode,
    last_good: RateSnapshot,
    displayed: Option<RateSnapshot>,
}

impl<T: RateTransport, U: UiUpdater> PollingController<T, U, StdRng> {
    pub fn new(transport: T, ui: U, config: ControllerConfig) -> Self {
        Self::with_rng(transport, ui, config, StdRng::from_entropy())
    }
}

impl<T: RateTransport, U: UiUpdater, R: Rng> PollingController<T, U, R> {
    pub fn with_rng(transport: T, ui: U, config: ControllerConfig, rng: R) -> Self {
        Self {
            transport,
            ui,
            simulator: VariationSimulator::default(),
            rng,
            config,
            mode: Mode::Idle,
            last_good: RateSnapshot::fallback(),
            displayed: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Seed for the next simulation: the latest fetched or simulated snapshot.
    pub fn last_good_snapshot(&self) -> &RateSnapshot {
        &self.last_good
    }

    pub fn displayed(&self) -> Option<&RateSnapshot> {
        self.displayed.as_ref()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Shows the fallback board right away, then makes the first real attempt.
    pub async fn start(&mut self) -> Mode {
        self.push(RateSnapshot::fallback());
        self.refresh().await
    }

    /// One real-fetch cycle. A failed or timed out fetch is replaced with a
    /// simulation seeded from the previous snapshot.
    pub async fn refresh(&mut self) -> Mode {
        let fetched = match timeout(self.config.fetch_timeout, self.transport.fetch_rates()).await
        {
            Ok(result) => result,
            Err(_) => Err(RateError::Timeout(self.config.fetch_timeout)),
        };

        match fetched {
            Ok(snapshot) => {
                if self.mode != Mode::Live {
                    info!("live rates available, leaving {} mode", self.mode);
                }
                self.mode = Mode::Live;
                self.last_good = snapshot.clone();
                self.push(snapshot);
            }
            Err(e) => {
                warn!("rate fetch failed, showing simulated data: {}", e);
                let next = self.simulator.simulate(&self.last_good, &mut self.rng);
                self.mode = Mode::Simulated;
                self.last_good = next.clone();
                self.push(next);
            }
        }
        self.mode
    }

    /// Short-cadence retry, a no-op unless the board is showing simulated data.
    pub async fn simulated_tick(&mut self) -> Mode {
        if self.mode != Mode::Simulated {
            return self.mode;
        }
        self.refresh().await
    }

    /// Starts, then runs both cycles until `shutdown` resolves.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let ControllerConfig {
            refresh_interval,
            simulate_interval,
            ..
        } = self.config;

        self.start().await;

        let mut refresh = interval_at(Instant::now() + refresh_interval, refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick = interval_at(Instant::now() + simulate_interval, simulate_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("polling stopped in {} mode", self.mode);
                    break;
                }
                _ = refresh.tick() => {
                    self.refresh().await;
                }
                _ = tick.tick() => {
                    self.simulated_tick().await;
                }
            }
        }
    }

    fn push(&mut self, snapshot: RateSnapshot) {
        let changes = snapshot.changes_from(self.displayed.as_ref());
        debug!("{} fields changed ({} mode)", changes.len(), self.mode);
        self.ui.update(&DisplayUpdate {
            snapshot: &snapshot,
            changes: &changes,
            mode: self.mode,
            updated_at: Local::now(),
        });
        self.displayed = Some(snapshot);
    }
}
