use std::{path::PathBuf, time::Duration};

use structopt::StructOpt;

use crate::controller::ControllerConfig;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "widget", about = "Live bullion rate board")]
pub struct WidgetOptions {
    /// Rates endpoint served by the oracle
    #[structopt(long, env = "RATES_ENDPOINT", default_value = "http://localhost:3000/api/rates")]
    pub endpoint: String,

    /// Upper bound on one fetch, in seconds
    #[structopt(long, env = "FETCH_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    /// Directory for the daily log file
    #[structopt(long, env = "LOG_DIR", parse(from_os_str), default_value = "logs")]
    pub log_dir: PathBuf,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, StructOpt)]
pub enum Command {
    /// Keep the board refreshed until interrupted
    Watch {
        /// Seconds between real fetches
        #[structopt(long, default_value = "30")]
        refresh_secs: u64,

        /// Seconds between retries while showing simulated data
        #[structopt(long, default_value = "5")]
        simulate_secs: u64,
    },
    /// Fetch once, print the board and exit
    Once,
}

impl WidgetOptions {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn controller_config(&self) -> ControllerConfig {
        let defaults = ControllerConfig::default();
        let (refresh_interval, simulate_interval) = match self.command {
            Command::Watch {
                refresh_secs,
                simulate_secs,
            } => (
                Duration::from_secs(refresh_secs.max(1)),
                Duration::from_secs(simulate_secs.max(1)),
            ),
            Command::Once => (defaults.refresh_interval, defaults.simulate_interval),
        };
        ControllerConfig {
            refresh_interval,
            simulate_interval,
            fetch_timeout: self.fetch_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_defaults() {
        let options = WidgetOptions::from_iter_safe(["widget", "watch"]).unwrap();
        assert_eq!(options.endpoint, "http://localhost:3000/api/rates");
        assert_eq!(options.log_dir, PathBuf::from("logs"));

        let config = options.controller_config();
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
        assert_eq!(config.simulate_interval, Duration::from_secs(5));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_watch_overrides() {
        let options = WidgetOptions::from_iter_safe([
            "widget",
            "--endpoint",
            "http://oracle.local/.netlify/functions/scrape",
            "--timeout-secs",
            "0",
            "watch",
            "--refresh-secs",
            "60",
            "--simulate-secs",
            "2",
        ])
        .unwrap();

        let config = options.controller_config();
        assert!(options.endpoint.ends_with("/scrape"));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.simulate_interval, Duration::from_secs(2));
        assert_eq!(config.fetch_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(WidgetOptions::from_iter_safe(["widget"]).is_err());
        let options = WidgetOptions::from_iter_safe(["widget", "once"]).unwrap();
        assert!(matches!(options.command, Command::Once));
    }
}
