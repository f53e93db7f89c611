use std::time::Duration;

use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "oracle", about = "Republishes live bullion rates as JSON")]
pub struct OracleConfig {
    /// Port the HTTP server listens on
    #[structopt(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Rate page to scrape
    #[structopt(long, env = "UPSTREAM_URL", default_value = "http://www.shriganeshbullion.com/LiveRates.html")]
    pub upstream_url: String,

    /// Seconds between scrapes
    #[structopt(long, env = "COLLECT_INTERVAL_SECS", default_value = "10")]
    pub collect_interval_secs: u64,

    /// Upper bound on one upstream request, in seconds
    #[structopt(long, env = "FETCH_TIMEOUT_SECS", default_value = "10")]
    pub fetch_timeout_secs: u64,
}

impl OracleConfig {
    pub fn collect_interval(&self) -> Duration {
        Duration::from_secs(self.collect_interval_secs.max(1))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }
}
