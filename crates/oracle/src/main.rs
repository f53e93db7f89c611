use std::sync::Arc;

use color_eyre::eyre;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use extractor::{FallbackMerger, HtmlSnapshotExtractor, RateSource, UpstreamClient};
use oracle::{config::OracleConfig, server::AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // init error reporting
    color_eyre::install()?;

    dotenv::dotenv().ok();

    // init logging
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = OracleConfig::from_args();
    info!("starting oracle: {:?}", config);

    let state = Arc::new(AppState::new());

    let source: Arc<dyn RateSource> =
        Arc::new(UpstreamClient::new(&config.upstream_url, config.fetch_timeout())?);

    // start background collector
    oracle::collector::start_collect_loop(
        source,
        HtmlSnapshotExtractor::default(),
        FallbackMerger::default(),
        state.clone(),
        config.collect_interval(),
    );

    oracle::server::serve(state, config.port).await?;

    Ok(())
}
