use color_eyre::eyre;
use structopt::StructOpt;
use tracing::info;

use widget::config::{Command, WidgetOptions};
use widget::{ConsoleBoard, HttpTransport, PollingController};

// .env is loaded by the library on startup

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // init error reporting
    color_eyre::install()?;

    let options = WidgetOptions::from_args();

    // init logging
    let _guards = widget::logger::init_tracing(&options.log_dir, "widget")?;

    let transport = HttpTransport::new(&options.endpoint, options.fetch_timeout())?;
    info!("polling {}", transport.endpoint());

    let mut controller =
        PollingController::new(transport, ConsoleBoard::new(), options.controller_config());

    match options.command {
        Command::Watch { .. } => {
            let config = controller.config();
            info!(
                "refreshing every {}s, retrying every {}s while simulated",
                config.refresh_interval.as_secs(),
                config.simulate_interval.as_secs()
            );
            controller
                .run_until(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!("failed to listen for ctrl-c: {}", e);
                    }
                })
                .await;
        }
        Command::Once => {
            let mode = controller.refresh().await;
            info!("board shown in {} mode", mode);
        }
    }

    Ok(())
}
