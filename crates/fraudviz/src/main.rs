//! Main entry point for fraudviz.

use fraudviz::{run, AppResult};
use fraudviz_config::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> AppResult<()> {
    // Diagnostics go to stderr; stdout carries the progress lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fraudviz=info,fraudviz_charts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting fraudviz {}", env!("CARGO_PKG_VERSION"));

    let config = Config::default();
    let stdout = io::stdout();
    let mut console = stdout.lock();

    match run(config, &mut console) {
        Ok(paths) => {
            info!(count = paths.len(), "done");
            Ok(())
        }
        Err(e) => {
            error!("Chart generation failed: {}", e);
            Err(e)
        }
    }
}
