//! # thop - Terminal Host Monitor
//!
//! Per-core CPU load, memory usage, and a navigable process table with a
//! signal menu, refreshed on a fixed interval.

mod app;
mod config;
pub mod constants;
mod error;
mod logging;
mod models;
mod monitor;
mod ui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use config::Config;
use models::SignalCatalog;
use monitor::SystemCollector;
use ui::{TerminalInput, TerminalSink};

/// thop - Terminal Host Monitor
#[derive(Parser, Debug)]
#[command(
    name = "thop",
    version,
    about = "Per-core CPU, memory and process monitor with signal delivery"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    logging::init();
    let config = Config::load();
    tracing::debug!(?config, "configuration loaded");

    let catalog = SignalCatalog::platform();
    let mut app = app::App::new(&config, SystemCollector::new(), catalog);

    let sink = match TerminalSink::enter(config.cores_per_row) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!(error = %e, "terminal initialization failed");
            return Err(e).context("failed to initialize the terminal");
        }
    };

    if let Err(e) = app.run(TerminalInput::new(), sink).await {
        tracing::error!(error = %e, "dashboard aborted");
        return Err(e.into());
    }
    Ok(())
}
