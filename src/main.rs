use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use shelfq::catalog::Catalog;
use shelfq::config::Config;
use shelfq::logging::init_tracing;
use shelfq::queue::QueueStore;
use shelfq::ui::runtime::{run, RunSettings};

#[derive(Debug, Parser)]
#[command(name = "shelfq", version, about = "Terminal tutorial library and queue")]
struct Cli {
    /// Catalog JSON file to load instead of the embedded data set.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Milliseconds between simulated update ticks.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Milliseconds between a tick and its commit.
    #[arg(long)]
    commit_delay_ms: Option<u64>,

    /// Disable the background update simulation (manual keys still work).
    #[arg(long)]
    no_auto_updates: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load().context("loading configuration")?;
    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.updates.interval_ms = interval_ms;
    }
    if let Some(commit_delay_ms) = cli.commit_delay_ms {
        config.updates.commit_delay_ms = commit_delay_ms;
    }
    if cli.no_auto_updates {
        config.updates.auto = false;
    }
    config
        .validate()
        .context("validating configuration overrides")?;

    let catalog = match &config.data_path {
        Some(path) => Catalog::load_from(path).context("loading catalog")?,
        None => Catalog::embedded().context("loading embedded catalog")?,
    };
    tracing::info!(
        tutorials = catalog.tutorial_count(),
        queued = catalog.queued_ids().len(),
        "catalog loaded"
    );

    let store = QueueStore::new(catalog);
    let settings = RunSettings {
        cadence: config.updates.cadence(),
        auto_updates: config.updates.auto,
    };

    run(store, settings).context("running UI")?;
    Ok(())
}
