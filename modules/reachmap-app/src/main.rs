//! Reachmap: country-level internet, 5G, and 3G coverage on a desktop map.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reachmap_common::config::AppConfig;

mod app;
mod hit;
mod panel;
mod plugins;
mod tessellate;
mod tiles;

use app::ReachmapApp;

/// Interactive world map of internet, 5G, and 3G coverage by country.
#[derive(Parser, Debug)]
#[command(name = "reachmap", version, about)]
struct Args {
    /// Base URL serving the GeoJSON datasets.
    #[arg(long)]
    data_url: Option<String>,

    /// Directory dataset downloads are saved into.
    #[arg(long)]
    download_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reachmap=info".parse()?)
                .add_directive("coverage_client=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(data_url) = args.data_url {
        config.data_url = data_url;
    }
    if let Some(download_dir) = args.download_dir {
        config.download_dir = download_dir;
    }

    info!(data_url = %config.data_url, "Reachmap starting");

    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Reachmap"),
        ..Default::default()
    };
    eframe::run_native(
        "Reachmap",
        options,
        Box::new(move |cc| Ok(Box::new(ReachmapApp::new(config, runtime, &cc.egui_ctx)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
