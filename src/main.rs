use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nn_curve_visualizer::app::VisualizerApp;
use nn_curve_visualizer::{AppConfig, CANVAS_SIZE, Result};

/// Interactive graph of y = tanh(w3·tanh(w1·x+b1) + w4·tanh(w2·x+b2) + b3)
#[derive(Parser)]
#[command(name = "nn-curve-visualizer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    info!(interval_ms = config.redraw_interval_ms, "starting visualizer");

    let side = CANVAS_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([side + 260.0, side + 140.0]),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(VisualizerApp::new(cc, config)))),
    )?;

    info!("visualizer closed");
    Ok(())
}
