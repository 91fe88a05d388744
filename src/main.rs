mod app;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use focus_trail::style::StyleConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file with `head_color` and `tail_color` entries.
    #[arg(long)]
    style: Option<PathBuf>,
    /// Overrides the head color from the style file.
    #[arg(long)]
    head_color: Option<String>,
    /// Overrides the tail color from the style file.
    #[arg(long)]
    tail_color: Option<String>,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.style {
        Some(path) => StyleConfig::load(path)?,
        None => StyleConfig::default(),
    }
    .with_overrides(args.head_color, args.tail_color);
    let palette = config.palette().context("invalid style configuration")?;
    info!(head = %config.head_color, tail = %config.tail_color, "starting focus-trail");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([560.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "focus-trail",
        options,
        Box::new(move |cc| Ok(Box::new(app::FocusTrailApp::new(cc, palette)))),
    )
    .map_err(|error| anyhow!("window terminated with an error: {error}"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("focus_trail={level},warn")));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
