#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gallery_core::GalleryContent;

/// Gallery - portfolio gallery viewer
#[derive(Parser, Debug)]
#[command(name = "gallery-desktop")]
#[command(about = "Filterable portfolio gallery")]
struct Args {
    /// Content document (default: per-user content.json, else built-in content)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let content = GalleryContent::resolve(args.content.as_deref())
        .context("Failed to load gallery content")?;

    for warning in content.validate() {
        tracing::warn!("Gallery content: {}", warning);
    }

    let title = if content.title.is_empty() {
        "Gallery".to_string()
    } else {
        content.title.clone()
    };

    tracing::info!("Starting '{}' with {} items", title, content.items.len());

    // Window size: wide enough for a three-column grid
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(Arc::new(content))
        .launch(app::App);

    Ok(())
}
