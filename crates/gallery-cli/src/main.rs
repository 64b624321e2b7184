//! Gallery CLI
//!
//! Thin wrapper around gallery-core for inspecting content from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Summary of the content document
//! gallery info
//!
//! # Items visible under a set of filters
//! gallery list --category projects --style modern
//!
//! # Detail view of one item
//! gallery show 3
//!
//! # Options of one dimension
//! gallery options style
//!
//! # Check a content document for unknown option ids and duplicate items
//! gallery --content ./content.json validate
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use gallery_core::{
    filter_items, ActiveFilters, Dimension, FilterValue, GalleryContent, ItemDetail,
};

/// Gallery - filterable portfolio gallery
#[derive(Parser)]
#[command(name = "gallery")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and filter portfolio gallery content")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Content document (default: per-user content.json, else built-in content)
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show content summary
    Info,

    /// List items passing the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view of an item
    Show {
        /// Item ID
        id: String,

        /// Print the detail as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the options of a filter dimension
    Options {
        /// category, subcategory, style, location or status
        dimension: String,
    },

    /// Check the content document for inconsistencies
    Validate,
}

/// One flag per filter dimension; omitted or "all" means no constraint
#[derive(Args)]
struct FilterArgs {
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "all")]
    subcategory: String,
    #[arg(long, default_value = "all")]
    style: String,
    #[arg(long, default_value = "all")]
    location: String,
    #[arg(long, default_value = "all")]
    status: String,
}

impl FilterArgs {
    fn to_active_filters(&self) -> ActiveFilters {
        ActiveFilters {
            category: FilterValue::from(self.category.as_str()),
            subcategory: FilterValue::from(self.subcategory.as_str()),
            style: FilterValue::from(self.style.as_str()),
            location: FilterValue::from(self.location.as_str()),
            status: FilterValue::from(self.status.as_str()),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let content = GalleryContent::resolve(cli.content.as_deref())
        .context("Failed to load gallery content")?;

    match cli.command {
        Commands::Info => {
            println!("{}", content.title);
            if !content.description.is_empty() {
                println!("  {}", content.description);
            }
            println!();
            println!("Items: {}", content.items.len());
            println!();
            println!("Filters:");
            for dimension in Dimension::ALL {
                let count = content.options_for(dimension).len();
                if count == 0 {
                    println!("  {} ({}): no options, hidden", dimension.label(), dimension);
                } else {
                    println!("  {} ({}): {} options", dimension.label(), dimension, count);
                }
            }
        }

        Commands::List { filters, json } => {
            let active = filters.to_active_filters();
            let visible = filter_items(&content.items, &active);
            tracing::debug!(visible = visible.len(), "Applied filters");

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else if visible.is_empty() {
                println!("{}", content.empty_filter_message);
            } else {
                println!("Items ({} of {}):", visible.len(), content.items.len());
                println!();
                for item in visible {
                    println!("  {} {} [{}]", item.id, item.title, item.category);
                }
            }
        }

        Commands::Show { id, json } => {
            let item = content.find_item(&id)?;
            let detail = ItemDetail::project(item, &content.filters);

            if json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                println!("Item: {}", detail.title);
                println!("  ID: {}", item.id);
                println!(
                    "  Category: {} ({})",
                    content.option_name(Dimension::Category, &item.category),
                    item.category
                );
                println!("  Image: {}", detail.image);
                if !detail.description.is_empty() {
                    println!("  Description: {}", detail.description);
                }
                for badge in &detail.badges {
                    println!("  {}: {}", badge.label, badge.name);
                }
            }
        }

        Commands::Options { dimension } => {
            let dimension: Dimension = dimension.parse()?;
            let options = content.options_for(dimension);
            if options.is_empty() {
                println!("No options for {}.", dimension);
            } else {
                println!("{} ({}):", dimension.label(), options.len());
                for option in options {
                    println!("  {} {}", option.id, option.name);
                }
            }
        }

        Commands::Validate => {
            let warnings = content.validate();
            if warnings.is_empty() {
                println!("Content OK ({} items)", content.items.len());
            } else {
                for warning in &warnings {
                    println!("warning: {}", warning);
                }
                bail!("{} content warning(s)", warnings.len());
            }
        }
    }

    Ok(())
}
