//! Gallery Core Library
//!
//! Content model and filter engine behind the portfolio gallery section.
//!
//! ## Overview
//!
//! The gallery shows a grid of pictures that can be narrowed down by five
//! independent dropdowns: category, subcategory, style, location and status.
//! Clicking a picture opens a detail dialog; pictures in the projects category
//! also show their attributes there, resolved to display names.
//!
//! All content comes from one static JSON document. This crate parses it,
//! filters it and projects items for the detail view; rendering lives in the
//! `gallery-ui` crate and the desktop app.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gallery_core::{ActiveFilters, Dimension, GalleryContent, filter_items};
//!
//! let content = GalleryContent::embedded()?;
//! let filters = ActiveFilters::new()
//!     .with(Dimension::Category, "projects")
//!     .with(Dimension::Style, "modern");
//!
//! for item in filter_items(&content.items, &filters) {
//!     println!("{}: {}", item.id, item.title);
//! }
//! ```

pub mod content;
pub mod detail;
pub mod dimension;
pub mod error;
pub mod filter;
pub mod types;
pub mod view;

// Re-exports
pub use content::{default_content_path, ContentWarning, GalleryContent};
pub use detail::{BadgeVariant, DetailBadge, ItemDetail};
pub use dimension::{ActiveFilters, Dimension, FilterValue};
pub use error::{GalleryError, GalleryResult};
pub use filter::{controls_from, filter_controls, filter_items, filter_positions, FilterControl};
pub use types::*;
pub use view::GalleryViewState;
