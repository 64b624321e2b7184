//! Content context for the gallery app.
//!
//! The content document is loaded once in `main` and handed to the launch
//! builder as an `Arc<GalleryContent>`. Components read it with
//! [`use_gallery_content`] instead of touching any global.
//!
//! ## Usage
//!
//! ```ignore
//! let content = use_gallery_content();
//! rsx! { h2 { "{content.title}" } }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use gallery_core::GalleryContent;

/// Shared, immutable content for the whole window.
pub type SharedContent = Arc<GalleryContent>;

/// Hook to access the gallery content from context.
pub fn use_gallery_content() -> SharedContent {
    use_context::<SharedContent>()
}
