use dioxus::prelude::*;

use crate::pages::GalleryPage;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Gallery section with filters, grid and detail dialog
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    GalleryPage {},
}

/// Root application component.
///
/// Provides global styles and routing. Gallery content arrives through the
/// launch context, see [`crate::context::use_gallery_content`].
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
