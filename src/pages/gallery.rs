//! Gallery page - the portfolio gallery section.

use dioxus::prelude::*;

use crate::components::gallery::GalleryListBlock;
use crate::context::use_gallery_content;

/// Gallery section: heading, description and the filterable grid.
#[component]
pub fn GalleryPage() -> Element {
    let content = use_gallery_content();

    rsx! {
        main { class: "page",
            section { class: "gallery-section", id: "gallery",
                header { class: "gallery-section__header",
                    h2 { class: "section-title", "{content.title}" }
                    if !content.description.is_empty() {
                        p { class: "section-description", "{content.description}" }
                    }
                }

                GalleryListBlock {
                    items: content.items.clone(),
                    categories: content.categories.clone(),
                    filters: content.filters.clone(),
                    empty_message: content.empty_filter_message.clone(),
                }
            }
        }
    }
}
