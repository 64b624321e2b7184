//! Gallery Card Component
//!
//! Thumbnail with a title overlay; clicking it opens the detail dialog.

use dioxus::prelude::*;
use gallery_core::GalleryItem;

/// Single card in the gallery grid
///
/// The card does not know where its item sits in the collection; the parent
/// captures the position in `on_click`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GalleryCard {
///         key: "{position}-{item.id}",
///         item: item.clone(),
///         on_click: move |_| state.write().open(position),
///     }
/// }
/// ```
#[component]
pub fn GalleryCard(item: GalleryItem, on_click: EventHandler<()>) -> Element {
    let title = item.title.clone();
    let image = item.image.clone();

    rsx! {
        button {
            class: "gallery-card",
            r#type: "button",
            "aria-label": "{title}",
            onclick: move |_| on_click.call(()),

            div { class: "gallery-card__frame",
                img {
                    class: "gallery-card__img",
                    src: "{image}",
                    alt: "{title}",
                    loading: "lazy",
                }
            }

            div { class: "gallery-card__label", "{title}" }
        }
    }
}
