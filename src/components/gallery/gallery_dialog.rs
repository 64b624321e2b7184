//! Gallery Dialog Component
//!
//! Modal detail view of the selected item.

use dioxus::prelude::*;
use gallery_core::{GalleryFilters, GalleryItem, ItemDetail};
use gallery_ui::LabeledBadge;

/// Detail dialog
///
/// Shows nothing unless `open` is set. An open dialog without an item renders
/// an empty frame rather than stale content. The overlay takes keyboard focus
/// when it mounts so Escape reaches it without a click first.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GalleryDialog {
///         item: selected(),
///         open: selected().is_some(),
///         filters: content.filters.clone(),
///         on_close: move |_| selected.set(None),
///     }
/// }
/// ```
#[component]
pub fn GalleryDialog(
    /// Item to show
    item: Option<GalleryItem>,
    /// Whether the dialog is visible
    open: bool,
    /// Option lists used to resolve attribute ids
    filters: GalleryFilters,
    /// Callback when the dialog is dismissed
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    let detail = item.as_ref().map(|item| ItemDetail::project(item, &filters));

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!(?e, "Could not focus dialog overlay");
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "gallery-dialog",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "gallery-dialog__close",
                    button {
                        class: "gallery-dialog__close-btn",
                        r#type: "button",
                        "aria-label": "Закрыть",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                if let Some(detail) = detail {
                    div { class: "gallery-dialog__body",
                        div { class: "gallery-dialog__media",
                            img {
                                class: "gallery-dialog__img",
                                src: "{detail.image}",
                                alt: "{detail.title}",
                            }
                        }

                        div { class: "gallery-dialog__info",
                            h3 { class: "gallery-dialog__title", "{detail.title}" }
                            p { class: "gallery-dialog__description", "{detail.description}" }

                            if !detail.badges.is_empty() {
                                div { class: "gallery-dialog__badges",
                                    for badge in detail.badges.iter() {
                                        LabeledBadge {
                                            key: "{badge.dimension}",
                                            label: badge.label.to_string(),
                                            name: badge.name.clone(),
                                            variant: badge.variant,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
