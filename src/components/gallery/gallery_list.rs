//! Gallery List Block
//!
//! Filter bar, card grid and detail dialog composed around one
//! [`GalleryViewState`].

use dioxus::prelude::*;
use gallery_core::{
    controls_from, filter_positions, ActiveFilters, Dimension, FilterOption, FilterValue,
    GalleryFilters, GalleryItem, GalleryViewState,
};

use super::{FilterBar, GalleryCard, GalleryDialog};

/// Filterable gallery grid
///
/// All content is injected through props. The visible list is a memo over the
/// item collection and the active filters, so opening or closing the dialog
/// does not re-filter. Cards are opened by their position in `items`, which
/// keeps items with a shared id apart.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GalleryListBlock {
///         items: content.items.clone(),
///         categories: content.categories.clone(),
///         filters: content.filters.clone(),
///         empty_message: content.empty_filter_message.clone(),
///     }
/// }
/// ```
#[component]
pub fn GalleryListBlock(
    /// Items in display order
    items: ReadOnlySignal<Vec<GalleryItem>>,
    /// Category options, may include the "all" pseudo-category
    categories: Vec<FilterOption>,
    /// Option lists for the remaining dimensions
    #[props(default)]
    filters: GalleryFilters,
    /// Shown instead of the grid when nothing passes the filters
    empty_message: String,
    /// Filters applied on first render
    #[props(default)]
    initial_filters: ActiveFilters,
) -> Element {
    let mut state = use_signal(move || GalleryViewState::with_filters(initial_filters));

    // Only changes when a filter actually changes, not on dialog open/close
    let active_filters = use_memo(move || state.read().filters().clone());
    let visible = use_memo(move || filter_positions(&items.read(), &active_filters.read()));

    let cards: Vec<(usize, GalleryItem)> = {
        let items = items.read();
        visible
            .read()
            .iter()
            .filter_map(|&position| items.get(position).map(|item| (position, item.clone())))
            .collect()
    };
    let selected = state.read().selected_in(&items.read()).cloned();
    let is_open = state.read().is_open();

    let controls = controls_from(&categories, &filters);

    rsx! {
        div { class: "gallery-block",
            FilterBar {
                controls: controls,
                active: active_filters(),
                on_change: move |(dimension, value): (Dimension, FilterValue)| {
                    state.write().set_filter(dimension, value);
                },
            }

            div { class: "gallery-grid",
                if cards.is_empty() {
                    div { class: "gallery-empty", "{empty_message}" }
                } else {
                    for (position, item) in cards.into_iter() {
                        GalleryCard {
                            key: "{position}-{item.id}",
                            item: item,
                            on_click: move |_| state.write().open(position),
                        }
                    }
                }
            }

            GalleryDialog {
                item: selected,
                open: is_open,
                filters: filters.clone(),
                on_close: move |_| state.write().close(),
            }
        }
    }
}
