//! Filter bar: one dropdown per dimension that has options.

use dioxus::prelude::*;
use gallery_core::{ActiveFilters, Dimension, FilterControl, FilterValue};
use gallery_ui::FilterSelect;

/// Row of filter dropdowns
///
/// Each control reports changes for its own dimension only; the owner applies
/// them to its [`ActiveFilters`].
#[component]
pub fn FilterBar(
    /// Controls to render, already stripped of empty dimensions
    controls: Vec<FilterControl>,
    /// Current selections
    active: ActiveFilters,
    /// Called with the dimension and its new value
    on_change: EventHandler<(Dimension, FilterValue)>,
) -> Element {
    if controls.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-bar__grid",
                for control in controls.into_iter() {
                    {
                        let dimension = control.dimension;
                        let value = active.get(dimension).clone();
                        rsx! {
                            FilterSelect {
                                key: "{dimension}",
                                dimension: dimension,
                                options: control.options,
                                value: value,
                                on_change: move |value: FilterValue| on_change.call((dimension, value)),
                            }
                        }
                    }
                }
            }
        }
    }
}
