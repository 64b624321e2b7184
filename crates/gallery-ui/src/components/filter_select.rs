//! Filter Select Component
//!
//! Labeled dropdown for one filter dimension.
//! The first entry always means "no constraint".

use dioxus::prelude::*;
use gallery_core::{Dimension, FilterOption, FilterValue};

/// Label of the "no constraint" entry
pub const ALL_LABEL: &str = "Все";

/// Properties for the FilterSelect component
#[derive(Clone, PartialEq, Props)]
pub struct FilterSelectProps {
    /// Dimension this control edits
    pub dimension: Dimension,
    /// Options in display order (without the "all" entry)
    pub options: Vec<FilterOption>,
    /// Current selection
    pub value: FilterValue,
    /// Handler called with the newly chosen value
    pub on_change: EventHandler<FilterValue>,
    /// Text of the "no constraint" entry
    #[props(default = ALL_LABEL.to_string())]
    pub all_label: String,
}

/// Labeled dropdown bound to one dimension
///
/// Renders nothing when there are no options, so callers can pass any
/// dimension without checking first.
///
/// # Example
///
/// ```rust,ignore
/// let mut style = use_signal(FilterValue::default);
///
/// rsx! {
///     FilterSelect {
///         dimension: Dimension::Style,
///         options: content.filters.styles.clone(),
///         value: style(),
///         on_change: move |value| style.set(value),
///     }
/// }
/// ```
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    if props.options.is_empty() {
        return VNode::empty();
    }

    let control_id = control_id(props.dimension);
    let label = props.dimension.label();
    let placeholder = props.dimension.placeholder();
    let current = props.value.as_str().to_string();
    let on_change = props.on_change;

    rsx! {
        div { class: "filter-select",
            label {
                class: "filter-select__label",
                r#for: "{control_id}",
                "{label}"
            }
            select {
                id: "{control_id}",
                class: "filter-select__control",
                title: "{placeholder}",
                "aria-label": "{placeholder}",
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    on_change.call(FilterValue::from(evt.value()));
                },
                option {
                    value: "all",
                    selected: props.value.is_all(),
                    "{props.all_label}"
                }
                for opt in props.options.iter() {
                    {
                        let is_selected = current == opt.id;
                        rsx! {
                            option {
                                key: "{opt.id}",
                                value: "{opt.id}",
                                selected: is_selected,
                                "{opt.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Element id of a dimension's dropdown
pub fn control_id(dimension: Dimension) -> String {
    format!("filter-{}", dimension.key())
}
