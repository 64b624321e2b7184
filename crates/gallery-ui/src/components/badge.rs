//! Badge Components
//!
//! Small tag-like labels for item attributes:
//! - Default: filled, for finished work
//! - Secondary: muted fill, for work in progress
//! - Outline: border only

use dioxus::prelude::*;
use gallery_core::BadgeVariant;

/// Properties for the Badge component
#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    /// Visual style variant
    #[props(default)]
    pub variant: BadgeVariant,
    /// Badge content
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span { class: props.variant.class(), {props.children} }
    }
}

/// Attribute row: a label followed by a badge.
///
/// An empty `name` still renders the badge, just without text.
#[component]
pub fn LabeledBadge(label: String, name: String, #[props(default)] variant: BadgeVariant) -> Element {
    rsx! {
        div { class: "labeled-badge",
            span { class: "labeled-badge__label", "{label}:" }
            Badge { variant: variant, "{name}" }
        }
    }
}
