//! Property-based tests for the filter engine
//!
//! Uses proptest to verify that the visible set is exactly the conjunction of
//! the per-dimension equality predicates.

use gallery_core::{filter_items, ActiveFilters, Dimension, FilterValue, GalleryItem, ItemId};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Small alphabet of option ids so filters actually hit items
fn option_id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c"]).prop_map(str::to_string)
}

fn attribute_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(option_id_strategy())
}

fn item_strategy() -> impl Strategy<Value = GalleryItem> {
    (
        option_id_strategy(),
        attribute_strategy(),
        attribute_strategy(),
        attribute_strategy(),
        attribute_strategy(),
    )
        .prop_map(|(category, subcategory, style, location, status)| GalleryItem {
            id: ItemId::new("pending"),
            title: "item".to_string(),
            description: String::new(),
            image: "/img.jpg".to_string(),
            category,
            subcategory,
            style,
            location,
            status,
        })
}

/// Items with unique, ordered ids
fn items_strategy(max: usize) -> impl Strategy<Value = Vec<GalleryItem>> {
    prop::collection::vec(item_strategy(), 0..max).prop_map(|mut items| {
        for (i, item) in items.iter_mut().enumerate() {
            item.id = ItemId::new(i.to_string());
        }
        items
    })
}

fn filter_value_strategy() -> impl Strategy<Value = FilterValue> {
    prop_oneof![
        2 => Just(FilterValue::All),
        3 => option_id_strategy().prop_map(FilterValue::Only),
    ]
}

fn active_filters_strategy() -> impl Strategy<Value = ActiveFilters> {
    (
        filter_value_strategy(),
        filter_value_strategy(),
        filter_value_strategy(),
        filter_value_strategy(),
        filter_value_strategy(),
    )
        .prop_map(|(category, subcategory, style, location, status)| ActiveFilters {
            category,
            subcategory,
            style,
            location,
            status,
        })
}

fn dimension_strategy() -> impl Strategy<Value = Dimension> {
    prop::sample::select(Dimension::ALL.to_vec())
}

/// Reference predicate written out per dimension
fn satisfies(item: &GalleryItem, filters: &ActiveFilters) -> bool {
    let check = |value: &FilterValue, attr: Option<&String>| match value {
        FilterValue::All => true,
        FilterValue::Only(id) => attr == Some(id),
    };
    check(&filters.category, Some(&item.category))
        && check(&filters.subcategory, item.subcategory.as_ref())
        && check(&filters.style, item.style.as_ref())
        && check(&filters.location, item.location.as_ref())
        && check(&filters.status, item.status.as_ref())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The visible set is exactly the items satisfying every predicate, in order
    #[test]
    fn visible_set_is_conjunction(
        items in items_strategy(30),
        filters in active_filters_strategy(),
    ) {
        let visible: Vec<_> = filter_items(&items, &filters)
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        let expected: Vec<_> = items
            .iter()
            .filter(|i| satisfies(i, &filters))
            .map(|i| i.id.clone())
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Setting one dimension to "all" drops only that predicate
    #[test]
    fn all_removes_single_predicate(
        items in items_strategy(30),
        filters in active_filters_strategy(),
        dimension in dimension_strategy(),
    ) {
        let mut relaxed = filters.clone();
        relaxed.set(dimension, FilterValue::All);

        for other in Dimension::ALL.iter().filter(|d| **d != dimension) {
            prop_assert_eq!(relaxed.get(*other), filters.get(*other));
        }

        let visible = filter_items(&items, &relaxed);
        for item in &items {
            let passes_others = Dimension::ALL
                .iter()
                .filter(|d| **d != dimension)
                .all(|d| filters.get(*d).accepts(d.value_of(item)));
            prop_assert_eq!(visible.iter().any(|v| v.id == item.id), passes_others);
        }
    }

    /// Tightening a filter never grows the visible set
    #[test]
    fn visible_set_is_subset(
        items in items_strategy(30),
        filters in active_filters_strategy(),
        dimension in dimension_strategy(),
        value in option_id_strategy(),
    ) {
        let mut loose = filters.clone();
        loose.set(dimension, FilterValue::All);
        let tight = loose.clone().with(dimension, FilterValue::Only(value));

        let loose_ids: Vec<_> = filter_items(&items, &loose).iter().map(|i| i.id.clone()).collect();
        for item in filter_items(&items, &tight) {
            prop_assert!(loose_ids.contains(&item.id));
        }
    }

    /// Unconstrained filters show everything
    #[test]
    fn unconstrained_shows_all(items in items_strategy(30)) {
        let visible = filter_items(&items, &ActiveFilters::default());
        prop_assert_eq!(visible.len(), items.len());
    }
}
