//! Filter engine: which items are visible and which controls are shown.

use crate::content::GalleryContent;
use crate::dimension::{ActiveFilters, Dimension, ALL};
use crate::types::{FilterOption, GalleryFilters, GalleryItem};

/// Items passing every active filter, in input order
pub fn filter_items<'a>(items: &'a [GalleryItem], filters: &ActiveFilters) -> Vec<&'a GalleryItem> {
    items.iter().filter(|item| filters.matches(item)).collect()
}

/// Positions in `items` of the entries [`filter_items`] would return
pub fn filter_positions(items: &[GalleryItem], filters: &ActiveFilters) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filters.matches(item))
        .map(|(position, _)| position)
        .collect()
}

/// One dropdown of the filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub dimension: Dimension,
    pub options: Vec<FilterOption>,
}

/// Dropdowns to render for a content document
pub fn filter_controls(content: &GalleryContent) -> Vec<FilterControl> {
    controls_from(&content.categories, &content.filters)
}

/// Dropdowns to render, in dimension order.
///
/// The `"all"` pseudo-category is dropped since every dropdown carries its own
/// "all" entry. Dimensions left with no options are omitted.
pub fn controls_from(categories: &[FilterOption], filters: &GalleryFilters) -> Vec<FilterControl> {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            let options = match dimension {
                Dimension::Category => categories
                    .iter()
                    .filter(|cat| cat.id != ALL)
                    .cloned()
                    .collect(),
                other => filters.options(*other).to_vec(),
            };
            FilterControl {
                dimension: *dimension,
                options,
            }
        })
        .filter(|control| !control.options.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn item(id: &str, category: &str, style: Option<&str>) -> GalleryItem {
        GalleryItem {
            id: ItemId::new(id),
            title: format!("item {}", id),
            description: String::new(),
            image: format!("/img/{}.jpg", id),
            category: category.to_string(),
            subcategory: None,
            style: style.map(str::to_string),
            location: None,
            status: None,
        }
    }

    fn ids(items: &[&GalleryItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn test_projects_then_style() {
        let items = vec![item("1", "projects", Some("modern")), item("2", "blog", None)];

        let filters = ActiveFilters::new().with(Dimension::Category, "projects");
        assert_eq!(ids(&filter_items(&items, &filters)), vec!["1"]);

        let filters = filters.with(Dimension::Style, "modern");
        assert_eq!(ids(&filter_items(&items, &filters)), vec!["1"]);

        let filters = filters.with(Dimension::Style, "rustic");
        assert!(filter_items(&items, &filters).is_empty());
    }

    #[test]
    fn test_unconstrained_keeps_order() {
        let items = vec![
            item("3", "blog", None),
            item("1", "projects", None),
            item("2", "blog", None),
        ];
        let visible = filter_items(&items, &ActiveFilters::default());
        assert_eq!(ids(&visible), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_positions_match_items() {
        let items = vec![
            item("1", "projects", None),
            item("2", "blog", None),
            item("2", "blog", Some("modern")),
        ];
        let filters = ActiveFilters::new().with(Dimension::Category, "blog");
        assert_eq!(filter_positions(&items, &filters), vec![1, 2]);

        let filters = filters.with(Dimension::Style, "modern");
        assert_eq!(filter_positions(&items, &filters), vec![2]);
    }

    #[test]
    fn test_empty_option_lists_suppress_controls() {
        let content = GalleryContent {
            title: String::new(),
            description: String::new(),
            empty_filter_message: String::new(),
            items: vec![],
            categories: vec![
                FilterOption::new("all", "Все"),
                FilterOption::new("projects", "Проекты"),
            ],
            filters: GalleryFilters {
                styles: vec![FilterOption::new("modern", "Современный")],
                ..Default::default()
            },
        };

        let controls = filter_controls(&content);
        let dims: Vec<_> = controls.iter().map(|c| c.dimension).collect();
        assert_eq!(dims, vec![Dimension::Category, Dimension::Style]);
        assert_eq!(controls[0].options, vec![FilterOption::new("projects", "Проекты")]);
    }

    #[test]
    fn test_only_all_category_suppresses_category_control() {
        let content = GalleryContent {
            title: String::new(),
            description: String::new(),
            empty_filter_message: String::new(),
            items: vec![],
            categories: vec![FilterOption::new("all", "Все")],
            filters: GalleryFilters::default(),
        };
        assert!(filter_controls(&content).is_empty());
    }
}
