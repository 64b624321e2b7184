//! Detail projection of a selected item.
//!
//! The detail dialog shows the picture, title and description of any item.
//! Items in the projects category additionally get one labeled badge per
//! populated attribute, with option ids resolved to display names.

use serde::Serialize;

use crate::dimension::Dimension;
use crate::types::{GalleryFilters, GalleryItem};

/// Visual weight of a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    #[default]
    Outline,
}

impl BadgeVariant {
    /// Status badges are emphasized by progress; everything else is outlined.
    pub fn for_attribute(dimension: Dimension, value: &str) -> Self {
        match (dimension, value) {
            (Dimension::Status, "completed") => BadgeVariant::Default,
            (Dimension::Status, "in_progress") => BadgeVariant::Secondary,
            _ => BadgeVariant::Outline,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

/// One labeled attribute in the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailBadge {
    pub dimension: Dimension,
    pub label: &'static str,
    /// Resolved display name; empty when the id is not in the option list
    pub name: String,
    pub variant: BadgeVariant,
}

/// What the detail dialog renders for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub title: String,
    pub description: String,
    pub image: String,
    pub badges: Vec<DetailBadge>,
}

impl ItemDetail {
    pub fn project(item: &GalleryItem, filters: &GalleryFilters) -> Self {
        let badges = if item.is_project() {
            Dimension::ATTRIBUTES
                .iter()
                .filter_map(|dimension| {
                    let value = dimension.value_of(item).filter(|v| !v.is_empty())?;
                    Some(DetailBadge {
                        dimension: *dimension,
                        label: dimension.label(),
                        name: filters.name_of(*dimension, value).to_string(),
                        variant: BadgeVariant::for_attribute(*dimension, value),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            badges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FilterOption, ItemId};

    fn filters() -> GalleryFilters {
        GalleryFilters {
            subcategories: vec![FilterOption::new("house", "Дом")],
            styles: vec![FilterOption::new("modern", "Современный")],
            locations: vec![],
            status: vec![
                FilterOption::new("completed", "Завершён"),
                FilterOption::new("in_progress", "В процессе"),
            ],
        }
    }

    fn project() -> GalleryItem {
        GalleryItem {
            id: ItemId::new("1"),
            title: "Дом у озера".to_string(),
            description: "Клеёный брус".to_string(),
            image: "/img/1.jpg".to_string(),
            category: "projects".to_string(),
            subcategory: Some("house".to_string()),
            style: Some("modern".to_string()),
            location: Some("tver_region".to_string()),
            status: Some("in_progress".to_string()),
        }
    }

    #[test]
    fn test_project_badges_in_order() {
        let detail = ItemDetail::project(&project(), &filters());
        let dims: Vec<_> = detail.badges.iter().map(|b| b.dimension).collect();
        assert_eq!(dims, Dimension::ATTRIBUTES.to_vec());
        assert_eq!(detail.badges[0].name, "Дом");
        assert_eq!(detail.badges[1].name, "Современный");
        assert_eq!(detail.title, "Дом у озера");
    }

    #[test]
    fn test_unresolved_id_renders_empty_name() {
        let detail = ItemDetail::project(&project(), &filters());
        let location = &detail.badges[2];
        assert_eq!(location.label, "Расположение");
        assert_eq!(location.name, "");
    }

    #[test]
    fn test_non_project_has_no_badges() {
        let mut item = project();
        item.category = "interiors".to_string();
        let detail = ItemDetail::project(&item, &filters());
        assert!(detail.badges.is_empty());
        assert_eq!(detail.description, "Клеёный брус");
    }

    #[test]
    fn test_empty_and_missing_attributes_skipped() {
        let mut item = project();
        item.subcategory = Some(String::new());
        item.style = None;
        let detail = ItemDetail::project(&item, &filters());
        let dims: Vec<_> = detail.badges.iter().map(|b| b.dimension).collect();
        assert_eq!(dims, vec![Dimension::Location, Dimension::Status]);
    }

    #[test]
    fn test_status_variants() {
        assert_eq!(
            BadgeVariant::for_attribute(Dimension::Status, "completed"),
            BadgeVariant::Default
        );
        assert_eq!(
            BadgeVariant::for_attribute(Dimension::Status, "in_progress"),
            BadgeVariant::Secondary
        );
        assert_eq!(
            BadgeVariant::for_attribute(Dimension::Status, "planned"),
            BadgeVariant::Outline
        );
        assert_eq!(
            BadgeVariant::for_attribute(Dimension::Style, "completed"),
            BadgeVariant::Outline
        );
    }
}
