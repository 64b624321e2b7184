//! Filter dimensions and the active filter selection.
//!
//! Every filterable attribute of a [`GalleryItem`] is named by a [`Dimension`]
//! variant. The variant carries its accessor, its stable key and its label, so
//! no code path looks attributes up by string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::types::GalleryItem;

/// Textual form of "no constraint" for a dimension
pub const ALL: &str = "all";

/// One independently selectable filter axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Subcategory,
    Style,
    Location,
    Status,
}

impl Dimension {
    /// All dimensions in display order
    pub const ALL: [Dimension; 5] = [
        Dimension::Category,
        Dimension::Subcategory,
        Dimension::Style,
        Dimension::Location,
        Dimension::Status,
    ];

    /// The non-category dimensions, in the order detail badges appear
    pub const ATTRIBUTES: [Dimension; 4] = [
        Dimension::Subcategory,
        Dimension::Style,
        Dimension::Location,
        Dimension::Status,
    ];

    /// Stable key, also used for element ids (`filter-<key>`)
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Subcategory => "subcategory",
            Dimension::Style => "style",
            Dimension::Location => "location",
            Dimension::Status => "status",
        }
    }

    /// Human-readable label shown next to controls and badges
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Category => "Категория",
            Dimension::Subcategory => "Тип",
            Dimension::Style => "Стиль",
            Dimension::Location => "Расположение",
            Dimension::Status => "Статус",
        }
    }

    /// Placeholder for the dropdown of this dimension
    pub fn placeholder(&self) -> String {
        format!("Выберите {}", self.label().to_lowercase())
    }

    /// Read this dimension's attribute from an item
    pub fn value_of<'a>(&self, item: &'a GalleryItem) -> Option<&'a str> {
        match self {
            Dimension::Category => Some(item.category.as_str()),
            Dimension::Subcategory => item.subcategory.as_deref(),
            Dimension::Style => item.style.as_deref(),
            Dimension::Location => item.location.as_deref(),
            Dimension::Status => item.status.as_deref(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Plural spellings match the option list names in content documents.
        match s.trim().to_lowercase().as_str() {
            "category" | "categories" => Ok(Dimension::Category),
            "subcategory" | "subcategories" => Ok(Dimension::Subcategory),
            "style" | "styles" => Ok(Dimension::Style),
            "location" | "locations" => Ok(Dimension::Location),
            "status" => Ok(Dimension::Status),
            _ => Err(GalleryError::UnknownDimension(s.to_string())),
        }
    }
}

/// Selection for a single dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    /// No constraint
    #[default]
    All,
    /// Only items whose attribute equals this option id
    Only(String),
}

impl FilterValue {
    pub fn only(id: impl Into<String>) -> Self {
        FilterValue::from(id.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Value as it appears in a dropdown (`"all"` or the option id)
    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL,
            FilterValue::Only(id) => id,
        }
    }

    /// Whether an attribute value passes this selection.
    ///
    /// A missing attribute never passes a concrete selection.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(id) => value == Some(id.as_str()),
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        if s == ALL {
            FilterValue::All
        } else {
            FilterValue::Only(s)
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::from(s.to_string())
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL.to_string(),
            FilterValue::Only(id) => id,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five current selections of the filter controller
///
/// Starts with every dimension set to [`FilterValue::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveFilters {
    pub category: FilterValue,
    pub subcategory: FilterValue,
    pub style: FilterValue,
    pub location: FilterValue,
    pub status: FilterValue,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> &FilterValue {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Subcategory => &self.subcategory,
            Dimension::Style => &self.style,
            Dimension::Location => &self.location,
            Dimension::Status => &self.status,
        }
    }

    /// Replace one dimension's selection; the others are left untouched.
    pub fn set(&mut self, dimension: Dimension, value: FilterValue) {
        let slot = match dimension {
            Dimension::Category => &mut self.category,
            Dimension::Subcategory => &mut self.subcategory,
            Dimension::Style => &mut self.style,
            Dimension::Location => &mut self.location,
            Dimension::Status => &mut self.status,
        };
        *slot = value;
    }

    /// Builder-style [`ActiveFilters::set`]
    pub fn with(mut self, dimension: Dimension, value: impl Into<FilterValue>) -> Self {
        self.set(dimension, value.into());
        self
    }

    /// True when no dimension constrains the result
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.get(*d).is_all())
    }

    /// Conjunction of the per-dimension equality predicates
    pub fn matches(&self, item: &GalleryItem) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| self.get(*d).accepts(d.value_of(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn item(category: &str, style: Option<&str>) -> GalleryItem {
        GalleryItem {
            id: ItemId::new("1"),
            title: "House".to_string(),
            description: String::new(),
            image: "/img/house.jpg".to_string(),
            category: category.to_string(),
            subcategory: None,
            style: style.map(str::to_string),
            location: None,
            status: None,
        }
    }

    #[test]
    fn test_filter_value_parses_all() {
        assert_eq!(FilterValue::from("all"), FilterValue::All);
        assert_eq!(FilterValue::from("modern"), FilterValue::Only("modern".into()));
        assert_eq!(FilterValue::All.as_str(), "all");
    }

    #[test]
    fn test_filter_value_serde_uses_text_form() {
        let json = serde_json::to_string(&FilterValue::All).unwrap();
        assert_eq!(json, "\"all\"");
        let parsed: FilterValue = serde_json::from_str("\"loft\"").unwrap();
        assert_eq!(parsed, FilterValue::only("loft"));
    }

    #[test]
    fn test_missing_attribute_never_matches_concrete_value() {
        assert!(FilterValue::All.accepts(None));
        assert!(!FilterValue::only("modern").accepts(None));
        assert!(FilterValue::only("modern").accepts(Some("modern")));
    }

    #[test]
    fn test_set_only_touches_one_dimension() {
        let mut filters = ActiveFilters::new().with(Dimension::Category, "projects");
        filters.set(Dimension::Style, FilterValue::only("modern"));

        assert_eq!(filters.category, FilterValue::only("projects"));
        assert_eq!(filters.style, FilterValue::only("modern"));
        assert!(filters.subcategory.is_all());
        assert!(filters.location.is_all());
        assert!(filters.status.is_all());
    }

    #[test]
    fn test_matches_is_conjunction() {
        let modern = item("projects", Some("modern"));
        let filters = ActiveFilters::new()
            .with(Dimension::Category, "projects")
            .with(Dimension::Style, "modern");
        assert!(filters.matches(&modern));

        let rustic = filters.clone().with(Dimension::Style, "rustic");
        assert!(!rustic.matches(&modern));
    }

    #[test]
    fn test_default_is_unconstrained() {
        assert!(ActiveFilters::default().is_unconstrained());
        assert!(!ActiveFilters::default()
            .with(Dimension::Status, "completed")
            .is_unconstrained());
    }

    #[test]
    fn test_dimension_from_str() {
        assert_eq!("style".parse::<Dimension>().unwrap(), Dimension::Style);
        assert_eq!("Locations".parse::<Dimension>().unwrap(), Dimension::Location);
        assert!(matches!(
            "color".parse::<Dimension>(),
            Err(GalleryError::UnknownDimension(_))
        ));
    }

    #[test]
    fn test_placeholder_lowercases_label() {
        assert_eq!(Dimension::Style.placeholder(), "Выберите стиль");
        assert_eq!(Dimension::Subcategory.key(), "subcategory");
    }
}
