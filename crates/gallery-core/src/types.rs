//! Core types for the gallery content model

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Category id whose items carry project attributes worth showing in detail.
pub const PROJECTS_CATEGORY: &str = "projects";

/// Opaque identifier of a gallery item
///
/// Content documents write ids either as strings or as integers; both are
/// kept as text so lookups never depend on the JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawItemId")]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Text(s) => Self(s),
            RawItemId::Number(n) => Self(n.to_string()),
        }
    }
}

/// A single picture in the gallery
///
/// Items are immutable once loaded. Optional attributes hold option ids that
/// resolve to display names through [`GalleryFilters`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image path or URL handed to the renderer as-is
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl GalleryItem {
    /// Whether the detail view shows attribute badges for this item
    pub fn is_project(&self) -> bool {
        self.category == PROJECTS_CATEGORY
    }

    /// Attribute value for a filter dimension
    pub fn attribute(&self, dimension: Dimension) -> Option<&str> {
        dimension.value_of(self)
    }
}

/// An (id, display name) pair for dropdowns and label lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Option lists for the non-category dimensions
///
/// Every list is optional in the content document and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryFilters {
    #[serde(default)]
    pub subcategories: Vec<FilterOption>,
    #[serde(default)]
    pub styles: Vec<FilterOption>,
    #[serde(default)]
    pub locations: Vec<FilterOption>,
    #[serde(default)]
    pub status: Vec<FilterOption>,
}

impl GalleryFilters {
    /// Option list backing a dimension. Categories live outside this bundle,
    /// so `Dimension::Category` always yields an empty slice here.
    pub fn options(&self, dimension: Dimension) -> &[FilterOption] {
        match dimension {
            Dimension::Category => &[],
            Dimension::Subcategory => &self.subcategories,
            Dimension::Style => &self.styles,
            Dimension::Location => &self.locations,
            Dimension::Status => &self.status,
        }
    }

    /// Display name for an option id, or `""` when the id is unknown.
    pub fn name_of(&self, dimension: Dimension, id: &str) -> &str {
        option_name(self.options(dimension), id)
    }
}

/// Resolve an option id against a list; unresolved ids yield `""`.
pub fn option_name<'a>(options: &'a [FilterOption], id: &str) -> &'a str {
    if id.is_empty() {
        return "";
    }
    options
        .iter()
        .find(|option| option.id == id)
        .map(|option| option.name.as_str())
        .unwrap_or("")
}
