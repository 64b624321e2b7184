//! Static gallery content: items, option lists and localized strings.
//!
//! The content document is the `gallery` section of the site content, stored
//! as camelCase JSON. A default document is compiled into the binary and is
//! available through [`GalleryContent::embedded`].

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, ALL};
use crate::error::{GalleryError, GalleryResult};
use crate::types::{FilterOption, GalleryFilters, GalleryItem};

const EMBEDDED_CONTENT: &str = include_str!("../content/gallery.ru.json");

/// Everything the gallery section renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Shown instead of the grid when no item passes the filters
    #[serde(default)]
    pub empty_filter_message: String,
    #[serde(default)]
    pub items: Vec<GalleryItem>,
    /// Category options; may include an `"all"` pseudo-entry
    #[serde(default)]
    pub categories: Vec<FilterOption>,
    #[serde(default)]
    pub filters: GalleryFilters,
}

impl GalleryContent {
    /// Content compiled into the binary
    pub fn embedded() -> GalleryResult<Self> {
        Self::from_json_str(EMBEDDED_CONTENT)
    }

    pub fn from_json_str(json: &str) -> GalleryResult<Self> {
        let content: Self = serde_json::from_str(json)?;
        tracing::debug!(
            items = content.items.len(),
            categories = content.categories.len(),
            "Parsed gallery content"
        );
        Ok(content)
    }

    /// Read and parse a content document from disk
    pub fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), items = content.items.len(), "Loaded gallery content");
        Ok(content)
    }

    /// Content from an explicit path, else the per-user document, else the
    /// embedded one.
    ///
    /// An explicit path that cannot be loaded is an error; a missing per-user
    /// document is not.
    pub fn resolve(explicit: Option<&Path>) -> GalleryResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_content_path() {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!("Using embedded gallery content");
                Self::embedded()
            }
        }
    }

    pub fn find_item(&self, id: &str) -> GalleryResult<&GalleryItem> {
        self.items
            .iter()
            .find(|item| item.id.as_str() == id)
            .ok_or_else(|| GalleryError::ItemNotFound(id.to_string()))
    }

    /// Category options without the `"all"` pseudo-category
    pub fn category_options(&self) -> Vec<FilterOption> {
        self.categories
            .iter()
            .filter(|cat| cat.id != ALL)
            .cloned()
            .collect()
    }

    /// Option list backing a dimension's dropdown
    pub fn options_for(&self, dimension: Dimension) -> Vec<FilterOption> {
        match dimension {
            Dimension::Category => self.category_options(),
            other => self.filters.options(other).to_vec(),
        }
    }

    /// Display name of an option id in any dimension, `""` when unresolved
    pub fn option_name(&self, dimension: Dimension, id: &str) -> String {
        match dimension {
            Dimension::Category => crate::types::option_name(&self.categories, id).to_string(),
            other => self.filters.name_of(other, id).to_string(),
        }
    }

    /// Non-fatal consistency problems in the document.
    ///
    /// Rendering never depends on these; unresolved ids simply show empty
    /// labels.
    pub fn validate(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                warnings.push(ContentWarning::DuplicateItemId {
                    id: item.id.to_string(),
                });
            }

            for dimension in Dimension::ALL {
                let Some(value) = dimension.value_of(item).filter(|v| !v.is_empty()) else {
                    continue;
                };
                let options = match dimension {
                    Dimension::Category => self.categories.as_slice(),
                    other => self.filters.options(other),
                };
                // An absent list suppresses the control; only check lists that exist.
                if options.is_empty() {
                    continue;
                }
                if !options.iter().any(|option| option.id == value) {
                    warnings.push(ContentWarning::UnknownOption {
                        item: item.id.to_string(),
                        dimension,
                        value: value.to_string(),
                    });
                }
            }
        }

        warnings
    }
}

/// Per-user content document: `<config_dir>/gallery-site/content.json`
pub fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gallery-site").join("content.json"))
}

/// A consistency problem found by [`GalleryContent::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    DuplicateItemId {
        id: String,
    },
    UnknownOption {
        item: String,
        dimension: Dimension,
        value: String,
    },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::DuplicateItemId { id } => {
                write!(f, "duplicate item id '{}'", id)
            }
            ContentWarning::UnknownOption {
                item,
                dimension,
                value,
            } => write!(
                f,
                "item '{}' has {} '{}' which is not in the option list",
                item, dimension, value
            ),
        }
    }
}
