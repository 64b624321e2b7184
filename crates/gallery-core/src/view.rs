//! Transient view state of one rendered gallery.
//!
//! Holds the active filters and the position of the item shown in the detail
//! dialog. Positions index the full item collection, so items sharing an id
//! stay distinguishable. Nothing here is persisted.

use crate::content::GalleryContent;
use crate::dimension::{ActiveFilters, Dimension, FilterValue};
use crate::filter::{filter_items, filter_positions};
use crate::types::GalleryItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryViewState {
    filters: ActiveFilters,
    selected: Option<usize>,
}

impl GalleryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset selection instead of "all" everywhere
    pub fn with_filters(filters: ActiveFilters) -> Self {
        Self {
            filters,
            selected: None,
        }
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn set_filter(&mut self, dimension: Dimension, value: FilterValue) {
        tracing::debug!(%dimension, %value, "Filter changed");
        self.filters.set(dimension, value);
    }

    /// Select the item at `position` in the full collection and open the
    /// detail dialog
    pub fn open(&mut self, position: usize) {
        tracing::debug!(position, "Opening detail");
        self.selected = Some(position);
    }

    /// Close the detail dialog, clearing the selection
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item, if its position exists in `items`
    pub fn selected_in<'a>(&self, items: &'a [GalleryItem]) -> Option<&'a GalleryItem> {
        items.get(self.selected?)
    }

    pub fn selected<'a>(&self, content: &'a GalleryContent) -> Option<&'a GalleryItem> {
        self.selected_in(&content.items)
    }

    pub fn visible<'a>(&self, content: &'a GalleryContent) -> Vec<&'a GalleryItem> {
        filter_items(&content.items, &self.filters)
    }

    /// Positions of the visible items, for callers that open items by position
    pub fn visible_positions(&self, content: &GalleryContent) -> Vec<usize> {
        filter_positions(&content.items, &self.filters)
    }
}
