//! Per-category content items pushed in by the host's fetch layer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::view::Category;

/// One content entry inside a work modal.
///
/// Mirrors what the host's fetch layer deserializes from the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostItem {
    /// Stable id from the content source.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Secondary line under the title.
    pub subtitle: String,
    /// Display date string, already formatted.
    pub date: String,
    /// Width/height ratio the layout step needs.
    pub aspect_ratio: f32,
}

/// Whatever content has arrived so far, keyed by category.
///
/// The host pushes a category's list whenever a fetch lands; the
/// coordinator reads whatever is present at overlay-open time. A category
/// with no entry and one with an empty list are the same legitimate state:
/// the modal renders its empty-state message.
#[derive(Debug, Default)]
pub struct ContentStore {
    items: FxHashMap<Category, Vec<PostItem>>,
}

impl ContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a category's items with a freshly fetched list.
    pub fn set_items(&mut self, category: Category, items: Vec<PostItem>) {
        let _ = self.items.insert(category, items);
    }

    /// The items currently known for a category. Empty until a fetch has
    /// landed.
    #[must_use]
    pub fn items(&self, category: Category) -> &[PostItem] {
        self.items.get(&category).map_or(&[], Vec::as_slice)
    }
}
