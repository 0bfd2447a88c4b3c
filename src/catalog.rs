//! Furniture library records, category filtering, and selection.
//!
//! The library itself lives on the server (`GET /furniture`); this module
//! holds the record type, the name-substring category filter, and the
//! ordered selection the user builds up before arranging.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// A selectable furniture asset from the library.
///
/// `name` is assumed unique within the library but not enforced; the same
/// asset may be placed on the canvas any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureRef {
    pub name: String,
    pub path: String,
}

/// Filter library items by category.
///
/// A category matches when it appears in the item name, case-insensitively.
/// The special category `"all"` passes everything.
#[must_use]
pub fn filter_by_category<'a>(items: &'a [FurnitureRef], category: &str) -> Vec<&'a FurnitureRef> {
    if category == "all" {
        return items.iter().collect();
    }
    let needle = category.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// The ordered set of furniture the user has picked from the library.
///
/// Toggling is by `name`: picking an already-selected item deselects it,
/// otherwise it is appended. Order is preserved and is the order the refs
/// are echoed back to the backend.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Vec<FurnitureRef>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an item in or out of the selection. Returns `true` when the
    /// item is selected after the call.
    pub fn toggle(&mut self, item: &FurnitureRef) -> bool {
        if let Some(index) = self.items.iter().position(|f| f.name == item.name) {
            self.items.remove(index);
            false
        } else {
            self.items.push(item.clone());
            true
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FurnitureRef] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
