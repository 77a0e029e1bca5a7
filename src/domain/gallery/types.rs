// SPDX-License-Identifier: MPL-2.0
//! Core gallery types: items, collections and navigation direction.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier of a gallery item.
///
/// Identifiers are compared with their natural (string) order, and must be
/// unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One unit of media displayed by the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// URL or local path of the full-size image.
    pub source: String,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Item {
    /// Creates an item without caption or known dimensions.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            caption: None,
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Ordered, read-only sequence of items.
///
/// Cloning is cheap (shared storage). Two collections are the "same
/// reference" only if they share storage, see [`Collection::same_as`].
#[derive(Debug, Clone)]
pub struct Collection(Arc<[Item]>);

impl Collection {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self(items.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Item> {
        self.0.first()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.0.iter()
    }

    /// Returns true if both collections share the same storage.
    #[must_use]
    pub fn same_as(&self, other: &Collection) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Item>> for Collection {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

/// Which way the displayed item transitions, for animation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

/// Explicit direction supplied by next/previous controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationHint {
    Next,
    Previous,
}

/// Toggleable interaction modes. All modes start disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub autoplay: bool,
    pub zoom: bool,
    pub idle: bool,
}
