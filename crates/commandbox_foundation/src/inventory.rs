//! Inventory collections.
//!
//! The interpreter only ever talks to inventories through the three-method
//! [`Inventory`] capability and looks them up by name through
//! [`InventoryStore`]. [`ItemList`] and [`Inventories`] are the persistent
//! implementations the runtime uses; hosts with their own item storage can
//! implement the traits directly.

use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal capability interface over one named item collection.
pub trait Inventory {
    /// Returns true if the item is present.
    fn has(&self, item: &str) -> bool;

    /// Inserts the item. Adding an item that is already present is a no-op.
    fn add(&mut self, item: &str);

    /// Removes the item. Removing an absent item is a no-op.
    fn remove(&mut self, item: &str);
}

/// Lookup of inventories by name.
pub trait InventoryStore {
    /// Returns the named inventory, if it exists.
    fn inventory(&self, name: &str) -> Option<&dyn Inventory>;

    /// Returns the named inventory, creating an empty one if needed.
    fn inventory_mut(&mut self, name: &str) -> &mut dyn Inventory;

    /// Returns true if the named inventory exists and holds the item.
    fn holds(&self, inventory: &str, item: &str) -> bool {
        self.inventory(inventory).is_some_and(|inv| inv.has(item))
    }
}

/// Ordered, duplicate-free list of item names.
///
/// Cloning is O(1); the list shares structure with its clones, which keeps
/// save snapshots cheap.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemList(im::Vector<String>);

impl ItemList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over item names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn position(&self, item: &str) -> Option<usize> {
        self.0.iter().position(|held| held == item)
    }
}

impl Inventory for ItemList {
    fn has(&self, item: &str) -> bool {
        self.position(item).is_some()
    }

    fn add(&mut self, item: &str) {
        if !self.has(item) {
            self.0.push_back(item.to_string());
        }
    }

    fn remove(&mut self, item: &str) {
        if let Some(index) = self.position(item) {
            self.0.remove(index);
        }
    }
}

impl fmt::Debug for ItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ItemList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.add(item.as_ref());
        }
        list
    }
}

/// A set of named inventories, created on first write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inventories {
    lists: BTreeMap<String, ItemList>,
}

impl Inventories {
    /// Creates an empty set of inventories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named list, if it exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ItemList> {
        self.lists.get(name)
    }

    /// Returns an iterator over `(name, list)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemList)> {
        self.lists.iter().map(|(name, list)| (name.as_str(), list))
    }
}

impl InventoryStore for Inventories {
    fn inventory(&self, name: &str) -> Option<&dyn Inventory> {
        self.lists.get(name).map(|list| list as &dyn Inventory)
    }

    fn inventory_mut(&mut self, name: &str) -> &mut dyn Inventory {
        self.lists.entry(name.to_string()).or_default()
    }
}
