//! Inventory tests.

use commandbox_foundation::{Inventories, Inventory, InventoryStore, ItemList};

#[test]
fn removal_keeps_the_inventory() {
    let mut inv = Inventories::new();
    inv.inventory_mut("inventory").add("key");
    inv.inventory_mut("inventory").remove("key");

    let list = inv.get("inventory").unwrap();
    assert!(list.is_empty());
    assert!(!inv.holds("inventory", "key"));
}

#[test]
fn items_keep_insertion_order() {
    let mut list = ItemList::new();
    for item in ["rope", "key", "lamp", "key"] {
        list.add(item);
    }
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["rope", "key", "lamp"]);
}

#[test]
fn iteration_is_by_name() {
    let mut inv = Inventories::new();
    inv.inventory_mut("memorybank").add("song");
    inv.inventory_mut("inventory").add("key");

    let names: Vec<_> = inv.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["inventory", "memorybank"]);
}

/// A host-side store with a single fixed inventory.
struct Pockets(ItemList);

impl InventoryStore for Pockets {
    fn inventory(&self, name: &str) -> Option<&dyn Inventory> {
        (name == "pockets").then_some(&self.0 as &dyn Inventory)
    }

    fn inventory_mut(&mut self, _name: &str) -> &mut dyn Inventory {
        &mut self.0
    }
}

#[test]
fn hosts_can_supply_their_own_store() {
    let mut pockets = Pockets(ItemList::new());
    pockets.inventory_mut("pockets").add("coin");
    assert!(pockets.holds("pockets", "coin"));
    assert!(!pockets.holds("inventory", "coin"));
}
