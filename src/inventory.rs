//! The inventory component: a stat registry plus a name-keyed catalog of
//! items with live quantities and equip state.
//!
//! All mutation is funneled through a handful of operations that validate
//! every precondition before touching state, so a failed call never leaves a
//! partial write behind. The component assumes exclusive access from the
//! host's update loop; Bevy's ordinary ECS borrowing rules already provide
//! that when it is stored on an entity.

use bevy::prelude::Component;
use bevy::utils::HashMap;
use thiserror::Error;

use crate::item::InventoryItem;
use crate::stats::StatRegistry;

/// Everything that can go wrong when setting up or operating an
/// [`Inventory`].
///
/// These are ordinary, recoverable outcomes reported to the caller. No
/// operation panics, and an operation that returns an error has not changed
/// any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The stat name is already registered.
    #[error("the stat `{0}` is already registered")]
    DuplicateStat(String),
    /// An item definition references a stat the registry does not know.
    #[error("the stat `{0}` has not been registered")]
    UnknownStat(String),
    /// An item with the same name is already registered; the first
    /// definition wins.
    #[error("an item named `{0}` is already registered")]
    DuplicateItem(String),
    /// No item with the given name is registered.
    #[error("no item named `{0}` is registered")]
    UnknownItem(String),
    /// Adding the requested quantity would push the item past its maximum.
    #[error("adding {requested} to `{name}` would exceed its maximum quantity of {max}")]
    MaxQuantityExceeded {
        /// The item whose quantity would have overflowed.
        name: String,
        /// The quantity the caller asked to add.
        requested: u32,
        /// The item's maximum quantity.
        max: u32,
    },
    /// The item's quantity is already zero.
    #[error("there are no `{0}` left to consume")]
    NothingToConsume(String),
    /// The item is not consumable.
    ///
    /// Part of the published error set, but currently never returned:
    /// [`Inventory::consume_item`] does not reject non-consumable items.
    #[error("`{0}` is not consumable")]
    NotConsumable(String),
    /// The item cannot be equipped at all.
    #[error("`{0}` is not equippable")]
    NotEquippable(String),
    /// The item is already equipped.
    #[error("`{0}` is already equipped")]
    AlreadyEquipped(String),
    /// The item is not currently equipped.
    #[error("`{0}` is not equipped")]
    NotEquipped(String),
}

/// A stat-aware item inventory, attachable to any entity.
///
/// The registry and the catalog are append-only: setup registers stats and
/// item types once, and from then on only each item's quantity and equip
/// state change, exclusively through [`add_item`](Inventory::add_item),
/// [`consume_item`](Inventory::consume_item),
/// [`equip_item`](Inventory::equip_item) and
/// [`unequip_item`](Inventory::unequip_item).
///
/// # Example
///
/// ```
/// use bevy_inventory::inventory::{Inventory, InventoryError};
/// use bevy_inventory::item::InventoryItem;
///
/// let mut inventory = Inventory::new();
///
/// inventory
///     .register_item(InventoryItem::new("Apple").with_max_quantity(10))
///     .unwrap();
///
/// inventory.add_item("Apple", 4).unwrap();
/// inventory.consume_item("Apple", 1).unwrap();
/// assert_eq!(inventory.get("Apple").unwrap().quantity(), 3);
///
/// // Apples are not equippable.
/// assert_eq!(
///     inventory.equip_item("Apple"),
///     Err(InventoryError::NotEquippable("Apple".to_string()))
/// );
/// ```
#[derive(Component, Debug, Clone, Default)]
pub struct Inventory {
    stats: StatRegistry,
    items: HashMap<String, InventoryItem>,
}

impl Inventory {
    /// Creates an empty inventory: no stats, no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stat name items may boost.
    ///
    /// Returns [`InventoryError::DuplicateStat`] if the name is already
    /// registered.
    pub fn register_stat(&mut self, name: impl Into<String>) -> Result<(), InventoryError> {
        self.stats.register(name)
    }

    /// Iterates over all registered stat names, in no particular order.
    pub fn stats(&self) -> impl Iterator<Item = &str> {
        self.stats.iter()
    }

    /// Registers a new item type.
    ///
    /// The item starts at zero quantity, unequipped. Fails with
    /// [`InventoryError::UnknownStat`] if the item boosts a stat that has
    /// not been registered, and with [`InventoryError::DuplicateItem`] if an
    /// item with the same name already exists (the existing definition is
    /// kept). Nothing is inserted on failure.
    pub fn register_item(&mut self, item: InventoryItem) -> Result<(), InventoryError> {
        for stat in item.stat_boosts().keys() {
            if !self.stats.contains(stat) {
                return Err(InventoryError::UnknownStat(stat.clone()));
            }
        }

        if self.items.contains_key(item.name()) {
            return Err(InventoryError::DuplicateItem(item.name().to_string()));
        }

        // The key is derived from the definition itself, so the two can
        // never drift apart.
        self.items.insert(item.name().to_string(), item);
        Ok(())
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items.get(name)
    }

    /// Returns true if an item with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// The number of registered item types.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no item types are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all registered items, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    /// Iterates over the currently equipped items, in no particular order.
    pub fn equipped_items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values().filter(|item| item.is_equipped())
    }

    /// Adds `quantity` of the named item.
    ///
    /// Fails with [`InventoryError::UnknownItem`] if the name is not
    /// registered, and with [`InventoryError::MaxQuantityExceeded`] (leaving
    /// the quantity unchanged) if the result would pass the item's maximum.
    pub fn add_item(&mut self, name: &str, quantity: u32) -> Result<(), InventoryError> {
        self.item_mut(name)?.add(quantity)
    }

    /// Consumes up to `quantity` of the named item.
    ///
    /// Fails with [`InventoryError::UnknownItem`] if the name is not
    /// registered, and with [`InventoryError::NothingToConsume`] if none are
    /// held. Consuming more than is held empties the stack rather than
    /// failing; the quantity never goes below zero.
    pub fn consume_item(&mut self, name: &str, quantity: u32) -> Result<(), InventoryError> {
        self.item_mut(name)?.consume(quantity)
    }

    /// Equips the named item. Quantity is untouched.
    ///
    /// Fails with [`InventoryError::UnknownItem`],
    /// [`InventoryError::NotEquippable`] or
    /// [`InventoryError::AlreadyEquipped`].
    pub fn equip_item(&mut self, name: &str) -> Result<(), InventoryError> {
        self.item_mut(name)?.equip()
    }

    /// Unequips the named item. Quantity is untouched.
    ///
    /// Fails with [`InventoryError::UnknownItem`],
    /// [`InventoryError::NotEquippable`] or
    /// [`InventoryError::NotEquipped`].
    pub fn unequip_item(&mut self, name: &str) -> Result<(), InventoryError> {
        self.item_mut(name)?.unequip()
    }

    fn item_mut(&mut self, name: &str) -> Result<&mut InventoryItem, InventoryError> {
        self.items
            .get_mut(name)
            .ok_or_else(|| InventoryError::UnknownItem(name.to_string()))
    }
}
