//! Item definitions: static metadata bundled with live quantity and equip
//! state.

use bevy::asset::UntypedHandle;
use bevy::utils::HashMap;

use crate::inventory::InventoryError;
use crate::stats::StatBoost;

/// One item type in an [`Inventory`](crate::inventory::Inventory): its static
/// metadata bundled with its live quantity and equip state.
///
/// Construct one with [`InventoryItem::new`] and the `with_*` builder
/// methods, then hand it to
/// [`Inventory::register_item`](crate::inventory::Inventory::register_item).
/// Live state always starts at zero quantity, unequipped, and only ever
/// changes through the inventory's operations, which uphold two invariants:
///
/// - `0 <= quantity <= max_quantity`;
/// - an item is only ever equipped if it is equippable.
///
/// Image handles are carried verbatim and never loaded or inspected; the
/// host resolves and renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    name: String,
    flavor_text: String,
    thumbnail: Option<UntypedHandle>,
    full_image: Option<UntypedHandle>,
    stat_boosts: HashMap<String, StatBoost>,
    max_quantity: u32,
    consumable: bool,
    equippable: bool,
    quantity: u32,
    equipped: bool,
}

impl InventoryItem {
    /// Creates a definition with the given unique name.
    ///
    /// Defaults: no flavor text, no images, no stat boosts, a maximum
    /// quantity of 1, consumable, and not equippable.
    pub fn new(name: impl Into<String>) -> Self {
        InventoryItem {
            name: name.into(),
            flavor_text: String::new(),
            thumbnail: None,
            full_image: None,
            stat_boosts: HashMap::default(),
            max_quantity: 1,
            consumable: true,
            equippable: false,
            quantity: 0,
            equipped: false,
        }
    }

    /// Sets the flavor text shown alongside the item.
    pub fn with_flavor_text(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = text.into();
        self
    }

    /// Sets the thumbnail image handle.
    pub fn with_thumbnail(mut self, handle: UntypedHandle) -> Self {
        self.thumbnail = Some(handle);
        self
    }

    /// Sets the full-size image handle.
    pub fn with_full_image(mut self, handle: UntypedHandle) -> Self {
        self.full_image = Some(handle);
        self
    }

    /// Grants a boost to the named stat.
    ///
    /// Registration fails unless every boosted stat is already present in
    /// the inventory's stat registry. Boosting the same stat twice keeps the
    /// later boost.
    pub fn with_stat_boost(mut self, stat: impl Into<String>, boost: StatBoost) -> Self {
        self.stat_boosts.insert(stat.into(), boost);
        self
    }

    /// Sets the maximum quantity this item can be held in.
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    /// Sets whether the item can be consumed.
    pub fn consumable(mut self, consumable: bool) -> Self {
        self.consumable = consumable;
        self
    }

    /// Sets whether the item can be equipped.
    pub fn equippable(mut self, equippable: bool) -> Self {
        self.equippable = equippable;
        self
    }

    /// The item's unique name, doubling as its key in the inventory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's flavor text.
    pub fn flavor_text(&self) -> &str {
        &self.flavor_text
    }

    /// The thumbnail image handle, if one was set.
    pub fn thumbnail(&self) -> Option<&UntypedHandle> {
        self.thumbnail.as_ref()
    }

    /// The full-size image handle, if one was set.
    pub fn full_image(&self) -> Option<&UntypedHandle> {
        self.full_image.as_ref()
    }

    /// The boosts this item grants, keyed by stat name.
    pub fn stat_boosts(&self) -> &HashMap<String, StatBoost> {
        &self.stat_boosts
    }

    /// The maximum quantity this item can be held in.
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Whether the item can be consumed.
    pub fn is_consumable(&self) -> bool {
        self.consumable
    }

    /// Whether the item can be equipped.
    pub fn is_equippable(&self) -> bool {
        self.equippable
    }

    /// How many of this item are currently held.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the item is currently equipped.
    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    /// Increments the quantity by `quantity`, refusing to pass the maximum.
    pub(crate) fn add(&mut self, quantity: u32) -> Result<(), InventoryError> {
        match self.quantity.checked_add(quantity) {
            Some(total) if total <= self.max_quantity => {
                self.quantity = total;
                Ok(())
            }
            _ => Err(InventoryError::MaxQuantityExceeded {
                name: self.name.clone(),
                requested: quantity,
                max: self.max_quantity,
            }),
        }
    }

    /// Decrements the quantity by `quantity`, clamping at zero.
    ///
    /// Consuming from an empty stack is an error; consuming more than is
    /// held is not, and simply empties the stack.
    pub(crate) fn consume(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if self.quantity == 0 {
            return Err(InventoryError::NothingToConsume(self.name.clone()));
        }

        self.quantity = self.quantity.saturating_sub(quantity);
        Ok(())
    }

    /// Marks the item as equipped. Quantity is untouched.
    pub(crate) fn equip(&mut self) -> Result<(), InventoryError> {
        if !self.equippable {
            return Err(InventoryError::NotEquippable(self.name.clone()));
        }
        if self.equipped {
            return Err(InventoryError::AlreadyEquipped(self.name.clone()));
        }

        self.equipped = true;
        Ok(())
    }

    /// Marks the item as no longer equipped. Quantity is untouched.
    pub(crate) fn unequip(&mut self) -> Result<(), InventoryError> {
        if !self.equippable {
            return Err(InventoryError::NotEquippable(self.name.clone()));
        }
        if !self.equipped {
            return Err(InventoryError::NotEquipped(self.name.clone()));
        }

        self.equipped = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_use_the_documented_defaults() {
        let item = InventoryItem::new("Rock");

        assert_eq!(item.name(), "Rock");
        assert_eq!(item.flavor_text(), "");
        assert!(item.thumbnail().is_none());
        assert!(item.full_image().is_none());
        assert!(item.stat_boosts().is_empty());
        assert_eq!(item.max_quantity(), 1);
        assert!(item.is_consumable());
        assert!(!item.is_equippable());
        assert_eq!(item.quantity(), 0);
        assert!(!item.is_equipped());
    }

    #[test]
    fn builder_methods_set_every_field() {
        let item = InventoryItem::new("Sword")
            .with_flavor_text("Pointy end goes in the other guy.")
            .with_stat_boost("Strength", StatBoost::permanent(2))
            .with_max_quantity(1)
            .consumable(false)
            .equippable(true);

        assert_eq!(item.flavor_text(), "Pointy end goes in the other guy.");
        assert_eq!(
            item.stat_boosts().get("Strength"),
            Some(&StatBoost::permanent(2))
        );
        assert!(!item.is_consumable());
        assert!(item.is_equippable());
    }

    #[test]
    fn adding_past_u32_range_is_caught_by_the_overflow_guard() {
        let mut item = InventoryItem::new("Sand").with_max_quantity(u32::MAX);

        item.add(u32::MAX).unwrap();
        assert_eq!(
            item.add(1),
            Err(InventoryError::MaxQuantityExceeded {
                name: "Sand".to_string(),
                requested: 1,
                max: u32::MAX,
            })
        );
        assert_eq!(item.quantity(), u32::MAX);
    }
}
