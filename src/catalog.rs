//! Serialization-friendly inventory setup.
//!
//! A catalog is the raw, hand-authorable form of an inventory: a list of stat
//! names plus a list of item descriptions, suitable for a RON/TOML/JSON file.
//! Building a catalog runs every entry through the same validation as
//! code-driven registration, so a malformed file is caught in one place at
//! load time.
//!
//! Catalogs reference images by *path*. Turning a path into an asset handle
//! is the host's job, supplied to [`InventoryCatalog::build`] as a closure;
//! this keeps the crate out of the asset-loading business entirely.

use std::collections::HashMap;

use bevy::asset::UntypedHandle;
use serde::{Deserialize, Serialize};

use crate::inventory::{Inventory, InventoryError};
use crate::item::InventoryItem;
use crate::stats::StatBoost;

/// The raw, serialization-friendly form of a full inventory setup.
///
/// # Example
///
/// ```
/// use bevy_inventory::catalog::InventoryCatalog;
///
/// let catalog: InventoryCatalog = ron::from_str(
///     r#"(
///         stats: ["Strength"],
///         items: [
///             (
///                 name: "Potion",
///                 stat_boosts: { "Strength": (boost: 5, duration: 30) },
///                 max_quantity: 5,
///             ),
///         ],
///     )"#,
/// )
/// .unwrap();
///
/// // No asset infrastructure in this example, so leave all images unset.
/// let inventory = catalog.build(|_path| None).unwrap();
/// assert!(inventory.contains("Potion"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryCatalog {
    /// Stat names to register, in order.
    #[serde(default)]
    pub stats: Vec<String>,
    /// Item descriptions to register, in order.
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// The raw form of a single item definition.
///
/// Omitted fields fall back to the same defaults as
/// [`InventoryItem::new`]: no flavor text, no images, no boosts, a maximum
/// quantity of 1, consumable, not equippable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item name.
    pub name: String,
    /// Flavor text; empty if omitted.
    #[serde(default)]
    pub flavor_text: String,
    /// Path of the thumbnail image, if any.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Path of the full-size image, if any.
    #[serde(default)]
    pub full_image: Option<String>,
    /// Boosts granted to named stats.
    #[serde(default)]
    pub stat_boosts: HashMap<String, StatBoost>,
    /// Maximum quantity; defaults to 1.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
    /// Whether the item can be consumed; defaults to true.
    #[serde(default = "default_consumable")]
    pub consumable: bool,
    /// Whether the item can be equipped; defaults to false.
    #[serde(default)]
    pub equippable: bool,
}

fn default_max_quantity() -> u32 {
    1
}

fn default_consumable() -> bool {
    true
}

impl InventoryCatalog {
    /// Builds a validated [`Inventory`] from this catalog.
    ///
    /// Stats are registered first, then items, each in catalog order through
    /// the ordinary guarded operations. The first failing entry aborts the
    /// build and its error is returned as-is.
    ///
    /// `resolve` maps an image path to an asset handle, standing in for
    /// whatever asset infrastructure the host uses. Returning `None` leaves
    /// that image unset on the item.
    pub fn build(
        self,
        mut resolve: impl FnMut(&str) -> Option<UntypedHandle>,
    ) -> Result<Inventory, InventoryError> {
        let mut inventory = Inventory::new();

        for stat in self.stats {
            inventory.register_stat(stat)?;
        }

        for raw in self.items {
            let mut item = InventoryItem::new(raw.name)
                .with_flavor_text(raw.flavor_text)
                .with_max_quantity(raw.max_quantity)
                .consumable(raw.consumable)
                .equippable(raw.equippable);

            if let Some(handle) = raw.thumbnail.as_deref().and_then(&mut resolve) {
                item = item.with_thumbnail(handle);
            }
            if let Some(handle) = raw.full_image.as_deref().and_then(&mut resolve) {
                item = item.with_full_image(handle);
            }
            for (stat, boost) in raw.stat_boosts {
                item = item.with_stat_boost(stat, boost);
            }

            inventory.register_item(item)?;
        }

        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"(
        stats: ["Strength", "Agility"],
        items: [
            (
                name: "Potion",
                flavor_text: "Red and bubbly.",
                thumbnail: Some("images/potion_thumb.png"),
                stat_boosts: { "Strength": (boost: 5, duration: 30) },
                max_quantity: 5,
            ),
            (
                name: "Boots of Haste",
                stat_boosts: { "Agility": (boost: 2) },
                consumable: false,
                equippable: true,
            ),
        ],
    )"#;

    #[test]
    fn a_full_catalog_deserializes_and_builds() {
        let catalog: InventoryCatalog = ron::from_str(CATALOG).unwrap();
        let inventory = catalog.build(|_| None).unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.stats().count(), 2);

        let potion = inventory.get("Potion").unwrap();
        assert_eq!(potion.flavor_text(), "Red and bubbly.");
        assert_eq!(potion.max_quantity(), 5);
        assert_eq!(
            potion.stat_boosts().get("Strength"),
            Some(&StatBoost::timed(5, 30))
        );

        let boots = inventory.get("Boots of Haste").unwrap();
        assert!(boots.is_equippable());
        assert!(!boots.is_consumable());
        assert_eq!(
            boots.stat_boosts().get("Agility"),
            Some(&StatBoost::permanent(2))
        );
    }

    #[test]
    fn omitted_fields_use_the_builder_defaults() {
        let catalog: InventoryCatalog =
            ron::from_str(r#"(items: [(name: "Pebble")])"#).unwrap();
        let inventory = catalog.build(|_| None).unwrap();

        let pebble = inventory.get("Pebble").unwrap();
        assert_eq!(pebble.flavor_text(), "");
        assert_eq!(pebble.max_quantity(), 1);
        assert!(pebble.is_consumable());
        assert!(!pebble.is_equippable());
        assert_eq!(pebble.quantity(), 0);
    }

    #[test]
    fn unknown_stats_abort_the_build() {
        let catalog: InventoryCatalog = ron::from_str(
            r#"(
                stats: ["Strength"],
                items: [
                    (
                        name: "Lucky Coin",
                        stat_boosts: { "Luck": (boost: 7) },
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(
            catalog.build(|_| None).unwrap_err(),
            InventoryError::UnknownStat("Luck".to_string())
        );
    }

    #[test]
    fn unresolved_image_paths_leave_images_unset() {
        let catalog: InventoryCatalog = ron::from_str(CATALOG).unwrap();
        let mut requested = Vec::new();
        let inventory = catalog
            .build(|path| {
                requested.push(path.to_string());
                None
            })
            .unwrap();

        assert!(inventory.get("Potion").unwrap().thumbnail().is_none());
        assert_eq!(requested, vec!["images/potion_thumb.png".to_string()]);
    }
}
