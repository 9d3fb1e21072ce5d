//! Code-driven setup and the full add/consume/equip flow, printed step by
//! step. Run with `cargo run --example potion_shop`.

use bevy_inventory::inventory::Inventory;
use bevy_inventory::item::InventoryItem;
use bevy_inventory::stats::StatBoost;

fn main() {
    let mut inventory = Inventory::new();

    for stat in ["Strength", "Agility"] {
        inventory.register_stat(stat).unwrap();
    }

    inventory
        .register_item(
            InventoryItem::new("Potion of Strength")
                .with_flavor_text("Tastes like burning.")
                .with_stat_boost("Strength", StatBoost::timed(5, 30))
                .with_max_quantity(5),
        )
        .unwrap();

    inventory
        .register_item(
            InventoryItem::new("Boots of Haste")
                .with_flavor_text("Still warm from the last owner.")
                .with_stat_boost("Agility", StatBoost::permanent(2))
                .consumable(false)
                .equippable(true),
        )
        .unwrap();

    inventory.add_item("Potion of Strength", 3).unwrap();
    inventory.add_item("Boots of Haste", 1).unwrap();

    // A sixth potion won't fit.
    if let Err(error) = inventory.add_item("Potion of Strength", 3) {
        println!("shopkeeper refuses: {error}");
    }

    inventory.consume_item("Potion of Strength", 1).unwrap();
    inventory.equip_item("Boots of Haste").unwrap();

    // Potions can't be worn.
    if let Err(error) = inventory.equip_item("Potion of Strength") {
        println!("that doesn't fit anywhere: {error}");
    }

    println!("\ncarrying:");
    for item in inventory.items() {
        println!(
            "  {} x{} {}",
            item.name(),
            item.quantity(),
            if item.is_equipped() { "(equipped)" } else { "" }
        );
    }

    println!("\nequipped:");
    for item in inventory.equipped_items() {
        println!("  {} - {}", item.name(), item.flavor_text());
    }
}
