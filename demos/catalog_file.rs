//! Deserializing a RON catalog and building a validated inventory from it.
//! Run with `cargo run --example catalog_file`.
//!
//! In a real game the catalog text would come from an asset file and the
//! resolver would hand back handles from the asset server; here the catalog
//! is inline and the images stay unresolved.

use bevy_inventory::catalog::InventoryCatalog;

const CATALOG: &str = r#"(
    stats: ["Strength", "Agility"],
    items: [
        (
            name: "Potion of Strength",
            flavor_text: "Tastes like burning.",
            thumbnail: Some("images/potion_thumb.png"),
            full_image: Some("images/potion.png"),
            stat_boosts: { "Strength": (boost: 5, duration: 30) },
            max_quantity: 5,
        ),
        (
            name: "Boots of Haste",
            flavor_text: "Still warm from the last owner.",
            stat_boosts: { "Agility": (boost: 2) },
            consumable: false,
            equippable: true,
        ),
    ],
)"#;

fn main() {
    let catalog: InventoryCatalog = ron::from_str(CATALOG).expect("catalog should parse");

    let inventory = catalog
        .build(|path| {
            println!("host would load {path} here");
            None
        })
        .expect("catalog should validate");

    println!("\nstats: {}", inventory.stats().collect::<Vec<_>>().join(", "));
    for item in inventory.items() {
        println!(
            "{} (max {}): {}",
            item.name(),
            item.max_quantity(),
            item.flavor_text()
        );
        for (stat, boost) in item.stat_boosts() {
            let duration = if boost.is_permanent() {
                "permanently".to_string()
            } else {
                format!("for {} ticks", boost.duration)
            };
            println!("  {:+} {} {}", boost.boost, stat, duration);
        }
    }
}
