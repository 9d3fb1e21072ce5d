//! Stat names and the boosts items grant to them.
//!
//! Stats are opaque strings, registered once during setup (conventionally at
//! scene start). Items may only reference stats the registry already knows
//! about, which catches typos in hand-authored catalogs at registration time
//! rather than deep inside gameplay code.

use bevy::reflect::Reflect;
use bevy::utils::HashSet;
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryError;

/// A flat modifier to a named stat, together with how long it lasts.
///
/// Boosts are stored on item definitions but never applied or ticked by this
/// crate: interpreting a boost (and counting down its duration) is the host
/// game's job.
///
/// # Example
///
/// ```
/// use bevy_inventory::stats::StatBoost;
///
/// // +5 Strength, forever.
/// let ring = StatBoost::permanent(5);
/// assert!(ring.is_permanent());
///
/// // +20 Strength for 30 host-defined time units.
/// let potion = StatBoost::timed(20, 30);
/// assert!(!potion.is_permanent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct StatBoost {
    /// The amount added to the stat while the boost is active.
    pub boost: i32,
    /// How long the boost lasts, in host-defined units.
    ///
    /// A duration of 0 means the boost never expires.
    #[serde(default)]
    pub duration: u32,
}

impl StatBoost {
    /// A boost that never expires.
    pub const fn permanent(boost: i32) -> Self {
        StatBoost { boost, duration: 0 }
    }

    /// A boost that lasts for `duration` host-defined time units.
    pub const fn timed(boost: i32, duration: u32) -> Self {
        StatBoost { boost, duration }
    }

    /// Returns true if this boost never expires.
    pub const fn is_permanent(&self) -> bool {
        self.duration == 0
    }
}

/// The set of stat names an inventory recognizes.
///
/// Append-only: stats can be registered but never removed.
#[derive(Debug, Clone, Default)]
pub struct StatRegistry {
    names: HashSet<String>,
}

impl StatRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stat name.
    ///
    /// Returns [`InventoryError::DuplicateStat`] if the name is already
    /// registered, leaving the registry unchanged.
    pub fn register(&mut self, name: impl Into<String>) -> Result<(), InventoryError> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(InventoryError::DuplicateStat(name));
        }

        self.names.insert(name);
        Ok(())
    }

    /// Returns true if `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterates over all registered stat names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The number of registered stats.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no stats have been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registering_a_stat_twice_fails_and_changes_nothing() {
        let mut registry = StatRegistry::new();
        registry.register("Strength").unwrap();

        assert_eq!(
            registry.register("Strength"),
            Err(InventoryError::DuplicateStat("Strength".to_string()))
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Strength"));
    }

    #[test]
    fn iteration_covers_all_registered_stats() {
        let mut registry = StatRegistry::new();
        for stat in ["Strength", "Agility", "Wisdom"] {
            registry.register(stat).unwrap();
        }

        let mut names: Vec<&str> = registry.iter().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Agility", "Strength", "Wisdom"]);
    }

    #[test]
    fn zero_duration_means_permanent() {
        assert!(StatBoost::permanent(3).is_permanent());
        assert!(StatBoost::timed(3, 0).is_permanent());
        assert!(!StatBoost::timed(3, 1).is_permanent());
    }
}
