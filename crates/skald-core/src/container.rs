//! Fixed-capacity, name-keyed item containers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Anything a [`Container`] can store by name.
pub trait Stowable {
    /// The name the item is keyed by inside its container.
    fn name(&self) -> &str;
}

impl Stowable for crate::item::Weapon {
    fn name(&self) -> &str {
        self.name()
    }
}

impl Stowable for crate::item::Potion {
    fn name(&self) -> &str {
        self.name()
    }
}

impl Stowable for crate::item::Spell {
    fn name(&self) -> &str {
        self.name()
    }
}

/// A fixed-capacity registry of one item variant, owned by one character.
///
/// Items are keyed by name, so iteration and listings come out in lexical
/// name order. The capacity is fixed at construction; size never exceeds
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container<T> {
    label: String,
    capacity: usize,
    items: BTreeMap<String, T>,
}

impl<T: Stowable> Container<T> {
    /// Create an empty container with a display label and a capacity.
    pub fn new(label: impl Into<String>, capacity: usize) -> Self {
        Self {
            label: label.into(),
            capacity,
            items: BTreeMap::new(),
        }
    }

    /// Store an item by name, overwriting a prior item of the same name.
    ///
    /// A full container rejects the insertion and hands the item back.
    /// The capacity check comes first, so even a same-name overwrite is
    /// rejected at capacity.
    pub fn insert(&mut self, item: T) -> Result<(), T> {
        if self.items.len() >= self.capacity {
            return Err(item);
        }
        self.items.insert(item.name().to_string(), item);
        Ok(())
    }

    /// Look up an item by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.get(name)
    }

    /// Remove and return an item by name; idempotent when absent.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.items.remove(name)
    }

    /// Iterate the items in lexical name order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// The display label ("arsenal", "medical bag", "spell book").
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the container holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Weapon;

    fn weapon(name: &str) -> Weapon {
        Weapon::new(name, 5).unwrap()
    }

    fn arsenal(capacity: usize) -> Container<Weapon> {
        Container::new("arsenal", capacity)
    }

    #[test]
    fn insert_and_get() {
        let mut container = arsenal(3);
        container.insert(weapon("Sword")).unwrap();
        assert_eq!(container.get("Sword").map(Weapon::name), Some("Sword"));
        assert!(container.get("Axe").is_none());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn insert_beyond_capacity_is_rejected() {
        let mut container = arsenal(2);
        container.insert(weapon("Sword")).unwrap();
        container.insert(weapon("Axe")).unwrap();
        let rejected = container.insert(weapon("Bow"));
        assert!(rejected.is_err());
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn full_container_rejects_even_a_same_name_overwrite() {
        let mut container = arsenal(1);
        container.insert(weapon("Sword")).unwrap();
        assert!(container.insert(weapon("Sword")).is_err());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn same_name_overwrites_below_capacity() {
        let mut container = arsenal(2);
        container.insert(weapon("Sword")).unwrap();
        container.insert(Weapon::new("Sword", 9).unwrap()).unwrap();
        assert_eq!(container.len(), 1);
        assert_eq!(container.get("Sword").map(Weapon::damage), Some(9));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut container = arsenal(2);
        container.insert(weapon("Sword")).unwrap();
        assert!(container.remove("Sword").is_some());
        assert!(container.remove("Sword").is_none());
        assert!(container.is_empty());
    }

    #[test]
    fn iteration_is_in_lexical_name_order() {
        let mut container = arsenal(3);
        container.insert(weapon("Sword")).unwrap();
        container.insert(weapon("Axe")).unwrap();
        container.insert(weapon("Bow")).unwrap();
        let names: Vec<&str> = container.iter().map(Weapon::name).collect();
        assert_eq!(names, ["Axe", "Bow", "Sword"]);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut container = arsenal(0);
        assert!(container.insert(weapon("Sword")).is_err());
        assert!(container.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn size_never_exceeds_capacity(
                names in proptest::collection::vec("[a-z]{1,8}", 0..24),
                capacity in 0usize..6,
            ) {
                let mut container = arsenal(capacity);
                for name in names {
                    let _ = container.insert(weapon(&name));
                    prop_assert!(container.len() <= capacity);
                }
            }
        }
    }
}
