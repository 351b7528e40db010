//! Character classes, capability sets, and the character itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::item::{Item, ItemKind, Potion, Spell, Weapon};
use crate::narrator::Narrator;

/// The three concrete character variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Carries weapons and potions; attacks and drinks. Failures on the
    /// attack path are hard.
    Fighter,
    /// Carries spells and potions; casts and drinks.
    Wizard,
    /// Carries all three kinds; attacks, casts, and drinks. Failures on
    /// the attack and cast paths are soft.
    Archer,
}

impl CharacterClass {
    /// Parse the lowercase command token ("fighter", "wizard", "archer").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fighter" => Some(Self::Fighter),
            "wizard" => Some(Self::Wizard),
            "archer" => Some(Self::Archer),
            _ => None,
        }
    }

    /// The capability set fixed by this class.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Fighter => Capabilities {
                weapons: true,
                potions: true,
                spells: false,
            },
            Self::Wizard => Capabilities {
                weapons: false,
                potions: true,
                spells: true,
            },
            Self::Archer => Capabilities {
                weapons: true,
                potions: true,
                spells: true,
            },
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fighter => write!(f, "Fighter"),
            Self::Wizard => write!(f, "Wizard"),
            Self::Archer => write!(f, "Archer"),
        }
    }
}

/// The three boolean facets gating what a character may carry and do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// May carry weapons and perform attacks.
    pub weapons: bool,
    /// May carry potions and drink them.
    pub potions: bool,
    /// May carry spells and cast them.
    pub spells: bool,
}

impl Capabilities {
    /// Whether this capability set permits carrying the given item kind.
    pub fn allows(&self, kind: ItemKind) -> bool {
        match kind {
            ItemKind::Weapon => self.weapons,
            ItemKind::Potion => self.potions,
            ItemKind::Spell => self.spells,
        }
    }
}

/// A member of the cast: a named, classed entity with health and one owned
/// container per item kind its class may carry.
///
/// The name is the sole lookup key in the [`World`](crate::World)
/// registry. Aliveness is derived from health; the alive→dead transition
/// under damage is one-way and narrated exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    name: String,
    health: i32,
    class: CharacterClass,
    arsenal: Option<Container<Weapon>>,
    medical_bag: Option<Container<Potion>>,
    spell_book: Option<Container<Spell>>,
}

impl Character {
    /// Create a character with the container set and capacities fixed by
    /// its class: Fighter arsenal 3 / medical bag 5, Wizard spell book 10 /
    /// medical bag 10, Archer arsenal 2 / medical bag 3 / spell book 2.
    pub fn new(class: CharacterClass, name: impl Into<String>, health: i32) -> Self {
        let (arsenal, medical_bag, spell_book) = match class {
            CharacterClass::Fighter => (Some(3), Some(5), None),
            CharacterClass::Wizard => (None, Some(10), Some(10)),
            CharacterClass::Archer => (Some(2), Some(3), Some(2)),
        };
        Self {
            name: name.into(),
            health,
            class,
            arsenal: arsenal.map(|cap| Container::new("arsenal", cap)),
            medical_bag: medical_bag.map(|cap| Container::new("medical bag", cap)),
            spell_book: spell_book.map(|cap| Container::new("spell book", cap)),
        }
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's class.
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// Current health points (never below 0).
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Whether the character is alive (health above 0).
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// The capability set fixed by the character's class.
    pub fn capabilities(&self) -> Capabilities {
        self.class.capabilities()
    }

    /// The weapon container, if the class carries weapons.
    pub fn arsenal(&self) -> Option<&Container<Weapon>> {
        self.arsenal.as_ref()
    }

    /// The potion container, if the class carries potions.
    pub fn medical_bag(&self) -> Option<&Container<Potion>> {
        self.medical_bag.as_ref()
    }

    /// The spell container, if the class carries spells.
    pub fn spell_book(&self) -> Option<&Container<Spell>> {
        self.spell_book.as_ref()
    }

    /// Mutable access to the potion container.
    pub fn medical_bag_mut(&mut self) -> Option<&mut Container<Potion>> {
        self.medical_bag.as_mut()
    }

    /// Mutable access to the spell container.
    pub fn spell_book_mut(&mut self) -> Option<&mut Container<Spell>> {
        self.spell_book.as_mut()
    }

    /// Route an item to the container for its kind. Returns whether it was
    /// stowed.
    ///
    /// A kind the capability set forbids and a full container are both
    /// soft failures: narrated, and the item is dropped.
    pub fn add_item(&mut self, item: Item, narrator: &mut Narrator) -> bool {
        let kind = item.kind();
        if !self.capabilities().allows(kind) {
            narrator.event(format!(
                "Error caught: {} can't carry {}.",
                self.name,
                kind.carried_as()
            ));
            return false;
        }
        let outcome = match item {
            Item::Weapon(weapon) => self
                .arsenal
                .as_mut()
                .map(|c| c.insert(weapon).map_err(|w| w.name().to_string())),
            Item::Potion(potion) => self
                .medical_bag
                .as_mut()
                .map(|c| c.insert(potion).map_err(|p| p.name().to_string())),
            Item::Spell(spell) => self
                .spell_book
                .as_mut()
                .map(|c| c.insert(spell).map_err(|s| s.name().to_string())),
        };
        match outcome {
            Some(Ok(())) => true,
            Some(Err(rejected)) => {
                narrator.event(format!(
                    "Error caught: Container is full. Cannot add {rejected}."
                ));
                false
            }
            // Every class owns a container for each kind it may carry.
            None => false,
        }
    }

    /// Subtract damage, clamping health at 0.
    ///
    /// A dead character takes no further damage; crossing from alive to
    /// dead narrates the death exactly once.
    pub fn take_damage(&mut self, amount: i32, narrator: &mut Narrator) {
        if !self.is_alive() {
            return;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            narrator.event(format!("{} has died.", self.name));
        }
    }

    /// Add to health, unconditionally: no upper clamp, no aliveness check.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    /// The `name:Class:hp` entry used by the roster listing.
    pub fn roster_entry(&self) -> String {
        format!("{}:{}:{}", self.name, self.class, self.health)
    }
}
