//! Item variants and their use-effects.
//!
//! The three variants form a closed union: routing an item into a
//! character's containers is a match on [`ItemKind`], never a type-identity
//! check. A weapon is reusable, a potion is single-use, and a spell is
//! narrative-only: casting it logs the event but changes no health value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{CoreError, CoreResult};
use crate::narrator::Narrator;

/// Discriminates the three item variants for container routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A damage-dealing, reusable weapon.
    Weapon,
    /// A single-use healing potion.
    Potion,
    /// A narrative-only spell with a fixed authorized-target list.
    Spell,
}

impl ItemKind {
    /// The plural noun used in capability-violation narration
    /// ("can't carry weapons.").
    pub fn carried_as(self) -> &'static str {
        match self {
            Self::Weapon => "weapons",
            Self::Potion => "potions",
            Self::Spell => "spells",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "Weapon"),
            Self::Potion => write!(f, "Potion"),
            Self::Spell => write!(f, "Spell"),
        }
    }
}

/// A reusable weapon dealing a fixed amount of damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    damage: i32,
}

impl Weapon {
    /// Create a weapon. The damage value must be positive.
    pub fn new(name: impl Into<String>, damage: i32) -> CoreResult<Self> {
        if damage <= 0 {
            return Err(CoreError::NonPositiveValue {
                what: "damageValue",
            });
        }
        Ok(Self {
            name: name.into(),
            damage,
        })
    }

    /// The weapon's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The damage dealt per strike.
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Strike the target: apply damage and narrate the attack.
    ///
    /// The user's aliveness is not required here; the per-class attack
    /// paths decide whether a dead attacker may swing. An already-dead
    /// target takes no further damage, but the strike is still narrated.
    pub fn strike(&self, user: &str, target: &mut Character, narrator: &mut Narrator) {
        target.take_damage(self.damage, narrator);
        narrator.event(format!(
            "{user} attacks {} with {}, dealing {} damage.",
            target.name(),
            self.name,
            self.damage
        ));
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weapon: {} Damage: {}", self.name, self.damage)
    }
}

/// A single-use potion healing a fixed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    name: String,
    heal: i32,
    spent: bool,
}

impl Potion {
    /// Create a potion. The heal value must be positive.
    pub fn new(name: impl Into<String>, heal: i32) -> CoreResult<Self> {
        if heal <= 0 {
            return Err(CoreError::NonPositiveValue { what: "healValue" });
        }
        Ok(Self {
            name: name.into(),
            heal,
            spent: false,
        })
    }

    /// The potion's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The amount healed by one use.
    pub fn heal_value(&self) -> i32 {
        self.heal
    }

    /// Whether the potion has already been used up.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Apply the potion to the target and flip it inert.
    ///
    /// Requires the target alive and the potion still active; otherwise
    /// this is a silent no-op. The only drinking path passes the drinker
    /// as both user and target.
    pub fn apply(&mut self, user: &str, target: &mut Character, narrator: &mut Narrator) {
        if self.spent || !target.is_alive() {
            return;
        }
        target.heal(self.heal);
        narrator.event(format!(
            "{user} uses {} on {}, healing {} HP.",
            self.name,
            target.name(),
            self.heal
        ));
        self.spent = true;
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Potion: {} HealValue: {}", self.name, self.heal)
    }
}

/// A narrative-only spell that may only be cast on its authorized targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    name: String,
    allowed_targets: Vec<String>,
}

impl Spell {
    /// Create a spell with its fixed authorized-target list.
    ///
    /// The list is immutable after construction; the command layer keeps
    /// only names registered at creation time.
    pub fn new(name: impl Into<String>, allowed_targets: Vec<String>) -> Self {
        Self {
            name: name.into(),
            allowed_targets,
        }
    }

    /// The spell's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the named character is an authorized target.
    pub fn allows(&self, target: &str) -> bool {
        self.allowed_targets.iter().any(|t| t == target)
    }

    /// Cast the spell: narrate the outcome, never touch any health value.
    pub fn cast(&self, user: &Character, target: &Character, narrator: &mut Narrator) {
        if !user.is_alive() {
            narrator.event("Error: User is not alive or does not exist.");
            return;
        }
        if !target.is_alive() {
            narrator.event("Error: Target is not valid or not alive.");
            return;
        }
        if !self.allows(target.name()) {
            narrator.event(format!(
                "{} attempted to cast {} on an unauthorized target: {}.",
                user.name(),
                self.name,
                target.name()
            ));
            return;
        }
        narrator.event(format!(
            "{} casts {} on {}.",
            user.name(),
            self.name,
            target.name()
        ));
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spell: {}", self.name)
    }
}

/// A closed union over the three item variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// A weapon, routed to the arsenal.
    Weapon(Weapon),
    /// A potion, routed to the medical bag.
    Potion(Potion),
    /// A spell, routed to the spell book.
    Spell(Spell),
}

impl Item {
    /// The variant discriminator used for container routing.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Weapon(_) => ItemKind::Weapon,
            Self::Potion(_) => ItemKind::Potion,
            Self::Spell(_) => ItemKind::Spell,
        }
    }

    /// The item's name, unique only within its owning container.
    pub fn name(&self) -> &str {
        match self {
            Self::Weapon(w) => w.name(),
            Self::Potion(p) => p.name(),
            Self::Spell(s) => s.name(),
        }
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Self::Weapon(weapon)
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Self::Potion(potion)
    }
}

impl From<Spell> for Item {
    fn from(spell: Spell) -> Self {
        Self::Spell(spell)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon(w) => fmt::Display::fmt(w, f),
            Self::Potion(p) => fmt::Display::fmt(p, f),
            Self::Spell(s) => fmt::Display::fmt(s, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;

    fn archer(name: &str, hp: i32) -> Character {
        Character::new(CharacterClass::Archer, name, hp)
    }

    #[test]
    fn weapon_requires_positive_damage() {
        assert!(Weapon::new("Sword", 0).is_err());
        assert!(Weapon::new("Sword", -3).is_err());
        assert!(Weapon::new("Sword", 1).is_ok());
    }

    #[test]
    fn potion_requires_positive_heal() {
        assert!(Potion::new("Elixir", 0).is_err());
        assert!(Potion::new("Elixir", 15).is_ok());
    }

    #[test]
    fn strike_damages_and_narrates() {
        let weapon = Weapon::new("Sword", 10).unwrap();
        let mut ann = archer("Ann", 50);
        let mut narrator = Narrator::new();
        weapon.strike("Bob", &mut ann, &mut narrator);
        assert_eq!(ann.health(), 40);
        assert_eq!(
            narrator.events(),
            ["Bob attacks Ann with Sword, dealing 10 damage."]
        );
    }

    #[test]
    fn strike_on_dead_target_deals_no_damage_but_is_narrated() {
        let weapon = Weapon::new("Sword", 10).unwrap();
        let mut ghost = archer("Ghost", 0);
        let mut narrator = Narrator::new();
        weapon.strike("Bob", &mut ghost, &mut narrator);
        assert_eq!(ghost.health(), 0);
        assert_eq!(
            narrator.events(),
            ["Bob attacks Ghost with Sword, dealing 10 damage."]
        );
    }

    #[test]
    fn potion_heals_exactly_once() {
        let mut potion = Potion::new("Elixir", 15).unwrap();
        let mut mia = archer("Mia", 30);
        let mut narrator = Narrator::new();
        potion.apply("Mia", &mut mia, &mut narrator);
        assert_eq!(mia.health(), 45);
        assert!(potion.is_spent());

        potion.apply("Mia", &mut mia, &mut narrator);
        assert_eq!(mia.health(), 45);
        assert_eq!(
            narrator.events(),
            ["Mia uses Elixir on Mia, healing 15 HP."]
        );
    }

    #[test]
    fn potion_on_dead_target_is_a_silent_no_op() {
        let mut potion = Potion::new("Elixir", 15).unwrap();
        let mut ghost = archer("Ghost", 0);
        let mut narrator = Narrator::new();
        potion.apply("Ghost", &mut ghost, &mut narrator);
        assert_eq!(ghost.health(), 0);
        assert!(!potion.is_spent());
        assert!(narrator.events().is_empty());
    }

    #[test]
    fn spell_rejects_unauthorized_target() {
        let spell = Spell::new("Hex", vec!["Ann".to_string()]);
        let mia = archer("Mia", 30);
        let tim = archer("Tim", 20);
        let mut narrator = Narrator::new();
        spell.cast(&mia, &tim, &mut narrator);
        assert_eq!(
            narrator.events(),
            ["Mia attempted to cast Hex on an unauthorized target: Tim."]
        );
    }

    #[test]
    fn spell_cast_is_narrative_only() {
        let spell = Spell::new("Hex", vec!["Ann".to_string()]);
        let mia = archer("Mia", 30);
        let ann = archer("Ann", 50);
        let mut narrator = Narrator::new();
        spell.cast(&mia, &ann, &mut narrator);
        assert_eq!(ann.health(), 50);
        assert_eq!(narrator.events(), ["Mia casts Hex on Ann."]);
    }

    #[test]
    fn spell_requires_living_user_and_target() {
        let spell = Spell::new("Hex", vec!["Ann".to_string()]);
        let dead = archer("Mia", 0);
        let ann = archer("Ann", 50);
        let mut narrator = Narrator::new();
        spell.cast(&dead, &ann, &mut narrator);
        assert_eq!(narrator.events(), ["Error: User is not alive or does not exist."]);

        let mia = archer("Mia", 30);
        let ghost = archer("Ghost", 0);
        let mut narrator = Narrator::new();
        spell.cast(&mia, &ghost, &mut narrator);
        assert_eq!(narrator.events(), ["Error: Target is not valid or not alive."]);
    }

    #[test]
    fn display_lines_match_inventory_listing_format() {
        assert_eq!(
            Weapon::new("Sword", 10).unwrap().to_string(),
            "Weapon: Sword Damage: 10"
        );
        assert_eq!(
            Potion::new("Elixir", 15).unwrap().to_string(),
            "Potion: Elixir HealValue: 15"
        );
        assert_eq!(Spell::new("Hex", Vec::new()).to_string(), "Spell: Hex");
    }

    #[test]
    fn item_union_reports_kind_and_name() {
        let item = Item::from(Weapon::new("Sword", 10).unwrap());
        assert_eq!(item.kind(), ItemKind::Weapon);
        assert_eq!(item.name(), "Sword");
    }
}
