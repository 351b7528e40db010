//! The character registry and the action paths that cross it.
//!
//! The world is the single owner of every character; actions that involve
//! two characters (an attack, a cast) resolve and copy what they need out
//! of the actor before mutating the target, so no aliasing ever crosses
//! the registry boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterClass};
use crate::error::{CoreError, CoreResult};
use crate::item::ItemKind;
use crate::narrator::Narrator;

/// The registry of every character that ever came to town, keyed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    characters: HashMap<String, Character>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Registry
    // -----------------------------------------------------------------------

    /// Register a character under its name.
    ///
    /// A second character with an occupied name silently replaces the
    /// first; the registry has no rejection path.
    pub fn add_character(&mut self, character: Character) {
        self.characters
            .insert(character.name().to_string(), character);
    }

    /// Whether a character with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.characters.contains_key(name)
    }

    /// Look up a character by name.
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    /// Look up a character by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters.get_mut(name)
    }

    /// The number of registered characters, dead ones included.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether no character has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The currently-alive characters as `name:Class:hp` entries, sorted
    /// lexically by the composite string.
    pub fn roster(&self) -> Vec<String> {
        let mut entries: Vec<String> = self
            .characters
            .values()
            .filter(|c| c.is_alive())
            .map(Character::roster_entry)
            .collect();
        entries.sort();
        entries
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Attack `target` with one of `attacker`'s weapons.
    ///
    /// Returns `Ok(false)` when the attacker lacks the weapon capability
    /// (narrated as a soft failure, nothing else happens); `Ok(true)` once
    /// the weapon-user path has run, whatever its internal outcome. The
    /// failure tier is per class: a Fighter's dead attacker, dead target,
    /// or unknown weapon are hard errors; an Archer's are narrated soft
    /// failures, and a dead Archer may still swing.
    pub fn attack(
        &mut self,
        attacker: &str,
        target: &str,
        weapon: &str,
        narrator: &mut Narrator,
    ) -> CoreResult<bool> {
        let actor = self
            .get(attacker)
            .ok_or_else(|| CoreError::UnknownCharacter(attacker.to_string()))?;
        if !actor.capabilities().weapons {
            narrator.event(format!("Error caught: {attacker} can't use weapons."));
            return Ok(false);
        }
        let hard = matches!(actor.class(), CharacterClass::Fighter);
        if hard && !actor.is_alive() {
            return Err(CoreError::NotAlive {
                name: attacker.to_string(),
                action: "perform an attack",
            });
        }

        let target_alive = self
            .get(target)
            .map(Character::is_alive)
            .ok_or_else(|| CoreError::UnknownCharacter(target.to_string()))?;
        if !target_alive {
            if hard {
                return Err(CoreError::InvalidTarget {
                    name: target.to_string(),
                });
            }
            // The message is worded around the attacker even though the
            // check is about the target.
            narrator.event(format!(
                "Error caught: {attacker} is not alive to perform an attack."
            ));
            return Ok(true);
        }

        let drawn = self
            .get(attacker)
            .and_then(Character::arsenal)
            .and_then(|a| a.get(weapon))
            .cloned();
        let Some(drawn) = drawn else {
            if hard {
                return Err(CoreError::ItemNotFound {
                    kind: ItemKind::Weapon,
                    name: weapon.to_string(),
                    container: "arsenal".to_string(),
                });
            }
            narrator.event(format!(
                "Error caught: {attacker} doesn't own the weapon {weapon}."
            ));
            return Ok(true);
        };

        let Some(victim) = self.get_mut(target) else {
            return Err(CoreError::UnknownCharacter(target.to_string()));
        };
        drawn.strike(attacker, victim, narrator);
        Ok(true)
    }

    /// Cast one of `caster`'s spells on `target`.
    ///
    /// Returns `Ok(false)` when the caster lacks the spell capability
    /// (narrated as a soft failure); `Ok(true)` once the spell-user path
    /// has run. A missing spell is a silent no-op. A Wizard's cast removes
    /// the spell from the book whatever the outcome (even a dead Wizard's
    /// failed attempt consumes it), while a dead Archer's cast is skipped
    /// entirely and keeps the spell.
    pub fn cast(
        &mut self,
        caster: &str,
        target: &str,
        spell: &str,
        narrator: &mut Narrator,
    ) -> CoreResult<bool> {
        let actor = self
            .get(caster)
            .ok_or_else(|| CoreError::UnknownCharacter(caster.to_string()))?;
        if !actor.capabilities().spells {
            narrator.event(format!("Error caught: {caster} can't cast spells."));
            return Ok(false);
        }
        if matches!(actor.class(), CharacterClass::Archer) && !actor.is_alive() {
            return Ok(true);
        }
        if !self.contains(target) {
            return Err(CoreError::UnknownCharacter(target.to_string()));
        }

        {
            let Some(user) = self.get(caster) else {
                return Err(CoreError::UnknownCharacter(caster.to_string()));
            };
            let Some(victim) = self.get(target) else {
                return Err(CoreError::UnknownCharacter(target.to_string()));
            };
            match user.spell_book().and_then(|b| b.get(spell)) {
                Some(prepared) => prepared.cast(user, victim, narrator),
                None => return Ok(true),
            }
        }

        if let Some(book) = self.get_mut(caster).and_then(Character::spell_book_mut) {
            book.remove(spell);
        }
        Ok(true)
    }

    /// Drink one of `drinker`'s own potions.
    ///
    /// Every class drinks, so there is no capability gate; a dead drinker
    /// and a missing potion are hard errors for all classes. The potion is
    /// applied to the drinker themself and removed from the medical bag.
    pub fn drink(&mut self, drinker: &str, potion: &str, narrator: &mut Narrator) -> CoreResult<()> {
        let actor = self
            .get(drinker)
            .ok_or_else(|| CoreError::UnknownCharacter(drinker.to_string()))?;
        if !actor.is_alive() {
            return Err(CoreError::NotAlive {
                name: drinker.to_string(),
                action: "drink a potion",
            });
        }

        let drawn = self
            .get_mut(drinker)
            .and_then(Character::medical_bag_mut)
            .and_then(|bag| bag.remove(potion));
        let Some(mut drawn) = drawn else {
            return Err(CoreError::ItemNotFound {
                kind: ItemKind::Potion,
                name: potion.to_string(),
                container: "medical bag".to_string(),
            });
        };

        let Some(target) = self.get_mut(drinker) else {
            return Err(CoreError::UnknownCharacter(drinker.to_string()));
        };
        drawn.apply(drinker, target, narrator);
        Ok(())
    }
}
