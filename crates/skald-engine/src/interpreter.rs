//! Command dispatch against a world and its narrator.
//!
//! The interpreter owns the world state and the event log, reads one
//! command at a time, and returns the console flavor text for the caller
//! to print. References to unregistered character names and unrecognized
//! commands are silently dropped: no console line, no event. Hard
//! failures surface as `Err`; the command loop appends them to the event
//! log and keeps going.

use skald_core::{
    Character, CharacterClass, Container, CoreResult, Item, Narrator, Potion, Spell, Stowable,
    Weapon, World,
};

use crate::command::{Command, parse_command};

/// Drives a [`World`] and [`Narrator`] from a stream of command lines.
#[derive(Debug)]
pub struct Interpreter {
    world: World,
    narrator: Narrator,
}

impl Interpreter {
    /// Create an interpreter over an empty world.
    pub fn new(narrator: Narrator) -> Self {
        Self {
            world: World::new(),
            narrator,
        }
    }

    /// The world being narrated.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The event log accumulated so far.
    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Mutable access to the event log (the command loop appends hard
    /// failures here).
    pub fn narrator_mut(&mut self) -> &mut Narrator {
        &mut self.narrator
    }

    /// Parse and execute one input line.
    ///
    /// Returns the console flavor text, or `None` when the line was
    /// silently dropped.
    pub fn process(&mut self, line: &str) -> CoreResult<Option<String>> {
        let command = parse_command(line);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> CoreResult<Option<String>> {
        match command {
            Command::CreateCharacter { class, name, hp } => {
                Ok(self.do_create_character(&class, name, hp))
            }
            Command::CreateWeapon {
                owner,
                name,
                damage,
            } => self.do_create_weapon(&owner, &name, damage),
            Command::CreatePotion { owner, name, heal } => {
                self.do_create_potion(&owner, &name, heal)
            }
            Command::CreateSpell {
                owner,
                name,
                targets,
            } => Ok(self.do_create_spell(&owner, &name, targets)),
            Command::Attack {
                attacker,
                target,
                weapon,
            } => self.do_attack(&attacker, &target, &weapon),
            Command::Cast {
                caster,
                target,
                spell,
            } => self.do_cast(&caster, &target, &spell),
            Command::Drink {
                supplier,
                drinker,
                potion,
            } => self.do_drink(&supplier, &drinker, &potion),
            Command::Dialogue { speaker, words } => {
                Ok(Some(format!("{speaker}: {}", words.join(" "))))
            }
            Command::ShowCharacters => Ok(Some(self.world.roster().join(" "))),
            Command::ShowWeapons { name } => Ok(self.show_listing(&name, Character::arsenal)),
            Command::ShowPotions { name } => Ok(self.show_listing(&name, Character::medical_bag)),
            Command::ShowSpells { name } => Ok(self.show_listing(&name, Character::spell_book)),
            Command::Unknown { .. } => Ok(None),
        }
    }

    /// The "came to town" line is printed for any class token, recognized
    /// or not; only recognized classes register a character.
    fn do_create_character(&mut self, class: &str, name: String, hp: i32) -> Option<String> {
        let console = format!("A new {class} came to town, {name}.");
        if let Some(parsed) = CharacterClass::parse(class) {
            self.world.add_character(Character::new(parsed, name, hp));
        }
        Some(console)
    }

    fn do_create_weapon(&mut self, owner: &str, name: &str, damage: i32) -> CoreResult<Option<String>> {
        if !self.world.contains(owner) {
            return Ok(None);
        }
        let weapon = Weapon::new(name, damage)?;
        self.hand_over(owner, weapon.into());
        Ok(Some(format!(
            "{owner} just obtained a new weapon called {name}."
        )))
    }

    fn do_create_potion(&mut self, owner: &str, name: &str, heal: i32) -> CoreResult<Option<String>> {
        if !self.world.contains(owner) {
            return Ok(None);
        }
        let potion = Potion::new(name, heal)?;
        self.hand_over(owner, potion.into());
        Ok(Some(format!(
            "{owner} just obtained a new potion called {name}."
        )))
    }

    fn do_create_spell(&mut self, owner: &str, name: &str, targets: Vec<String>) -> Option<String> {
        if !self.world.contains(owner) {
            return None;
        }
        // Only targets registered at creation time make the list.
        let targets = targets
            .into_iter()
            .filter(|t| self.world.contains(t))
            .collect();
        self.hand_over(owner, Spell::new(name, targets).into());
        Some(format!("{owner} just obtained a new spell called {name}."))
    }

    /// Stowing may fail softly (capability, capacity); the console line is
    /// printed either way, so the outcome is not propagated.
    fn hand_over(&mut self, owner: &str, item: Item) {
        if let Some(character) = self.world.get_mut(owner) {
            character.add_item(item, &mut self.narrator);
        }
    }

    fn do_attack(&mut self, attacker: &str, target: &str, weapon: &str) -> CoreResult<Option<String>> {
        if !self.world.contains(attacker) || !self.world.contains(target) {
            return Ok(None);
        }
        let ran = self
            .world
            .attack(attacker, target, weapon, &mut self.narrator)?;
        Ok(ran.then(|| format!("{attacker} attacks {target} with their {weapon}!")))
    }

    fn do_cast(&mut self, caster: &str, target: &str, spell: &str) -> CoreResult<Option<String>> {
        if !self.world.contains(caster) || !self.world.contains(target) {
            return Ok(None);
        }
        let ran = self.world.cast(caster, target, spell, &mut self.narrator)?;
        Ok(ran.then(|| format!("{caster} casts {spell} on {target}!")))
    }

    fn do_drink(&mut self, supplier: &str, drinker: &str, potion: &str) -> CoreResult<Option<String>> {
        if !self.world.contains(drinker) {
            return Ok(None);
        }
        self.world.drink(drinker, potion, &mut self.narrator)?;
        Ok(Some(format!("{drinker} drinks {potion} from {supplier}.")))
    }

    /// One `Display` line per item in name order; nothing at all for an
    /// unknown name, a class without that container, or an empty one.
    fn show_listing<T: Stowable + std::fmt::Display>(
        &self,
        name: &str,
        container_of: impl Fn(&Character) -> Option<&Container<T>>,
    ) -> Option<String> {
        let character = self.world.get(name)?;
        let lines: Vec<String> = container_of(character)
            .map(|c| c.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}
