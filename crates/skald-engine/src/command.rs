//! Command parsing for the story stream.
//!
//! One command per line, whitespace-tokenized, first token is the verb
//! (case-sensitive). Parsing is deliberately permissive, mimicking stream
//! extraction: a missing token reads as an empty string, a malformed
//! number reads as 0, and trailing extra tokens are ignored. Malformed
//! lines therefore degrade into commands with default fields instead of
//! parse errors; anything unrecognized becomes [`Command::Unknown`], which
//! the interpreter silently drops.

use strsim::jaro_winkler;

/// The command verbs recognized by [`parse_command`].
pub const VERBS: &[&str] = &["Create", "Attack", "Cast", "Drink", "Dialogue", "Show"];

/// Minimum similarity score for a verb suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// A parsed story command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new character.
    CreateCharacter {
        /// The raw class token ("fighter", "wizard", "archer"; anything
        /// else narrates but registers nothing).
        class: String,
        /// The character's name.
        name: String,
        /// Initial health points.
        hp: i32,
    },
    /// Hand a newly forged weapon to a character.
    CreateWeapon {
        /// The receiving character's name.
        owner: String,
        /// The weapon's name.
        name: String,
        /// Damage dealt per strike; non-positive values are a hard
        /// construction failure downstream.
        damage: i32,
    },
    /// Hand a newly brewed potion to a character.
    CreatePotion {
        /// The receiving character's name.
        owner: String,
        /// The potion's name.
        name: String,
        /// Healing per use; non-positive values are a hard construction
        /// failure downstream.
        heal: i32,
    },
    /// Hand a newly scribed spell to a character.
    CreateSpell {
        /// The receiving character's name.
        owner: String,
        /// The spell's name.
        name: String,
        /// The authorized-target names as written; the interpreter keeps
        /// only those registered at creation time.
        targets: Vec<String>,
    },
    /// One character attacks another with a named weapon.
    Attack {
        /// The attacker's name.
        attacker: String,
        /// The target's name.
        target: String,
        /// The weapon drawn from the attacker's arsenal.
        weapon: String,
    },
    /// One character casts a named spell on another.
    Cast {
        /// The caster's name.
        caster: String,
        /// The target's name.
        target: String,
        /// The spell drawn from the caster's spell book.
        spell: String,
    },
    /// A character drinks one of their own potions.
    Drink {
        /// The supplier named in the narration; never used for lookup.
        supplier: String,
        /// The drinker's name.
        drinker: String,
        /// The potion drawn from the drinker's own medical bag.
        potion: String,
    },
    /// Pure narration; mutates nothing.
    Dialogue {
        /// The speaker's name (need not be registered).
        speaker: String,
        /// The spoken words, space-joined for display.
        words: Vec<String>,
    },
    /// List the currently-alive characters.
    ShowCharacters,
    /// List a character's weapons.
    ShowWeapons {
        /// The character's name.
        name: String,
    },
    /// List a character's potions.
    ShowPotions {
        /// The character's name.
        name: String,
    },
    /// List a character's spells.
    ShowSpells {
        /// The character's name.
        name: String,
    },
    /// Anything the grammar does not recognize; silently dropped.
    Unknown {
        /// The original input line, trimmed.
        input: String,
    },
}

/// Token cursor with stream-extraction defaults.
struct Tokens<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            words: input.split_whitespace(),
        }
    }

    /// The next token, or an empty string when the line runs short.
    fn next_word(&mut self) -> String {
        self.words.next().unwrap_or_default().to_string()
    }

    /// The next token as a number; missing or malformed reads as 0.
    fn next_number(&mut self) -> i32 {
        self.words.next().and_then(|w| w.parse().ok()).unwrap_or(0)
    }

    /// Up to `count` further tokens; fewer when the line runs short.
    fn take_words(&mut self, count: i32) -> Vec<String> {
        (0..count.max(0))
            .map_while(|_| self.words.next())
            .map(str::to_string)
            .collect()
    }
}

/// Parse one input line into a command.
pub fn parse_command(input: &str) -> Command {
    let mut tokens = Tokens::new(input);
    match tokens.next_word().as_str() {
        "Create" => parse_create(input, &mut tokens),
        "Attack" => Command::Attack {
            attacker: tokens.next_word(),
            target: tokens.next_word(),
            weapon: tokens.next_word(),
        },
        "Cast" => Command::Cast {
            caster: tokens.next_word(),
            target: tokens.next_word(),
            spell: tokens.next_word(),
        },
        "Drink" => Command::Drink {
            supplier: tokens.next_word(),
            drinker: tokens.next_word(),
            potion: tokens.next_word(),
        },
        "Dialogue" => parse_dialogue(&mut tokens),
        "Show" => parse_show(input, &mut tokens),
        _ => unknown(input),
    }
}

fn unknown(input: &str) -> Command {
    Command::Unknown {
        input: input.trim().to_string(),
    }
}

fn parse_create(input: &str, tokens: &mut Tokens<'_>) -> Command {
    match tokens.next_word().as_str() {
        "character" => Command::CreateCharacter {
            class: tokens.next_word(),
            name: tokens.next_word(),
            hp: tokens.next_number(),
        },
        "item" => parse_create_item(input, tokens),
        _ => unknown(input),
    }
}

fn parse_create_item(input: &str, tokens: &mut Tokens<'_>) -> Command {
    match tokens.next_word().as_str() {
        "weapon" => Command::CreateWeapon {
            owner: tokens.next_word(),
            name: tokens.next_word(),
            damage: tokens.next_number(),
        },
        "potion" => Command::CreatePotion {
            owner: tokens.next_word(),
            name: tokens.next_word(),
            heal: tokens.next_number(),
        },
        "spell" => {
            let owner = tokens.next_word();
            let name = tokens.next_word();
            let count = tokens.next_number();
            Command::CreateSpell {
                owner,
                name,
                targets: tokens.take_words(count),
            }
        }
        _ => unknown(input),
    }
}

fn parse_dialogue(tokens: &mut Tokens<'_>) -> Command {
    let speaker = tokens.next_word();
    let count = tokens.next_number();
    Command::Dialogue {
        speaker,
        words: tokens.take_words(count),
    }
}

fn parse_show(input: &str, tokens: &mut Tokens<'_>) -> Command {
    match tokens.next_word().as_str() {
        "characters" => Command::ShowCharacters,
        "weapons" => Command::ShowWeapons {
            name: tokens.next_word(),
        },
        "potions" => Command::ShowPotions {
            name: tokens.next_word(),
        },
        "spells" => Command::ShowSpells {
            name: tokens.next_word(),
        },
        _ => unknown(input),
    }
}

/// Suggest the closest known verb for a mistyped first token.
///
/// Returns `None` when nothing scores above the similarity threshold.
pub fn suggest_verb(word: &str) -> Option<&'static str> {
    let word_lower = word.to_lowercase();
    VERBS
        .iter()
        .map(|verb| (*verb, jaro_winkler(&word_lower, &verb.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(verb, _)| verb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_character() {
        assert_eq!(
            parse_command("Create character fighter Bob 100"),
            Command::CreateCharacter {
                class: "fighter".to_string(),
                name: "Bob".to_string(),
                hp: 100,
            }
        );
    }

    #[test]
    fn parse_create_character_short_line_defaults() {
        assert_eq!(
            parse_command("Create character fighter Bob"),
            Command::CreateCharacter {
                class: "fighter".to_string(),
                name: "Bob".to_string(),
                hp: 0,
            }
        );
        assert_eq!(
            parse_command("Create character"),
            Command::CreateCharacter {
                class: String::new(),
                name: String::new(),
                hp: 0,
            }
        );
    }

    #[test]
    fn parse_create_character_malformed_hp_reads_as_zero() {
        assert_eq!(
            parse_command("Create character fighter Bob lots"),
            Command::CreateCharacter {
                class: "fighter".to_string(),
                name: "Bob".to_string(),
                hp: 0,
            }
        );
    }

    #[test]
    fn parse_create_weapon() {
        assert_eq!(
            parse_command("Create item weapon Bob Sword 10"),
            Command::CreateWeapon {
                owner: "Bob".to_string(),
                name: "Sword".to_string(),
                damage: 10,
            }
        );
    }

    #[test]
    fn parse_create_potion() {
        assert_eq!(
            parse_command("Create item potion Mia Elixir 15"),
            Command::CreatePotion {
                owner: "Mia".to_string(),
                name: "Elixir".to_string(),
                heal: 15,
            }
        );
    }

    #[test]
    fn parse_create_spell_reads_counted_targets() {
        assert_eq!(
            parse_command("Create item spell Mia Hex 2 Ann Tim"),
            Command::CreateSpell {
                owner: "Mia".to_string(),
                name: "Hex".to_string(),
                targets: vec!["Ann".to_string(), "Tim".to_string()],
            }
        );
    }

    #[test]
    fn parse_create_spell_count_beyond_line_end() {
        assert_eq!(
            parse_command("Create item spell Mia Hex 5 Ann"),
            Command::CreateSpell {
                owner: "Mia".to_string(),
                name: "Hex".to_string(),
                targets: vec!["Ann".to_string()],
            }
        );
    }

    #[test]
    fn parse_create_spell_negative_count_reads_nothing() {
        assert_eq!(
            parse_command("Create item spell Mia Hex -2 Ann Tim"),
            Command::CreateSpell {
                owner: "Mia".to_string(),
                name: "Hex".to_string(),
                targets: Vec::new(),
            }
        );
    }

    #[test]
    fn parse_attack() {
        assert_eq!(
            parse_command("Attack Bob Ann Sword"),
            Command::Attack {
                attacker: "Bob".to_string(),
                target: "Ann".to_string(),
                weapon: "Sword".to_string(),
            }
        );
    }

    #[test]
    fn parse_cast() {
        assert_eq!(
            parse_command("Cast Mia Ann Hex"),
            Command::Cast {
                caster: "Mia".to_string(),
                target: "Ann".to_string(),
                spell: "Hex".to_string(),
            }
        );
    }

    #[test]
    fn parse_drink() {
        assert_eq!(
            parse_command("Drink X Mia Elixir"),
            Command::Drink {
                supplier: "X".to_string(),
                drinker: "Mia".to_string(),
                potion: "Elixir".to_string(),
            }
        );
    }

    #[test]
    fn parse_dialogue_joins_counted_words() {
        assert_eq!(
            parse_command("Dialogue Bob 3 we ride tonight"),
            Command::Dialogue {
                speaker: "Bob".to_string(),
                words: vec!["we".to_string(), "ride".to_string(), "tonight".to_string()],
            }
        );
    }

    #[test]
    fn parse_dialogue_ignores_words_past_the_count() {
        assert_eq!(
            parse_command("Dialogue Bob 1 hello there"),
            Command::Dialogue {
                speaker: "Bob".to_string(),
                words: vec!["hello".to_string()],
            }
        );
    }

    #[test]
    fn parse_show_variants() {
        assert_eq!(parse_command("Show characters"), Command::ShowCharacters);
        assert_eq!(
            parse_command("Show weapons Bob"),
            Command::ShowWeapons {
                name: "Bob".to_string()
            }
        );
        assert_eq!(
            parse_command("Show potions Mia"),
            Command::ShowPotions {
                name: "Mia".to_string()
            }
        );
        assert_eq!(
            parse_command("Show spells Tim"),
            Command::ShowSpells {
                name: "Tim".to_string()
            }
        );
    }

    #[test]
    fn verbs_are_case_sensitive() {
        assert_eq!(
            parse_command("attack Bob Ann Sword"),
            Command::Unknown {
                input: "attack Bob Ann Sword".to_string()
            }
        );
    }

    #[test]
    fn unrecognized_input_is_unknown() {
        assert_eq!(
            parse_command("Dance wildly"),
            Command::Unknown {
                input: "Dance wildly".to_string()
            }
        );
        assert_eq!(parse_command(""), Command::Unknown { input: String::new() });
        assert_eq!(
            parse_command("Create weapon Bob Sword 10"),
            Command::Unknown {
                input: "Create weapon Bob Sword 10".to_string()
            }
        );
        assert_eq!(
            parse_command("Show inventory Bob"),
            Command::Unknown {
                input: "Show inventory Bob".to_string()
            }
        );
    }

    #[test]
    fn suggest_verb_finds_close_misspellings() {
        assert_eq!(suggest_verb("Atack"), Some("Attack"));
        assert_eq!(suggest_verb("drink"), Some("Drink"));
        assert_eq!(suggest_verb("zzz"), None);
    }
}
