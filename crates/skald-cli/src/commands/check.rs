//! Lint a command script without executing it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use skald_engine::{Command, VERBS, parse_command, suggest_verb};

/// Parse every line of the script, warn about unrecognized commands, and
/// print a summary of command counts by verb.
pub fn run(script: &Path) -> Result<(), String> {
    let source = fs::read_to_string(script)
        .map_err(|e| format!("failed to read {}: {e}", script.display()))?;

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut commands = 0usize;
    let mut warnings = 0usize;

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let command = parse_command(line);
        if let Command::Unknown { .. } = command {
            warnings += 1;
            warn(index + 1, line);
        } else {
            commands += 1;
            *counts.entry(verb_of(&command)).or_default() += 1;
        }
    }

    if !counts.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Command", "Count"]);
        for (verb, count) in &counts {
            table.add_row(vec![(*verb).to_string(), count.to_string()]);
        }
        println!("{table}");
        println!();
    }

    if warnings > 0 {
        println!("  {commands} command(s), {warnings} warning(s)");
    } else {
        println!("  All commands recognized ({commands} total).");
    }

    Ok(())
}

fn warn(line_number: usize, line: &str) {
    let word = line.split_whitespace().next().unwrap_or_default();
    let detail = if VERBS.contains(&word) {
        format!("incomplete or malformed `{word}` command")
    } else {
        match suggest_verb(word) {
            Some(verb) => format!("unknown verb `{word}` (did you mean `{verb}`?)"),
            None => format!("unknown verb `{word}`"),
        }
    };
    println!("  {} line {line_number}: {detail}", "warning:".yellow().bold());
}

/// The display verb a recognized command is counted under.
fn verb_of(command: &Command) -> &'static str {
    match command {
        Command::CreateCharacter { .. } => "Create character",
        Command::CreateWeapon { .. } | Command::CreatePotion { .. } | Command::CreateSpell { .. } => {
            "Create item"
        }
        Command::Attack { .. } => "Attack",
        Command::Cast { .. } => "Cast",
        Command::Drink { .. } => "Drink",
        Command::Dialogue { .. } => "Dialogue",
        Command::ShowCharacters
        | Command::ShowWeapons { .. }
        | Command::ShowPotions { .. }
        | Command::ShowSpells { .. } => "Show",
        Command::Unknown { .. } => "Unknown",
    }
}
