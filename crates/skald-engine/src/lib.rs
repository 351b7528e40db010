//! Command interpretation for Skald.
//!
//! Parses one textual command per line and dispatches it against a
//! [`skald_core::World`], returning console flavor text to print and
//! narrating every state change or rejection to the world's event log.
//! The grammar is permissive by contract: malformed lines degrade into
//! commands with default fields, and unrecognized input is silently
//! dropped.

/// Command grammar and permissive line parsing.
pub mod command;
/// Command dispatch against a world and narrator.
pub mod interpreter;

/// Re-export the command grammar.
pub use command::{Command, VERBS, parse_command, suggest_verb};
/// Re-export the interpreter.
pub use interpreter::Interpreter;
