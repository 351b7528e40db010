//! Core model for Skald: characters, items, containers, and the narrated
//! world.
//!
//! This crate defines the cast that the command stream drives. It is
//! independent of the interpreter — you can construct a [`World`]
//! programmatically, hand it a [`Narrator`], and play out actions directly.
//!
//! Failures come in two tiers, deliberately asymmetric across character
//! classes (a Fighter's bad attack is a hard [`CoreError`], an Archer's is
//! a narrated soft failure): see the per-method docs on [`World`].

/// Character classes, capability sets, and the character itself.
pub mod character;
/// Fixed-capacity, name-keyed item containers.
pub mod container;
/// Error types used throughout the crate.
pub mod error;
/// Item variants and their use-effects.
pub mod item;
/// The append-only narration sink.
pub mod narrator;
/// The character registry and cross-character action paths.
pub mod world;

/// Re-export character types.
pub use character::{Capabilities, Character, CharacterClass};
/// Re-export container types.
pub use container::{Container, Stowable};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Item, ItemKind, Potion, Spell, Weapon};
/// Re-export the narration sink.
pub use narrator::Narrator;
/// Re-export the world model.
pub use world::World;
