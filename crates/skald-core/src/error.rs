use crate::item::ItemKind;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Hard failures: errors that abort the current action.
///
/// Soft failures (capacity violations, capability violations, a rejected
/// spell target) never construct one of these; they are appended to the
/// [`Narrator`](crate::Narrator) event log and the action completes as a
/// no-op.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An item was constructed with a zero or negative effect value.
    #[error("{what} must be positive")]
    NonPositiveValue {
        /// The rejected construction parameter ("damageValue" or "healValue").
        what: &'static str,
    },

    /// A dead character tried to act.
    #[error("{name} is not alive to {action}")]
    NotAlive {
        /// The character that tried to act.
        name: String,
        /// The action that was attempted ("perform an attack", "drink a potion").
        action: &'static str,
    },

    /// The target of an action is dead.
    #[error("target {name} is not valid or not alive")]
    InvalidTarget {
        /// The rejected target's name.
        name: String,
    },

    /// A named item is not in the container the action draws from.
    #[error("{kind} {name} not found in {container}")]
    ItemNotFound {
        /// The kind of item that was looked up.
        kind: ItemKind,
        /// The item name that was looked up.
        name: String,
        /// The display label of the container that was searched.
        container: String,
    },

    /// No character with the given name is registered.
    #[error("no character named {0}")]
    UnknownCharacter(String),
}
