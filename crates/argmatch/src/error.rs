//! User-input error taxonomy for argument matching.

use thiserror::Error;

/// Errors produced while matching user-supplied tokens against a declared
/// command grammar.
///
/// Every variant describes bad *input*, returned as data so the caller
/// decides how to surface it. Grammar construction bugs (duplicate names,
/// a non-last `multiple` positional, ...) are not represented here: those
/// panic at declaration time because they indicate an invalid program, not
/// invalid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A token shaped like a flag or option matched no declared alias.
    #[error("Unknown argument '{token}' for command '{command}'")]
    UnknownArgument { token: String, command: String },

    /// An option required a value but the token stream ended.
    #[error("Missing value for argument '{arg}' for command '{command}'")]
    MissingValue { arg: String, command: String },

    /// A declared `required` argument was never given a value.
    #[error("Missing required argument '{arg}' for command '{command}'")]
    MissingRequiredArgument { arg: String, command: String },

    /// The command requires a subcommand and none was recognized.
    #[error("Missing required subcommand for command '{command}'")]
    MissingRequiredSubcommand { command: String },

    /// A positional token arrived with no declared positional left to fill,
    /// on a command declared with `allow_extra_positionals(false)`.
    #[error("Unexpected positional argument '{token}' for command '{command}'")]
    UnexpectedPositional { token: String, command: String },
}

impl MatchError {
    /// The name of the command level that produced the error.
    pub fn command(&self) -> &str {
        match self {
            Self::UnknownArgument { command, .. }
            | Self::MissingValue { command, .. }
            | Self::MissingRequiredArgument { command, .. }
            | Self::MissingRequiredSubcommand { command }
            | Self::UnexpectedPositional { command, .. } => command,
        }
    }
}

/// Failed conversion of a matched raw value into a typed value.
///
/// Distinct from [`MatchError`]: the tokens matched the grammar fine, but
/// the caller asked for a type the raw string cannot represent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value '{value}' for argument '{arg}': {reason}")]
pub struct InvalidValue {
    pub arg: String,
    pub value: String,
    pub reason: String,
}
