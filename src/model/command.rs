//! Declarative slash command definitions.
//!
//! These records describe what the bot advertises to the command registry. They are
//! plain `'static` values so the whole catalog can live in a constant and be iterated
//! without allocation.

use serenity::all::CommandOptionType;

/// Value type accepted by a command option.
///
/// Only string options are declared today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
}

impl OptionKind {
    /// Maps the option kind onto the registry's option type.
    pub fn as_registry_type(self) -> CommandOptionType {
        match self {
            OptionKind::String => CommandOptionType::String,
        }
    }
}

/// A single argument of a slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub kind: OptionKind,
}

impl OptionDefinition {
    /// Declares a required string option.
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            kind: OptionKind::String,
        }
    }

    /// Declares an optional string option.
    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            kind: OptionKind::String,
        }
    }
}

/// A slash command and its ordered options.
///
/// Option order is significant: the registry displays options in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionDefinition],
}

impl CommandDefinition {
    /// Declares a command with the given options.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        options: &'static [OptionDefinition],
    ) -> Self {
        Self {
            name,
            description,
            options,
        }
    }
}
