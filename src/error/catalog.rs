use thiserror::Error;

/// A command definition the registry is expected to reject.
///
/// Produced by catalog validation before submission. Issues are reported but do not
/// stop the batch from being sent, since the registry has the final say.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("Catalog declares {count} commands, the registry accepts at most {max}")]
    TooManyCommands { count: usize, max: usize },

    #[error("Command name '{command}' must be 1-32 lowercase letters, digits, '-' or '_'")]
    InvalidCommandName { command: String },

    #[error("Command '{command}' description must be 1-100 characters")]
    InvalidCommandDescription { command: String },

    #[error("Command '{command}' is declared more than once")]
    DuplicateCommand { command: String },

    #[error("Command '{command}' declares {count} options, the registry accepts at most {max}")]
    TooManyOptions {
        command: String,
        count: usize,
        max: usize,
    },

    #[error("Option name '{option}' of command '{command}' must be 1-32 lowercase letters, digits, '-' or '_'")]
    InvalidOptionName { command: String, option: String },

    #[error("Option '{option}' of command '{command}' description must be 1-100 characters")]
    InvalidOptionDescription { command: String, option: String },

    #[error("Option '{option}' is declared more than once on command '{command}'")]
    DuplicateOption { command: String, option: String },

    #[error("Required option '{option}' of command '{command}' follows an optional one")]
    RequiredAfterOptional { command: String, option: String },
}
