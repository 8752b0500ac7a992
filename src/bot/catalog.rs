//! The fixed set of slash commands the bot advertises.
//!
//! The catalog is compiled in. Registration replaces the registry's whole command set
//! with this list, so removing an entry here removes the command from Discord on the
//! next start.

use std::collections::HashSet;

use crate::error::catalog::CatalogIssue;
use crate::model::command::{CommandDefinition, OptionDefinition};

/// Registry limit on global commands per application.
pub const MAX_COMMANDS: usize = 100;
/// Registry limit on options per command.
pub const MAX_OPTIONS: usize = 25;

const MAX_NAME_LEN: usize = 32;
const MAX_DESCRIPTION_LEN: usize = 100;

/// Commands registered on every start, in logging order.
pub const CATALOG: &[CommandDefinition] = &[
    CommandDefinition::new("ping", "Replies with pong", &[]),
    CommandDefinition::new(
        "docs",
        "Search the Fireship docs",
        &[OptionDefinition::required("query", "What to search for")],
    ),
    CommandDefinition::new(
        "ask",
        "Ask the community a question",
        &[
            OptionDefinition::required("question", "Your question"),
            OptionDefinition::optional("topic", "Framework or language it is about"),
        ],
    ),
];

/// Looks up a command definition by name.
pub fn find(catalog: &[CommandDefinition], name: &str) -> Option<CommandDefinition> {
    catalog.iter().find(|command| command.name == name).copied()
}

/// Checks the catalog against the registry's documented limits.
///
/// # Returns
/// - Every issue found, in catalog order. Empty when the catalog is expected to be
///   accepted as-is.
pub fn validate(catalog: &[CommandDefinition]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if catalog.len() > MAX_COMMANDS {
        issues.push(CatalogIssue::TooManyCommands {
            count: catalog.len(),
            max: MAX_COMMANDS,
        });
    }

    let mut seen_commands = HashSet::new();
    for command in catalog {
        if !seen_commands.insert(command.name) {
            issues.push(CatalogIssue::DuplicateCommand {
                command: command.name.to_string(),
            });
        }

        validate_command(command, &mut issues);
    }

    issues
}

fn validate_command(command: &CommandDefinition, issues: &mut Vec<CatalogIssue>) {
    let name = command.name.to_string();

    if !is_valid_name(command.name) {
        issues.push(CatalogIssue::InvalidCommandName {
            command: name.clone(),
        });
    }

    if !is_valid_description(command.description) {
        issues.push(CatalogIssue::InvalidCommandDescription {
            command: name.clone(),
        });
    }

    if command.options.len() > MAX_OPTIONS {
        issues.push(CatalogIssue::TooManyOptions {
            command: name.clone(),
            count: command.options.len(),
            max: MAX_OPTIONS,
        });
    }

    let mut seen_options = HashSet::new();
    let mut seen_optional = false;
    for option in command.options {
        let option_name = option.name.to_string();

        if !seen_options.insert(option.name) {
            issues.push(CatalogIssue::DuplicateOption {
                command: name.clone(),
                option: option_name.clone(),
            });
        }

        if !is_valid_name(option.name) {
            issues.push(CatalogIssue::InvalidOptionName {
                command: name.clone(),
                option: option_name.clone(),
            });
        }

        if !is_valid_description(option.description) {
            issues.push(CatalogIssue::InvalidOptionDescription {
                command: name.clone(),
                option: option_name.clone(),
            });
        }

        if option.required && seen_optional {
            issues.push(CatalogIssue::RequiredAfterOptional {
                command: name.clone(),
                option: option_name,
            });
        }

        seen_optional |= !option.required;
    }
}

fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();

    (1..=MAX_NAME_LEN).contains(&len)
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

fn is_valid_description(description: &str) -> bool {
    (1..=MAX_DESCRIPTION_LEN).contains(&description.chars().count())
}

#[cfg(test)]
#[path = "test/catalog.rs"]
mod tests;
