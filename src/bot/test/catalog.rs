use super::*;
use crate::error::catalog::CatalogIssue;

#[test]
fn shipped_catalog_is_valid() {
    assert_eq!(validate(CATALOG), Vec::new());
}

#[test]
fn finds_command_by_name() {
    let ping = find(CATALOG, "ping").unwrap();

    assert_eq!(ping.name, "ping");
    assert!(ping.options.is_empty());
    assert!(find(CATALOG, "missing").is_none());
}

#[test]
fn empty_catalog_is_valid() {
    assert!(validate(&[]).is_empty());
}

/// Tests that names the registry would reject are reported.
///
/// Expected: uppercase, spaced and over-long names are each flagged
#[test]
fn flags_invalid_command_names() {
    const CATALOG: &[CommandDefinition] = &[
        CommandDefinition::new("Ping", "Replies with pong", &[]),
        CommandDefinition::new("two words", "Has a space", &[]),
        CommandDefinition::new(
            "this-command-name-is-far-too-long-for-discord",
            "Too long",
            &[],
        ),
        CommandDefinition::new("", "Empty", &[]),
    ];

    let issues = validate(CATALOG);

    assert_eq!(issues.len(), 4);
    assert!(issues
        .iter()
        .all(|issue| matches!(issue, CatalogIssue::InvalidCommandName { .. })));
}

#[test]
fn flags_missing_description() {
    const CATALOG: &[CommandDefinition] = &[CommandDefinition::new("ping", "", &[])];

    assert_eq!(
        validate(CATALOG),
        vec![CatalogIssue::InvalidCommandDescription {
            command: "ping".to_string()
        }]
    );
}

#[test]
fn flags_duplicate_commands() {
    const CATALOG: &[CommandDefinition] = &[
        CommandDefinition::new("ping", "Replies with pong", &[]),
        CommandDefinition::new("ping", "Replies with pong again", &[]),
    ];

    assert_eq!(
        validate(CATALOG),
        vec![CatalogIssue::DuplicateCommand {
            command: "ping".to_string()
        }]
    );
}

/// Tests that a required option declared after an optional one is reported.
///
/// Expected: one RequiredAfterOptional issue naming the late required option
#[test]
fn flags_required_option_after_optional() {
    const CATALOG: &[CommandDefinition] = &[CommandDefinition::new(
        "ask",
        "Ask a question",
        &[
            OptionDefinition::optional("topic", "Topic"),
            OptionDefinition::required("question", "Question"),
        ],
    )];

    assert_eq!(
        validate(CATALOG),
        vec![CatalogIssue::RequiredAfterOptional {
            command: "ask".to_string(),
            option: "question".to_string(),
        }]
    );
}

#[test]
fn flags_duplicate_and_invalid_options() {
    const CATALOG: &[CommandDefinition] = &[CommandDefinition::new(
        "docs",
        "Search the docs",
        &[
            OptionDefinition::required("query", "What to search for"),
            OptionDefinition::required("query", "Again"),
            OptionDefinition::optional("Bad Name", ""),
        ],
    )];

    assert_eq!(
        validate(CATALOG),
        vec![
            CatalogIssue::DuplicateOption {
                command: "docs".to_string(),
                option: "query".to_string(),
            },
            CatalogIssue::InvalidOptionName {
                command: "docs".to_string(),
                option: "Bad Name".to_string(),
            },
            CatalogIssue::InvalidOptionDescription {
                command: "docs".to_string(),
                option: "Bad Name".to_string(),
            },
        ]
    );
}

#[test]
fn flags_too_many_options() {
    const OPTION: OptionDefinition = OptionDefinition::optional("opt", "An option");
    const OPTIONS: &[OptionDefinition] = &[OPTION; MAX_OPTIONS + 1];
    const CATALOG: &[CommandDefinition] =
        &[CommandDefinition::new("wide", "Too many options", OPTIONS)];

    let issues = validate(CATALOG);

    assert!(issues.contains(&CatalogIssue::TooManyOptions {
        command: "wide".to_string(),
        count: MAX_OPTIONS + 1,
        max: MAX_OPTIONS,
    }));
}
