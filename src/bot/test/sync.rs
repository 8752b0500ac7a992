use std::sync::{Arc, Mutex};

use serde_json::Value;
use serenity::async_trait;

use super::*;
use crate::bot::catalog::CATALOG;
use crate::model::command::OptionDefinition;

/// Registry fake recording every submitted batch in its serialized form.
#[derive(Clone, Default)]
struct RecordingRegistry {
    batches: Arc<Mutex<Vec<Vec<Value>>>>,
    reject: bool,
}

impl RecordingRegistry {
    fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    fn batches(&self) -> Vec<Vec<Value>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRegistry for RecordingRegistry {
    async fn replace_all(&self, commands: Vec<CreateCommand>) -> Result<usize, AppError> {
        let batch = commands
            .iter()
            .map(|command| serde_json::to_value(command).unwrap())
            .collect();
        self.batches.lock().unwrap().push(batch);

        if self.reject {
            return Err(std::io::Error::other("registry unavailable").into());
        }

        Ok(commands.len())
    }
}

fn to_json(request: &RegistrationRequest) -> Vec<Value> {
    request
        .commands()
        .iter()
        .map(|command| serde_json::to_value(command).unwrap())
        .collect()
}

fn options_of(command: &Value) -> Vec<Value> {
    command
        .get("options")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

const PING_ONLY: &[CommandDefinition] = &[CommandDefinition::new("ping", "replies pong", &[])];

const ORDERED_OPTIONS: &[CommandDefinition] = &[CommandDefinition::new(
    "search",
    "Search something",
    &[
        OptionDefinition::required("query", "What to search for"),
        OptionDefinition::required("scope", "Where to search"),
        OptionDefinition::optional("limit", "How many results"),
    ],
)];

/// Tests that the request holds one descriptor per catalog entry, in catalog order.
///
/// Expected: descriptor names match the catalog names one-to-one
#[test]
fn builds_one_descriptor_per_command() {
    let request = build_request(CATALOG);
    let descriptors = to_json(&request);

    let names: Vec<&str> = descriptors
        .iter()
        .map(|command| command["name"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = CATALOG.iter().map(|command| command.name).collect();

    assert_eq!(request.len(), CATALOG.len());
    assert_eq!(names, expected);
}

#[test]
fn descriptors_carry_descriptions() {
    let descriptors = to_json(&build_request(PING_ONLY));

    assert_eq!(descriptors[0]["description"], "replies pong");
}

/// Tests that options keep their declared order, kind and required flag.
///
/// Expected: three string options (registry type 3) in declaration order
#[test]
fn preserves_option_order_and_flags() {
    let descriptors = to_json(&build_request(ORDERED_OPTIONS));
    let options = options_of(&descriptors[0]);

    let names: Vec<&str> = options
        .iter()
        .map(|option| option["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["query", "scope", "limit"]);

    let required: Vec<bool> = options
        .iter()
        .map(|option| option["required"].as_bool().unwrap_or(false))
        .collect();
    assert_eq!(required, vec![true, true, false]);

    assert!(options.iter().all(|option| option["type"] == 3));
    assert_eq!(options[0]["description"], "What to search for");
}

/// Tests that a command without options is valid and yields an empty option list.
///
/// Expected: descriptor with no options, not an error
#[test]
fn command_without_options_has_empty_option_list() {
    let descriptors = to_json(&build_request(PING_ONLY));

    assert_eq!(descriptors.len(), 1);
    assert!(options_of(&descriptors[0]).is_empty());
}

#[test]
fn empty_catalog_builds_empty_request() {
    let request = build_request(&[]);

    assert!(request.is_empty());
}

/// Tests the single-command scenario end to end.
///
/// Expected: exactly one submission holding one descriptor named "ping"
#[tokio::test]
async fn submits_catalog_in_one_batch() {
    let registry = RecordingRegistry::default();

    let registered = synchronize(PING_ONLY, registry.clone()).await.unwrap();

    assert_eq!(registered.unwrap(), 1);

    let batches = registry.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 1);
    assert_eq!(batches[0][0]["name"], "ping");
    assert!(options_of(&batches[0][0]).is_empty());
}

/// Tests that the empty catalog still submits one (empty) full-replace batch.
///
/// Expected: one submission with zero descriptors
#[tokio::test]
async fn empty_catalog_submits_empty_batch() {
    let registry = RecordingRegistry::default();

    let registered = synchronize(&[], registry.clone()).await.unwrap();

    assert_eq!(registered.unwrap(), 0);
    assert_eq!(registry.batches(), vec![Vec::<Value>::new()]);
}

/// Tests that synchronizing an unchanged catalog twice sends identical batches.
///
/// Expected: two submissions, structurally equal
#[tokio::test]
async fn repeated_synchronization_sends_identical_batches() {
    let registry = RecordingRegistry::default();

    synchronize(CATALOG, registry.clone()).await.unwrap().unwrap();
    synchronize(CATALOG, registry.clone()).await.unwrap().unwrap();

    let batches = registry.batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], batches[1]);
    assert_eq!(batches[0].len(), CATALOG.len());
}

/// Tests that a rejected submission is reported through the task result.
///
/// Expected: the task completes with Err after the single attempt, no retry
#[tokio::test]
async fn rejected_submission_is_observed() {
    let registry = RecordingRegistry::rejecting();

    let result = synchronize(PING_ONLY, registry.clone()).await.unwrap();

    assert!(result.is_err());
    assert_eq!(registry.batches().len(), 1);
}
