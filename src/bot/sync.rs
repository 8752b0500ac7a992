//! Converts the command catalog into a full-replace registration.
//!
//! A synchronization builds one [`RegistrationRequest`] from the whole catalog and
//! submits it in a single call. The submission runs in its own task so startup does
//! not wait on the registry; the task logs the outcome itself.

use serenity::all::{CreateCommand, CreateCommandOption};
use tokio::task::JoinHandle;

use crate::bot::catalog;
use crate::bot::session::CommandRegistry;
use crate::error::AppError;
use crate::model::command::{CommandDefinition, OptionDefinition};

/// A batch of registry-native command descriptors.
///
/// Built fresh for every synchronization and consumed by the submission.
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    commands: Vec<CreateCommand>,
}

impl RegistrationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: CreateCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[CreateCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<CreateCommand> {
        self.commands
    }
}

/// Builds the registry descriptor for a single option.
pub fn build_option(option: &OptionDefinition) -> CreateCommandOption {
    CreateCommandOption::new(
        option.kind.as_registry_type(),
        option.name,
        option.description,
    )
    .required(option.required)
}

/// Builds the registry descriptor for a command, keeping option order.
pub fn build_command(definition: &CommandDefinition) -> CreateCommand {
    tracing::info!(" - Registering {}", definition.name);

    let mut command = CreateCommand::new(definition.name).description(definition.description);

    for option in definition.options {
        tracing::info!(" - - Adding option {}", option.name);
        command = command.add_option(build_option(option));
    }

    command
}

/// Builds one registration request holding every command of `catalog` in order.
pub fn build_request(catalog: &[CommandDefinition]) -> RegistrationRequest {
    let mut request = RegistrationRequest::new();

    for definition in catalog {
        request.add_command(build_command(definition));
    }

    request
}

/// Submits the whole catalog to `registry` as one full-replace batch.
///
/// Catalog issues are logged as warnings before submission. The batch is built
/// synchronously; only the submission is spawned.
///
/// # Arguments
/// - `catalog` - Commands to register
/// - `registry` - Registry receiving the batch
///
/// # Returns
/// - Handle to the submission task. Its result has already been logged when the task
///   finishes, so callers may drop it.
pub fn synchronize<R>(
    catalog: &[CommandDefinition],
    registry: R,
) -> JoinHandle<Result<usize, AppError>>
where
    R: CommandRegistry + 'static,
{
    tracing::info!("Registering commands...");

    for issue in catalog::validate(catalog) {
        tracing::warn!("Command catalog issue: {}", issue);
    }

    let request = build_request(catalog);

    tokio::spawn(async move {
        let submitted = request.len();

        match registry.replace_all(request.into_commands()).await {
            Ok(registered) => {
                tracing::info!(
                    "Registered {} commands ({} submitted)",
                    registered,
                    submitted
                );
                Ok(registered)
            }
            Err(e) => {
                tracing::error!("Command registration failed: {}", e);
                Err(e)
            }
        }
    })
}

#[cfg(test)]
#[path = "test/sync.rs"]
mod tests;
