use serenity::all::{ActivityData, Client, GatewayError, GatewayIntents};

use crate::bot::handler::{command::SlashCommandHandler, ready::ReadyHandler};
use crate::bot::session::SessionHandle;
use crate::error::{session::SessionError, AppError};
use crate::model::command::CommandDefinition;

/// Subject shown in the bot's "Watching ..." presence.
pub const ACTIVITY_SUBJECT: &str = "Fireship.io";

/// Builds the Discord client with its presence and event handlers attached.
///
/// The client is not connected yet; pass it to [`start_bot`] from a spawned task.
/// Credential problems only surface once the gateway loop runs.
///
/// # Arguments
/// - `token` - Bot credential
/// - `catalog` - Commands the slash command handler answers
///
/// # Returns
/// - `Ok((Client, SessionHandle))` - Client ready to start and a handle to its HTTP client
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    token: &str,
    catalog: &'static [CommandDefinition],
) -> Result<(Client, SessionHandle), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(token, intents)
        .activity(ActivityData::watching(ACTIVITY_SUBJECT))
        .event_handler(ReadyHandler)
        .event_handler(SlashCommandHandler::new(catalog))
        .await?;

    let session = SessionHandle::new(client.http.clone());

    Ok((client, session))
}

/// Runs the gateway loop until the connection ends.
///
/// Should be called from within a tokio::spawn task since it blocks until the bot
/// shuts down.
///
/// # Returns
/// - `Ok(())` - The client shut down cleanly
/// - `Err(AppError::SessionErr(AuthenticationRejected))` - Discord rejected the token
/// - `Err(AppError)` - Any other gateway failure
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await.map_err(classify_session_error)?;

    Ok(())
}

/// Maps the gateway's invalid-authentication error onto `SessionError`.
fn classify_session_error(err: serenity::Error) -> AppError {
    match err {
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => {
            SessionError::AuthenticationRejected.into()
        }
        other => other.into(),
    }
}
