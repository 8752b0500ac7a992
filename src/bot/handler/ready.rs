//! Ready event handler for bot initialization.
//!
//! The ready event fires once the gateway handshake completes and the credential has
//! been accepted. It is the first point at which the session is known to be live.

use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

/// Logs the connected user once the gateway handshake completes.
pub struct ReadyHandler;

#[async_trait]
impl EventHandler for ReadyHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        handle_ready(ready).await;
    }
}

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}
