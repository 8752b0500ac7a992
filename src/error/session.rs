use thiserror::Error;

/// Failures reported by the remote gateway or command registry.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The gateway rejected the bot credential.
    ///
    /// Only observable once the session loop is running, so it surfaces from the
    /// spawned bot task rather than from session construction.
    #[error("Discord rejected the bot token")]
    AuthenticationRejected,

    /// The registry refused the full-replace command batch.
    #[error("Failed to register {count} commands: {source}")]
    RegistrationRejected {
        /// Number of commands in the rejected batch
        count: usize,
        /// The underlying API error
        #[source]
        source: Box<serenity::Error>,
    },
}
