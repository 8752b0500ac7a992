//! Handle to the authenticated Discord session.

use std::sync::Arc;

use serenity::all::{Command, CreateCommand, Http};
use serenity::async_trait;

use crate::error::{session::SessionError, AppError};

/// Destination for full-replace command registrations.
///
/// Implemented by [`SessionHandle`] against Discord's global command registry.
#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// Replaces every registered command with `commands`.
    ///
    /// Commands missing from `commands` are removed by the registry.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands the registry now holds
    /// - `Err(AppError)` - The registry rejected the batch
    async fn replace_all(&self, commands: Vec<CreateCommand>) -> Result<usize, AppError>;
}

/// Cheap-to-clone handle to the session's HTTP client.
///
/// The gateway connection itself lives in the `Client` owned by the bot task; this
/// handle only carries what other components need to talk to the REST API.
#[derive(Clone)]
pub struct SessionHandle {
    http: Arc<Http>,
}

impl SessionHandle {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandRegistry for SessionHandle {
    async fn replace_all(&self, commands: Vec<CreateCommand>) -> Result<usize, AppError> {
        let count = commands.len();
        let rejected = |e: serenity::Error| SessionError::RegistrationRejected {
            count,
            source: Box::new(e),
        };

        // Global command routes are keyed by application id, which is only known
        // once the application info has been fetched.
        if self.http.application_id().is_none() {
            let info = self
                .http
                .get_current_application_info()
                .await
                .map_err(rejected)?;
            self.http.set_application_id(info.id);
        }

        let registered = Command::set_global_commands(&self.http, commands)
            .await
            .map_err(rejected)?;

        Ok(registered.len())
    }
}
