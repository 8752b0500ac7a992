//! Application context shared by the bot and the HTTP server.
//!
//! The context is created once in `main` after configuration has been resolved and
//! the Discord client built. It is passed explicitly to every component that needs
//! it and doubles as the Axum router state.

use std::sync::Arc;

use crate::bot::session::SessionHandle;
use crate::config::Configuration;
use crate::model::command::CommandDefinition;

/// Application context containing the resolved configuration and session handle.
///
/// All fields are cheap to clone:
/// - `Arc<Configuration>` shares the read-only configuration
/// - `&'static [CommandDefinition]` points at the compiled-in catalog
/// - `SessionHandle` wraps an `Arc<Http>`
#[derive(Clone)]
pub struct AppContext {
    /// Resolved configuration, read-only for the life of the process.
    pub config: Arc<Configuration>,

    /// Commands registered with Discord.
    pub catalog: &'static [CommandDefinition],

    /// Handle to the authenticated session's REST client.
    pub session: SessionHandle,
}

impl AppContext {
    /// Creates the application context.
    ///
    /// # Arguments
    /// - `config` - Resolved configuration
    /// - `catalog` - Command catalog
    /// - `session` - Session handle taken from the built client
    ///
    /// # Returns
    /// - `AppContext` - Context ready to be shared
    pub fn new(
        config: Configuration,
        catalog: &'static [CommandDefinition],
        session: SessionHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            session,
        }
    }
}
