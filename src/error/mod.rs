//! Error types for the bot process.
//!
//! `AppError` is the top-level error returned across module boundaries. It wraps the
//! domain-specific errors for configuration, port parsing and the gateway session,
//! plus the third-party errors that bubble up during startup.

pub mod catalog;
pub mod config;
pub mod port;
pub mod session;

use thiserror::Error;

use crate::error::{config::ConfigError, port::PortError, session::SessionError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so startup code can propagate
/// with `?`. Which variants are fatal is decided by the caller: configuration errors
/// abort startup, port errors only disable the HTTP server.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be resolved or holds no credential.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The HTTP port argument was missing or unusable.
    #[error(transparent)]
    PortErr(#[from] PortError),

    /// The gateway rejected the credential or a registry submission.
    #[error(transparent)]
    SessionErr(#[from] SessionError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, e.g. failing to bind the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A spawned task panicked or was cancelled.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
