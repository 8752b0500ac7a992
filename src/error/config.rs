use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The bundled properties resource is missing or unreadable.
    ///
    /// Only raised outside production mode. Startup cannot continue because the
    /// resource is the only remaining source of a credential.
    #[error("Failed to read properties from {}: {source}", path.display())]
    ReadProperties {
        /// Path of the resource that failed to open
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The bundled properties resource could not be parsed.
    ///
    /// The message names only the resource. The parser error is kept as the source
    /// for debugging but never formatted, since it may quote the offending value.
    #[error("Malformed properties in {}", path.display())]
    ParseProperties {
        /// Path of the malformed resource
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: java_properties::PropertiesError,
    },

    /// No non-empty `token` entry was resolved.
    #[error("Bot token not found")]
    MissingCredential,
}
