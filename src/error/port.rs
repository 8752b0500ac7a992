use std::num::ParseIntError;
use thiserror::Error;

/// Problems with the HTTP port startup argument.
///
/// None of these are fatal: the HTTP server is skipped and the bot keeps running.
#[derive(Error, Debug)]
pub enum PortError {
    /// No port argument was supplied.
    #[error("Please provide a valid port number: no port argument given")]
    Missing,

    /// The port argument contains anything other than ASCII digits.
    ///
    /// Rejects signs and surrounding whitespace, which `str::parse` would otherwise
    /// accept or report less clearly.
    #[error("Please provide a valid port number: '{value}' is not a base-10 integer")]
    NotDecimal {
        /// The rejected argument
        value: String,
    },

    /// The port argument is a base-10 integer that does not fit a port.
    #[error("Please provide a valid port number: '{value}': {source}")]
    Invalid {
        /// The argument that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Port 0 was supplied.
    #[error("Please provide a valid port number: port must be positive")]
    Zero,
}
