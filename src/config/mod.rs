//! Runtime configuration resolution.
//!
//! The process runs in one of two modes, decided by a single check: if the `token`
//! environment variable is set to a non-empty value the process is in production
//! mode and that value is the whole configuration. Otherwise every entry of the
//! bundled properties resource is copied into the configuration. The two sources are
//! never merged.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::config::ConfigError;

#[cfg(test)]
mod test;

/// Configuration key holding the bot credential.
pub const TOKEN_KEY: &str = "token";

/// Environment variable whose presence switches the process into production mode.
pub const TOKEN_ENV_VAR: &str = "token";

/// Default location of the bundled properties resource.
pub const DEFAULT_PROPERTIES_PATH: &str = "resources/app.properties";

const REDACTED: &str = "[redacted]";
const SENSITIVE_KEY_MARKERS: [&str; 4] = ["token", "secret", "password", "key"];

/// Which source the configuration was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Credential came from the process environment.
    Production,
    /// Configuration came from the bundled properties resource.
    Development,
}

/// Resolved key/value configuration.
///
/// Built once at startup and read-only afterwards. Entries are ordered by key so the
/// diagnostic dump is stable between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    mode: RuntimeMode,
    entries: BTreeMap<String, String>,
}

impl Configuration {
    /// Builds a production configuration holding only the credential.
    pub fn production(token: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(TOKEN_KEY.to_string(), token.into());

        Self {
            mode: RuntimeMode::Production,
            entries,
        }
    }

    /// Builds a development configuration from already loaded entries.
    pub fn development(entries: BTreeMap<String, String>) -> Self {
        Self {
            mode: RuntimeMode::Development,
            entries,
        }
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn is_production(&self) -> bool {
        self.mode == RuntimeMode::Production
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Returns the bot credential, if one was resolved.
    ///
    /// An empty `token` entry counts as absent.
    pub fn credential(&self) -> Option<&str> {
        self.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Returns the bot credential or `ConfigError::MissingCredential`.
    pub fn require_credential(&self) -> Result<&str, ConfigError> {
        self.credential().ok_or(ConfigError::MissingCredential)
    }

    /// Returns every entry with credential-like values replaced by a placeholder.
    ///
    /// A key is treated as sensitive when it contains `token`, `secret`, `password`
    /// or `key`, ignoring case.
    pub fn redacted_entries(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| {
                if is_sensitive_key(key) {
                    (key.as_str(), REDACTED)
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect()
    }

    /// Dumps the configuration to the log at WARN level, one line per entry.
    ///
    /// Does nothing in production mode. Values of sensitive keys are redacted.
    pub fn log_entries(&self) {
        if self.is_production() {
            return;
        }

        for (key, value) in self.redacted_entries() {
            tracing::warn!("{} = {}", key, value);
        }
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_KEY_MARKERS
        .iter()
        .any(|marker| key.contains(marker))
}

/// Decides between the environment and the bundled properties resource.
pub struct ConfigResolver {
    properties_path: PathBuf,
}

impl ConfigResolver {
    /// Creates a resolver that falls back to the properties resource at `properties_path`.
    pub fn new(properties_path: impl Into<PathBuf>) -> Self {
        Self {
            properties_path: properties_path.into(),
        }
    }

    /// Production mode is on iff the environment credential is present and non-empty.
    pub fn detect_mode(env_token: Option<&str>) -> RuntimeMode {
        match env_token {
            Some(token) if !token.is_empty() => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }

    /// Resolves configuration from the process environment or the properties resource.
    ///
    /// # Returns
    /// - `Ok(Configuration)` - Resolved configuration
    /// - `Err(ConfigError::ReadProperties)` - Not in production mode and the properties
    ///   resource is missing or unreadable
    /// - `Err(ConfigError::ParseProperties)` - Not in production mode and the properties
    ///   resource is malformed
    pub fn resolve(&self) -> Result<Configuration, ConfigError> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves configuration using `env` to look up environment variables.
    ///
    /// # Arguments
    /// - `env` - Environment lookup, returns `None` for unset variables
    ///
    /// # Returns
    /// - `Ok(Configuration)` - Resolved configuration
    /// - `Err(ConfigError::ReadProperties)` - Not in production mode and the properties
    ///   resource is missing or unreadable
    /// - `Err(ConfigError::ParseProperties)` - Not in production mode and the properties
    ///   resource is malformed
    pub fn resolve_with<F>(&self, env: F) -> Result<Configuration, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_token = env(TOKEN_ENV_VAR);

        match (Self::detect_mode(env_token.as_deref()), env_token) {
            (RuntimeMode::Production, Some(token)) => Ok(Configuration::production(token)),
            _ => {
                tracing::info!("Loading app configuration...");
                let entries = self.load_properties()?;
                Ok(Configuration::development(entries))
            }
        }
    }

    /// Reads every entry of the properties resource.
    ///
    /// Uses the `java.util.Properties` grammar (ISO-8859-1, `=`/`:`/whitespace
    /// separators, `#`/`!` comments, backslash escapes). Values are copied as written:
    /// no variable substitution, and nothing is exported to the process environment.
    fn load_properties(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        let file =
            File::open(&self.properties_path).map_err(|source| ConfigError::ReadProperties {
                path: self.properties_path.clone(),
                source,
            })?;

        let entries = java_properties::read(BufReader::new(file)).map_err(|source| {
            ConfigError::ParseProperties {
                path: self.properties_path.clone(),
                source,
            }
        })?;

        Ok(entries.into_iter().collect())
    }
}
