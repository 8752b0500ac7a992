use std::collections::HashMap;

use test_utils::{builder::TestBuilder, error::TestError};

use crate::config::{ConfigResolver, Configuration, RuntimeMode, TOKEN_KEY};
use crate::error::config::ConfigError;


/// Builds an environment lookup backed by the given pairs instead of the process env.
fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    move |key: &str| vars.get(key).cloned()
}
