use serde::{Deserialize, Serialize};

/// Body returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub production: bool,
    pub commands: usize,
}
