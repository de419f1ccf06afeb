//! Configuration errors
//!
//! Everything that can go wrong happens before the first session starts.
//! Once a `GameState` exists, every input is a valid transition.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("catalog has {available} distinct icons but a round needs {required}")]
    CatalogTooSmall { available: usize, required: usize },

    #[error("icon `{0}` appears more than once in the catalog")]
    DuplicateIcon(String),

    #[error("icon identifiers must not be empty")]
    EmptyIconName,

    #[error("invalid settings: {0}")]
    InvalidConfig(String),

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
