use crate::status::LifeCycleStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LegisError {
    #[error("impossible transition at action {index} from {prior}: {reason} (text: {text:?})")]
    ImpossibleTransition {
        index: usize,
        text: String,
        prior: LifeCycleStatus,
        reason: String,
    },

    #[error("invalid item type: {0}")]
    InvalidItemType(String),

    #[error("invalid status code: {0}")]
    InvalidStatus(String),

    #[error("invalid chamber: {0}")]
    InvalidChamber(String),

    #[error("committee registry key '{key}' maps to both {existing} and {conflicting}")]
    RegistryConflict {
        key: String,
        existing: String,
        conflicting: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LegisError>;
