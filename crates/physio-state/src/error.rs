use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("action log is not valid JSON: {0}")]
    ActionLog(#[from] serde_json::Error),
}
