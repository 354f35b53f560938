use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid field path: {0}")]
    InvalidPath(String),

    #[error("unknown section '{section}' in {document} document")]
    UnknownSection { document: String, section: String },

    #[error("unknown field '{field}' in section '{section}'")]
    UnknownField { section: String, field: String },
}
