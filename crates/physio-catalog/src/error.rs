use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} key: {key}")]
    DuplicateKey { kind: String, key: String },

    #[error("{0} entry is missing its key")]
    MissingKey(String),
}
