use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned an empty summary")]
    Empty,
}
