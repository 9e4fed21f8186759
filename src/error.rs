use thiserror::Error;

use crate::ParseResult;

/// Errors from decoding a meta block. Absence of a meta block is not an
/// error; these only arise once a block has been captured.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("invalid JSON in meta block: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML in meta block: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported language for meta block: {0}")]
    UnsupportedLanguage(String),
}

/// A parse failure that still carries the fully rendered content.
///
/// Metadata errors never abort content production: callers that want the
/// HTML anyway can take it from `result` (its meta map is empty).
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ParseError {
    pub result: ParseResult,
    #[source]
    pub error: MetaError,
}

impl ParseError {
    /// Consume the error, keeping the partial result.
    pub fn into_partial_result(self) -> ParseResult {
        self.result
    }
}
