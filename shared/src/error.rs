use thiserror::Error;

/// Failures that can escape profile request processing.
///
/// Both variants are server-side faults: the dispatch layer converts them
/// into a generic 500 response and logs the detail with a correlation id.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build response: {0}")]
    Response(#[from] lambda_http::http::Error),
}
