use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GET {target} failed to complete")]
    Request {
        target: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("expected a success status for GET {target}, got {status}")]
    Status { target: String, status: StatusCode },
    #[error("expected {expected} for GET {target}, got {actual}")]
    UnexpectedStatus {
        target: String,
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("failed to deserialize response of GET {target}: {source}; body was {body:?}")]
    Deserialize {
        target: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("expected substring {expected:?} not found in response {body:?}")]
    SubstringNotFound { expected: String, body: String },
}
