//! Errors for query execution.

use thiserror::Error;

use query_engine_metadata::metadata::mapper;

/// Query execution error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("token request failed with status {status}: {body}")]
    Authentication {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("request failed with status {status}: {body}")]
    Transport {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unable to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("the document store key is not valid base64: {0}")]
    InvalidKey(String),
    #[error("unable to materialize record: {0}")]
    Materialization(#[from] mapper::Error),
}
