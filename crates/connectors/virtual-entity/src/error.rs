//! Errors surfaced by the data services.

use thiserror::Error;

use query_engine_execution::error as execution;
use query_engine_translation::translation::error as translation;

/// A type for data service errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No metadata is configured for entity '{0}'.")]
    EntityNotFound(String),
    #[error("Unable to translate query: {0}")]
    Translation(#[from] translation::Error),
    #[error(transparent)]
    Execution(#[from] execution::Error),
    #[error("The request URL is {length} characters long; the limit is {max_length}.")]
    QueryTooLong { length: usize, max_length: usize },
}
