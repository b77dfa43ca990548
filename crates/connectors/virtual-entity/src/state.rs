//! Transient state used by the data services.
//!
//! This is initialized on startup.

use thiserror::Error;
use tracing::{info_span, Instrument};

use query_engine_execution::metrics;

/// State for our data services.
#[derive(Debug, Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
}

/// Register the metrics and wrap them inside a State.
pub async fn create_state(
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        Ok(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    Ok(State { metrics })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
