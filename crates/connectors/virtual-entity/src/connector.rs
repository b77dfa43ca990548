//! This defines the `DataService` contract and the `VirtualEntity` service that routes
//! requests to the configured store.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info_span, Instrument};

use query_engine_models::models::{
    EntityReference, GenericEntity, GenericEntityCollection, QueryModel,
};
use virtual_entity_configuration as configuration;
use virtual_entity_configuration::environment::Environment;

use crate::document_store::DocumentStore;
use crate::error::Error;
use crate::remote_service::RemoteService;
use crate::state;

/// Read access to the records of virtual entities.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Run a query and return one page of materialized records.
    async fn get_entities(&self, query: QueryModel) -> Result<GenericEntityCollection, Error>;

    /// Fetch a single record. A record that does not exist yields `None`.
    async fn get_entity(&self, reference: &EntityReference) -> Result<Option<GenericEntity>, Error>;
}

/// The data service for a runtime configuration.
pub struct VirtualEntity {
    service: Box<dyn DataService>,
    state: Arc<state::State>,
}

impl VirtualEntity {
    pub fn new(configuration: configuration::Configuration, state: Arc<state::State>) -> Self {
        let metadata = Arc::new(configuration.metadata);
        let service: Box<dyn DataService> = match configuration.data_source {
            configuration::DataSource::DocumentStore(connection) => Box::new(DocumentStore {
                connection,
                metadata,
                state: state.clone(),
            }),
            configuration::DataSource::RemoteService(connection) => Box::new(RemoteService {
                connection,
                metadata,
                max_url_length: configuration.max_url_length,
                state: state.clone(),
            }),
        };
        VirtualEntity { service, state }
    }

    fn log_error(&self, err: &Error) {
        self.state.metrics.query_error_total.inc();
        tracing::error!(
            meta.signal_type = "log",
            event.domain = "virtual_entity",
            event.name = "Query error",
            name = "Query error",
            body = %err,
            error = true,
        );
    }
}

#[async_trait]
impl DataService for VirtualEntity {
    async fn get_entities(&self, query: QueryModel) -> Result<GenericEntityCollection, Error> {
        let span = info_span!("Get entities", entity = %query.entity_name);
        self.service
            .get_entities(query)
            .instrument(span)
            .await
            .map_err(|err| {
                self.log_error(&err);
                err
            })
    }

    async fn get_entity(&self, reference: &EntityReference) -> Result<Option<GenericEntity>, Error> {
        let span = info_span!(
            "Get entity",
            entity = %reference.logical_name,
            id = %reference.id
        );
        self.service
            .get_entity(reference)
            .instrument(span)
            .await
            .map_err(|err| {
                self.log_error(&err);
                err
            })
    }
}

/// Builds a `VirtualEntity` service from a configuration directory.
pub struct VirtualEntitySetup<Env: Environment> {
    environment: Env,
}

impl<Env: Environment> VirtualEntitySetup<Env> {
    pub fn new(environment: Env) -> Self {
        Self { environment }
    }

    /// Read the configuration directory and resolve its secrets.
    pub async fn parse_configuration(
        &self,
        configuration_dir: impl AsRef<Path>,
    ) -> Result<configuration::Configuration, SetupError> {
        // Validation errors are not logged; they are reported to whoever supplied the directory.
        let parsed_configuration = configuration::parse_configuration(configuration_dir)
            .instrument(info_span!("parse configuration"))
            .await?;

        let runtime_configuration =
            configuration::make_runtime_configuration(parsed_configuration, &self.environment)?;

        Ok(runtime_configuration)
    }

    /// Register the service's metrics.
    pub async fn try_init_state(
        &self,
        metrics: &mut prometheus::Registry,
    ) -> Result<state::State, SetupError> {
        state::create_state(metrics)
            .instrument(info_span!("Initialise state"))
            .await
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "virtual_entity",
                    event.name = "Initialization error",
                    name = "Initialization error",
                    body = %err,
                    error = true,
                );
                SetupError::Initialization(err)
            })
    }

    /// Parse the configuration, initialise the state and build the service.
    pub async fn connect(
        &self,
        configuration_dir: impl AsRef<Path>,
        metrics: &mut prometheus::Registry,
    ) -> Result<VirtualEntity, SetupError> {
        let configuration = self.parse_configuration(configuration_dir).await?;
        let state = self.try_init_state(metrics).await?;
        Ok(VirtualEntity::new(configuration, Arc::new(state)))
    }
}

/// Errors raised while building a service.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    ParseConfiguration(#[from] configuration::error::ParseConfigurationError),
    #[error(transparent)]
    MakeRuntimeConfiguration(#[from] configuration::error::MakeRuntimeConfigurationError),
    #[error(transparent)]
    Initialization(state::InitializationError),
}
