//! The data service over the remote OData service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info_span, Instrument};

use query_engine_execution::odata;
use query_engine_metadata::metadata::{Metadata, MetadataSource};
use query_engine_models::models::{
    EntityReference, GenericEntity, GenericEntityCollection, QueryModel,
};
use query_engine_translation::translation;

use crate::connector::DataService;
use crate::error::Error;
use crate::state::State;

pub struct RemoteService {
    pub connection: odata::Connection,
    pub metadata: Arc<Metadata>,
    /// Requests whose relative URL is longer than this are refused.
    pub max_url_length: usize,
    pub state: Arc<State>,
}

#[async_trait]
impl DataService for RemoteService {
    async fn get_entities(&self, query: QueryModel) -> Result<GenericEntityCollection, Error> {
        let metadata = self
            .metadata
            .entity_metadata(&query.entity_name)
            .ok_or_else(|| Error::EntityNotFound(query.entity_name.clone()))?;

        let query_string = info_span!("Translate query")
            .in_scope(|| translation::odata::translate_to_query_string(&metadata, &query))?;
        tracing::debug!(query_string = %query_string);

        let length =
            odata::collection_path(&metadata.external_collection_name, &query_string).len();
        if length > self.max_url_length {
            return Err(Error::QueryTooLong {
                length,
                max_length: self.max_url_length,
            });
        }

        let page_size = query.paging.as_ref().map(|paging| paging.page_size);
        let collection = odata::execute(
            &self.connection,
            &self.state.metrics,
            &metadata,
            &query_string,
            page_size,
        )
        .instrument(info_span!("Execute query"))
        .await?;

        self.state.metrics.query_total.inc();
        Ok(collection)
    }

    async fn get_entity(&self, reference: &EntityReference) -> Result<Option<GenericEntity>, Error> {
        let metadata = self
            .metadata
            .entity_metadata(&reference.logical_name)
            .ok_or_else(|| Error::EntityNotFound(reference.logical_name.clone()))?;

        let entity = odata::retrieve(&self.connection, &self.state.metrics, &metadata, reference.id)
            .instrument(info_span!("Execute query"))
            .await?;

        self.state.metrics.query_total.inc();
        Ok(entity)
    }
}
