//! The data service over the document store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info_span, Instrument};

use query_engine_execution::document;
use query_engine_metadata::metadata::{Metadata, MetadataSource};
use query_engine_models::models::{
    ConditionOperator, EntityReference, FilterGroup, FilterNode, GenericEntity,
    GenericEntityCollection, QueryModel, Value,
};
use query_engine_translation::translation;

use crate::connector::DataService;
use crate::error::Error;
use crate::state::State;

pub struct DocumentStore {
    pub connection: document::Connection,
    pub metadata: Arc<Metadata>,
    pub state: Arc<State>,
}

#[async_trait]
impl DataService for DocumentStore {
    async fn get_entities(&self, query: QueryModel) -> Result<GenericEntityCollection, Error> {
        let metadata = self
            .metadata
            .entity_metadata(&query.entity_name)
            .ok_or_else(|| Error::EntityNotFound(query.entity_name.clone()))?;

        let sql = info_span!("Translate query")
            .in_scope(|| translation::query::translate_to_sql(&metadata, &query))?;
        tracing::debug!(generated_sql = %sql);

        let collection = document::execute(
            &self.connection,
            &self.state.metrics,
            &metadata,
            &sql,
            query.paging.as_ref(),
        )
        .instrument(info_span!("Execute query"))
        .await?;

        self.state.metrics.query_total.inc();
        Ok(collection)
    }

    /// Query the collection for the record whose primary id matches.
    async fn get_entity(&self, reference: &EntityReference) -> Result<Option<GenericEntity>, Error> {
        let primary_id_attribute = self
            .metadata
            .entity_metadata(&reference.logical_name)
            .ok_or_else(|| Error::EntityNotFound(reference.logical_name.clone()))?
            .primary_id_attribute;

        let mut query = QueryModel::new(&reference.logical_name);
        query.criteria = FilterGroup::and(vec![FilterNode::condition(
            primary_id_attribute,
            ConditionOperator::Equal,
            vec![Value::Uuid(reference.id)],
        )]);

        let collection = self.get_entities(query).await?;
        Ok(collection.entities.into_iter().next())
    }
}
