//! Translate a QueryModel into the document store's SQL-like query text.

pub mod fields;
pub mod filtering;
pub mod sorting;
pub mod values;

use query_engine_metadata::metadata::{mapper::AttributeMapper, EntityMetadata};
use query_engine_models::models;
use query_engine_sql::sql;

use crate::translation::error::Error;

/// Translate the query into a SELECT over the entity's external collection.
pub fn translate(
    metadata: &EntityMetadata,
    query: &models::QueryModel,
) -> Result<sql::ast::Select, Error> {
    let mapper = AttributeMapper::new(metadata);
    let from = sql::helpers::make_from(&metadata.external_collection_name);

    let mut select = match fields::translate_column_set(&mapper, &query.column_set)? {
        Some(columns) => sql::helpers::simple_select(columns, from),
        None => sql::helpers::star_select(from),
    };

    select.top = query.top_count;
    select.order_by = sorting::translate_order_by(&mapper, &query.orders)?;
    select.where_ = sql::ast::Where(filtering::translate_criteria(&mapper, &query.criteria)?);

    Ok(select)
}

/// Translate the query straight to its final text.
pub fn translate_to_sql(
    metadata: &EntityMetadata,
    query: &models::QueryModel,
) -> Result<String, Error> {
    let select = translate(metadata, query)?;
    Ok(sql::helpers::select_to_sql(&select))
}
