//! Translate a QueryModel into OData v4 query options for the remote service.

pub mod filtering;
pub mod operators;
pub mod values;

use query_engine_metadata::metadata::{mapper::AttributeMapper, EntityMetadata};
use query_engine_models::models;
use query_engine_sql::odata::ast;

use crate::translation::error::Error;

/// Translate the query into the options of a collection request.
pub fn translate(
    metadata: &EntityMetadata,
    query: &models::QueryModel,
) -> Result<ast::QueryOptions, Error> {
    let mapper = AttributeMapper::new(metadata);

    Ok(ast::QueryOptions {
        select: translate_select(&mapper, &query.column_set)?,
        top: query.top_count,
        skip_token: translate_paging(query.paging.as_ref()),
        order_by: translate_order_by(&mapper, &query.orders)?,
        filter: filtering::translate_criteria(&mapper, &query.criteria)?,
    })
}

/// Translate the query straight to its URL-encoded query string.
pub fn translate_to_query_string(
    metadata: &EntityMetadata,
    query: &models::QueryModel,
) -> Result<String, Error> {
    translate(metadata, query).map(|options| options.to_query_string())
}

/// The service always returns the record identity, so the primary id is not forced in.
fn translate_select(
    mapper: &AttributeMapper,
    column_set: &models::ColumnSet,
) -> Result<Vec<String>, Error> {
    let mut select: Vec<String> = vec![];
    if column_set.is_restricted() {
        for logical_name in &column_set.columns {
            let external_name = mapper.to_external(logical_name)?;
            if !select.iter().any(|name| name == external_name) {
                select.push(external_name.to_string());
            }
        }
    }
    Ok(select)
}

fn translate_paging(paging: Option<&models::PagingInfo>) -> Option<ast::SkipToken> {
    paging.and_then(|paging| match &paging.cookie {
        Some(cookie) if !cookie.is_empty() => Some(ast::SkipToken {
            page_number: paging.page_number,
            paging_cookie: cookie.clone(),
        }),
        _ => None,
    })
}

fn translate_order_by(
    mapper: &AttributeMapper,
    orders: &[models::OrderSpec],
) -> Result<Vec<ast::OrderByElement>, Error> {
    orders
        .iter()
        .map(|order| {
            Ok(ast::OrderByElement {
                property: mapper.to_external(&order.attribute_name)?.to_string(),
                direction: if order.descending {
                    ast::OrderByDirection::Desc
                } else {
                    ast::OrderByDirection::Asc
                },
            })
        })
        .collect()
}
