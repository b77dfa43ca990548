//! Handle the projection translation.

use query_engine_metadata::metadata::mapper::AttributeMapper;
use query_engine_models::models;
use query_engine_sql::sql;

use crate::translation::error::Error;

/// Translate the column set to a select list.
///
/// Returns `None` when every column is requested. Otherwise the external names are
/// deduplicated in request order and the primary id attribute is appended unless it
/// was already requested, so every record stays addressable.
pub fn translate_column_set(
    mapper: &AttributeMapper,
    column_set: &models::ColumnSet,
) -> Result<Option<Vec<sql::ast::ColumnReference>>, Error> {
    if !column_set.is_restricted() {
        return Ok(None);
    }

    let table = sql::helpers::make_table_alias();
    let primary_id = &mapper.metadata().primary_id_attribute;

    let mut external_names: Vec<&str> = vec![];
    for logical_name in column_set.columns.iter().chain(std::iter::once(primary_id)) {
        let external_name = mapper.to_external(logical_name)?;
        if !external_names.contains(&external_name) {
            external_names.push(external_name);
        }
    }

    Ok(Some(
        external_names
            .into_iter()
            .map(|name| sql::helpers::make_column(&table, name))
            .collect(),
    ))
}
