//! Handle ORDER BY translation.

use query_engine_metadata::metadata::mapper::AttributeMapper;
use query_engine_models::models;
use query_engine_sql::sql;

use crate::translation::error::Error;

/// Convert the orders of a QueryModel to a SQL ORDER BY clause.
pub fn translate_order_by(
    mapper: &AttributeMapper,
    orders: &[models::OrderSpec],
) -> Result<sql::ast::OrderBy, Error> {
    let table = sql::helpers::make_table_alias();

    let elements = orders
        .iter()
        .map(|order| {
            let name = mapper.to_external(&order.attribute_name)?;
            let direction = if order.descending {
                sql::ast::OrderByDirection::Desc
            } else {
                sql::ast::OrderByDirection::Asc
            };
            Ok(sql::ast::OrderByElement {
                target: sql::helpers::make_column(&table, name),
                direction,
            })
        })
        .collect::<Result<Vec<sql::ast::OrderByElement>, Error>>()?;

    Ok(sql::ast::OrderBy { elements })
}
