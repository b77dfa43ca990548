//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

/// Alias the queried collection is bound to.
pub const TABLE_ALIAS: &str = "a";

/// Name used in FROM when the collection name is not a plain identifier.
pub const ROOT_COLLECTION: &str = "root";

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

/// A `false` expression.
pub fn false_expr() -> Expression {
    Expression::Value(Value::Bool(false))
}

// Aliasing //

/// The alias every compiled query binds its collection to.
pub fn make_table_alias() -> TableAlias {
    TableAlias {
        name: TABLE_ALIAS.to_string(),
    }
}

/// Generate a column reference on a specific table alias.
pub fn make_column(table: &TableAlias, name: &str) -> ColumnReference {
    ColumnReference {
        table: table.clone(),
        name: ColumnName(name.to_string()),
    }
}

/// A FROM clause binding the collection to the standard alias.
pub fn make_from(collection: &str) -> From {
    From {
        collection: CollectionName(collection.to_string()),
        alias: make_table_alias(),
    }
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: Vec<ColumnReference>, from: From) -> Select {
    Select {
        top: None,
        select_list: SelectList::SelectList(select_list),
        from,
        where_: Where(empty_where()),
        order_by: empty_order_by(),
    }
}

/// Build a simple select *
pub fn star_select(from: From) -> Select {
    Select {
        top: None,
        select_list: SelectList::SelectStar,
        from,
        where_: Where(empty_where()),
        order_by: empty_order_by(),
    }
}

/// Render a select into its final query text.
pub fn select_to_sql(select: &Select) -> String {
    let mut sql = super::string::SQL::new();
    select.to_sql(&mut sql);
    sql.sql
}
