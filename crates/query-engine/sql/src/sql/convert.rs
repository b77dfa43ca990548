//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::*;

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        if let Some(top) = self.top {
            sql.append_syntax(&format!("TOP {top} "));
        }

        self.select_list.to_sql(sql);

        sql.append_syntax(" ");

        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        self.order_by.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                for (index, column) in select_list.iter().enumerate() {
                    column.to_sql(sql);
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        self.collection.to_sql(sql);
        sql.append_syntax(" ");
        sql.append_identifier(&self.alias.name);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, element) in self.elements.iter().enumerate() {
                element.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        match self.direction {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::And(expressions) => {
                joined_to_sql(sql, expressions, " AND ", &helpers::true_expr());
            }
            Expression::Or(expressions) => {
                joined_to_sql(sql, expressions, " OR ", &helpers::false_expr());
            }
            Expression::BinaryOperator {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::ColumnReference(column) => column.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
        }
    }
}

/// Parenthesize the expressions joined by `separator`.
/// No expressions at all render as the identity of the connective.
fn joined_to_sql(sql: &mut SQL, expressions: &[Expression], separator: &str, identity: &Expression) {
    if expressions.is_empty() {
        identity.to_sql(sql);
        return;
    }
    sql.append_syntax("(");
    for (index, expression) in expressions.iter().enumerate() {
        expression.to_sql(sql);
        if index < (expressions.len() - 1) {
            sql.append_syntax(separator);
        }
    }
    sql.append_syntax(")");
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax(match self {
            BinaryOperator::Equals => " = ",
            BinaryOperator::NotEquals => " != ",
            BinaryOperator::GreaterThan => " > ",
            BinaryOperator::LessThan => " < ",
            BinaryOperator::GreaterThanOrEqualTo => " >= ",
            BinaryOperator::LessThanOrEqualTo => " <= ",
        });
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Null => sql.append_syntax("null"),
            Value::Bool(true) => sql.append_syntax("true"),
            Value::Bool(false) => sql.append_syntax("false"),
            Value::Int8(i) => sql.append_syntax(&i.to_string()),
            Value::Float8(n) => sql.append_syntax(&n.to_string()),
            Value::Number(n) => sql.append_syntax(n),
            Value::String(s) => sql.append_string_literal(s),
        }
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_property(&self.table.name, &self.name.0);
    }
}

impl CollectionName {
    pub fn to_sql(&self, sql: &mut SQL) {
        // The collection is addressed by the request URI; the name in FROM only binds it.
        if is_plain_identifier(&self.0) {
            sql.append_identifier(&self.0);
        } else {
            sql.append_identifier(helpers::ROOT_COLLECTION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn column(name: &str) -> ColumnReference {
        helpers::make_column(&helpers::make_table_alias(), name)
    }

    fn render(select: &Select) -> String {
        let mut sql = SQL::new();
        select.to_sql(&mut sql);
        sql.sql
    }

    #[test]
    fn it_converts_star_select() {
        let select = helpers::star_select(helpers::make_from("accounts"));
        assert_eq!(render(&select), "SELECT * FROM accounts a");
    }

    #[test]
    fn it_converts_a_full_select() {
        let mut select = helpers::simple_select(
            vec![column("name"), column("id")],
            helpers::make_from("accounts"),
        );
        select.top = Some(5);
        select.where_ = Where(Expression::Or(vec![
            Expression::BinaryOperator {
                left: Box::new(Expression::ColumnReference(column("name"))),
                operator: BinaryOperator::Equals,
                right: Box::new(Expression::Value(Value::String("Contoso".to_string()))),
            },
            Expression::BinaryOperator {
                left: Box::new(Expression::ColumnReference(column("size"))),
                operator: BinaryOperator::GreaterThanOrEqualTo,
                right: Box::new(Expression::Value(Value::Int8(10))),
            },
        ]));
        select.order_by = OrderBy {
            elements: vec![
                OrderByElement {
                    target: column("name"),
                    direction: OrderByDirection::Asc,
                },
                OrderByElement {
                    target: column("size"),
                    direction: OrderByDirection::Desc,
                },
            ],
        };

        assert_eq!(
            render(&select),
            "SELECT TOP 5 a.name, a.id FROM accounts a WHERE (a.name = 'Contoso' OR a.size >= 10) ORDER BY a.name ASC, a.size DESC"
        );
    }

    #[test]
    fn empty_connectives_render_their_identity() {
        let mut sql = SQL::new();
        Expression::And(vec![Expression::Or(vec![])]).to_sql(&mut sql);
        assert_eq!(sql.sql, "(false)");
    }

    #[test]
    fn unusual_collection_names_bind_to_root() {
        let select = helpers::star_select(helpers::make_from("my-collection"));
        assert_eq!(render(&select), "SELECT * FROM root a");
    }
}
