//! Convert OData query options to their textual and URL-encoded forms.

use indexmap::IndexMap;

use super::ast::*;

impl QueryOptions {
    /// The query options in the order they are sent, with unencoded values.
    /// `$count=true` is always present.
    pub fn options(&self) -> IndexMap<&'static str, String> {
        let mut options = IndexMap::new();
        options.insert("$count", "true".to_string());

        if !self.select.is_empty() {
            options.insert("$select", self.select.join(","));
        }

        if let Some(top) = self.top {
            options.insert("$top", top.to_string());
        }

        if let Some(skip_token) = &self.skip_token {
            options.insert("$skiptoken", skip_token.to_odata());
        }

        if !self.order_by.is_empty() {
            let elements = self
                .order_by
                .iter()
                .map(OrderByElement::to_odata)
                .collect::<Vec<_>>();
            options.insert("$orderby", elements.join(","));
        }

        if let Some(filter) = &self.filter {
            let mut text = String::new();
            filter.to_odata(&mut text);
            options.insert("$filter", text);
        }

        options
    }

    /// The `&`-joined query string, with every value form-URL-encoded.
    pub fn to_query_string(&self) -> String {
        self.options()
            .iter()
            .map(|(name, value)| {
                format!(
                    "{name}={}",
                    url::form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>()
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl SkipToken {
    pub fn to_odata(&self) -> String {
        format!(
            "<cookie pagenumber='{}' pagingcookie='{}' istracking='False' />",
            self.page_number, self.paging_cookie
        )
    }
}

impl OrderByElement {
    pub fn to_odata(&self) -> String {
        match self.direction {
            OrderByDirection::Asc => format!("{} asc", self.property),
            OrderByDirection::Desc => format!("{} desc", self.property),
        }
    }
}

impl Expression {
    pub fn to_odata(&self, out: &mut String) {
        match self {
            Expression::And(expressions) => joined_to_odata(out, expressions, " and ", true),
            Expression::Or(expressions) => joined_to_odata(out, expressions, " or ", false),
            Expression::Not(expression) => {
                out.push_str("not ");
                expression.to_odata(out);
            }
            Expression::Comparison {
                property,
                operator,
                value,
            } => {
                out.push_str(property);
                out.push(' ');
                out.push_str(operator.to_odata());
                out.push(' ');
                value.to_odata(out);
            }
            Expression::StringFunction {
                function,
                property,
                value,
            } => {
                out.push_str(function.to_odata());
                out.push('(');
                out.push_str(property);
                out.push_str(", ");
                value.to_odata(out);
                out.push(')');
            }
            Expression::VendorFunction {
                name,
                property,
                arguments,
            } => {
                out.push_str(VENDOR_NAMESPACE);
                out.push('.');
                out.push_str(name);
                out.push_str("(PropertyName=");
                Literal::String(property.clone()).to_odata(out);
                arguments.to_odata(out);
                out.push(')');
            }
            Expression::Literal(literal) => literal.to_odata(out),
        }
    }
}

/// Parenthesize the expressions joined by `separator`.
/// No expressions at all render as the identity of the connective.
fn joined_to_odata(out: &mut String, expressions: &[Expression], separator: &str, identity: bool) {
    if expressions.is_empty() {
        Literal::Boolean(identity).to_odata(out);
        return;
    }
    out.push('(');
    for (index, expression) in expressions.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        expression.to_odata(out);
    }
    out.push(')');
}

impl ComparisonOperator {
    pub fn to_odata(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Ne => "ne",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Ge => "ge",
            ComparisonOperator::Le => "le",
        }
    }
}

impl StringFunction {
    pub fn to_odata(self) -> &'static str {
        match self {
            StringFunction::Contains => "contains",
            StringFunction::StartsWith => "startswith",
            StringFunction::EndsWith => "endswith",
        }
    }
}

impl VendorArguments {
    pub fn to_odata(&self, out: &mut String) {
        match self {
            VendorArguments::None => {}
            VendorArguments::Single(value) => {
                out.push_str(",PropertyValue=");
                value.to_odata(out);
            }
            VendorArguments::Pair(first, second) => {
                out.push_str(",PropertyValue1=");
                first.to_odata(out);
                out.push_str(",PropertyValue2=");
                second.to_odata(out);
            }
            VendorArguments::List(values) => {
                out.push_str(",PropertyValues=[");
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    value.to_odata(out);
                }
                out.push(']');
            }
        }
    }
}

impl Literal {
    pub fn to_odata(&self, out: &mut String) {
        match self {
            Literal::Null => out.push_str("null"),
            Literal::Boolean(true) => out.push_str("true"),
            Literal::Boolean(false) => out.push_str("false"),
            Literal::Raw(raw) => out.push_str(raw),
            Literal::String(s) => {
                out.push('\'');
                out.push_str(&s.replace('\'', "''"));
                out.push('\'');
            }
        }
    }
}
