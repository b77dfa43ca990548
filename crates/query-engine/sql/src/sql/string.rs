//! Type definitions of a low-level SQL string representation.

/// Keywords that cannot be used as bare property names.
const RESERVED_WORDS: [&str; 26] = [
    "and", "array", "as", "asc", "between", "by", "desc", "distinct", "escape", "exists",
    "false", "from", "group", "in", "join", "like", "limit", "not", "null", "offset", "or",
    "order", "select", "top", "true", "value",
];

/// A SQL query text under construction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
        }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append an identifier that must be written bare, such as an alias.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push_str(identifier);
    }

    /// Append an access to a property of `alias`, using dotted access
    /// when the property name allows it and bracketed access otherwise.
    pub fn append_property(&mut self, alias: &str, property: &str) {
        self.sql.push_str(alias);
        if is_plain_identifier(property) {
            self.sql.push('.');
            self.sql.push_str(property);
        } else {
            self.sql.push('[');
            self.append_quoted(property, '"');
            self.sql.push(']');
        }
    }

    /// Append a single-quoted string literal.
    pub fn append_string_literal(&mut self, value: &str) {
        self.append_quoted(value, '\'');
    }

    fn append_quoted(&mut self, value: &str, quote: char) {
        self.sql.push(quote);
        for c in value.chars() {
            if c == quote || c == '\\' {
                self.sql.push('\\');
            }
            self.sql.push(c);
        }
        self.sql.push(quote);
    }
}

/// Can this name be written without brackets?
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_WORDS.contains(&name.to_ascii_lowercase().as_str())
}
