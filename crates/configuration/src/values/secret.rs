use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A value that is either written into the configuration or read from an environment
/// variable when the runtime configuration is made.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    #[serde(rename_all = "camelCase")]
    FromEnvironment { variable: String },
}

impl Secret {
    pub fn from_environment(variable: impl Into<String>) -> Self {
        Secret::FromEnvironment {
            variable: variable.into(),
        }
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Secret::Plain(_) => f.write_str("Plain(<redacted>)"),
            Secret::FromEnvironment { variable } => f
                .debug_struct("FromEnvironment")
                .field("variable", variable)
                .finish(),
        }
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_forms() {
        assert_eq!(
            serde_json::from_str::<Secret>(r#""hunter2""#).unwrap(),
            Secret::from("hunter2")
        );
        assert_eq!(
            serde_json::from_str::<Secret>(r#"{ "variable": "BOOKS_KEY" }"#).unwrap(),
            Secret::from_environment("BOOKS_KEY")
        );
    }

    #[test]
    fn plain_values_are_not_printed() {
        assert_eq!(format!("{:?}", Secret::from("hunter2")), "Plain(<redacted>)");
    }
}
