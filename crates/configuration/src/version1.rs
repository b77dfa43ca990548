//! Internal Configuration and state for our connector.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use query_engine_metadata::metadata;

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::Secret;

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;
pub const DEFAULT_KEY_VARIABLE: &str = "VIRTUAL_ENTITY_DOCUMENT_STORE_KEY";
pub const DEFAULT_PASSWORD_VARIABLE: &str = "VIRTUAL_ENTITY_REMOTE_SERVICE_PASSWORD";

/// Initial configuration, just enough to reach an external store and describe the
/// entities it holds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: u32,
    pub data_source: DataSourceSettings,
    #[serde(default)]
    pub metadata: metadata::Metadata,
    /// Longest relative URL the remote service accepts.
    #[serde(default = "default_max_url_length")]
    #[serde(skip_serializing_if = "is_default_max_url_length")]
    pub max_url_length: usize,
}

fn default_max_url_length() -> usize {
    DEFAULT_MAX_URL_LENGTH
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_default_max_url_length(length: &usize) -> bool {
    *length == DEFAULT_MAX_URL_LENGTH
}

impl ParsedConfiguration {
    /// An empty configuration for the given kind of store, with secrets read from
    /// the default environment variables.
    pub fn initial(kind: DataSourceKind) -> Self {
        let data_source = match kind {
            DataSourceKind::DocumentStore => {
                DataSourceSettings::DocumentStore(DocumentStoreSettings {
                    uri: String::new(),
                    key: Secret::from_environment(DEFAULT_KEY_VARIABLE),
                    database: String::new(),
                })
            }
            DataSourceKind::RemoteService => {
                DataSourceSettings::RemoteService(RemoteServiceSettings {
                    resource: String::new(),
                    username: String::new(),
                    password: Secret::from_environment(DEFAULT_PASSWORD_VARIABLE),
                    token_endpoint: None,
                    client_id: None,
                })
            }
        };

        ParsedConfiguration {
            version: CURRENT_VERSION,
            data_source,
            metadata: metadata::Metadata::empty(),
            max_url_length: DEFAULT_MAX_URL_LENGTH,
        }
    }
}

/// The kinds of external store a configuration can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataSourceKind {
    DocumentStore,
    RemoteService,
}

/// How to reach the external store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DataSourceSettings {
    DocumentStore(DocumentStoreSettings),
    RemoteService(RemoteServiceSettings),
}

/// Document store connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStoreSettings {
    /// Account endpoint, e.g. `https://<account>.documents.azure.com:443/`.
    pub uri: String,
    /// Base64-encoded master key.
    pub key: Secret,
    pub database: String,
}

/// Remote service connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteServiceSettings {
    /// Root URL of the service, also the resource the access token is requested for.
    pub resource: String,
    pub username: String,
    pub password: Secret,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Read the configuration from a directory on disk.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion {
            file_path: configuration_file,
            version: parsed_config.version,
        });
    }

    tracing::debug!(
        entities = parsed_config.metadata.entities.0.len(),
        "parsed configuration"
    );

    Ok(parsed_config)
}

/// Write the parsed configuration and its JSON schema into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
