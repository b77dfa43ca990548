//! Convert a parsed configuration into the form used at runtime.

use std::path::PathBuf;

use query_engine_execution::{document, odata};

use crate::configuration::{Configuration, DataSource};
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::Secret;
use crate::version1::{DataSourceSettings, ParsedConfiguration, CONFIGURATION_FILENAME};

/// Resolve the secrets of a parsed configuration against an environment.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let data_source = match parsed_config.data_source {
        DataSourceSettings::DocumentStore(settings) => {
            DataSource::DocumentStore(document::Connection {
                uri: settings.uri,
                key: resolve(&settings.key, &environment)?,
                database: settings.database,
            })
        }
        DataSourceSettings::RemoteService(settings) => {
            DataSource::RemoteService(odata::Connection {
                resource: settings.resource,
                username: settings.username,
                password: resolve(&settings.password, &environment)?,
                token_endpoint: settings
                    .token_endpoint
                    .unwrap_or_else(|| odata::DEFAULT_TOKEN_ENDPOINT.to_string()),
                client_id: settings
                    .client_id
                    .unwrap_or_else(|| odata::DEFAULT_CLIENT_ID.to_string()),
            })
        }
    };

    Ok(Configuration {
        data_source,
        metadata: parsed_config.metadata,
        max_url_length: parsed_config.max_url_length,
    })
}

fn resolve(
    secret: &Secret,
    environment: &impl Environment,
) -> Result<String, MakeRuntimeConfigurationError> {
    match secret {
        Secret::Plain(value) => Ok(value.clone()),
        Secret::FromEnvironment { variable } => environment.read(variable).map_err(|error| {
            MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                file_path: PathBuf::from(CONFIGURATION_FILENAME),
                message: error.to_string(),
            }
        }),
    }
}
