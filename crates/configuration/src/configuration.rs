//! Configuration for the connector.

use query_engine_execution::{document, odata};
use query_engine_metadata::metadata;

/// The 'Configuration' type collects all the information necessary to serve requests at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves every secret.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub data_source: DataSource,
    pub metadata: metadata::Metadata,
    pub max_url_length: usize,
}

/// A resolved connection to one of the supported stores.
#[derive(Debug, Clone)]
pub enum DataSource {
    DocumentStore(document::Connection),
    RemoteService(odata::Connection),
}
