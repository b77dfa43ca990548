pub mod configuration;
pub mod environment;
pub mod error;
pub mod to_runtime_configuration;
pub mod values;
pub mod version1;

pub use configuration::{Configuration, DataSource};
pub use to_runtime_configuration::make_runtime_configuration;
pub use values::Secret;
pub use version1::{
    parse_configuration, write_parsed_configuration, DataSourceKind, DataSourceSettings,
    DocumentStoreSettings, ParsedConfiguration, RemoteServiceSettings,
};
