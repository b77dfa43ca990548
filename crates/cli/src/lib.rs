//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done, making it easier to test this crate deterministically.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Subcommand;
use uuid::Uuid;

use query_engine_models::models::{EntityReference, QueryModel};
use virtual_entity::{DataService, VirtualEntity, VirtualEntitySetup};
use virtual_entity_configuration as configuration;
use virtual_entity_configuration::environment::Environment;
use virtual_entity_configuration::version1::CONFIGURATION_FILENAME;

/// The various contextual bits and bobs we need to run.
pub struct Context<Env: Environment> {
    pub context_path: PathBuf,
    pub environment: Env,
}

/// The command invoked by the user.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write an empty configuration and its JSON schema into the context directory.
    Initialize {
        #[arg(long, value_enum)]
        data_source: configuration::DataSourceKind,
    },
    /// Print the JSON schema of the configuration file.
    PrintSchema,
    /// Run a query read from a JSON file and print the resulting collection.
    GetEntities {
        #[arg(long)]
        query: PathBuf,
    },
    /// Fetch a single record and print it, or `null` if it does not exist.
    GetEntity {
        #[arg(long)]
        entity: String,
        #[arg(long)]
        id: Uuid,
    },
}

/// Run a command in a given directory, writing its output to `out`.
pub async fn run(
    command: Command,
    context: Context<impl Environment>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Initialize { data_source } => initialize(&context.context_path, data_source).await,
        Command::PrintSchema => {
            let schema = schemars::schema_for!(configuration::ParsedConfiguration);
            writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
            Ok(())
        }
        Command::GetEntities { query: query_file } => {
            let contents = tokio::fs::read_to_string(&query_file)
                .await
                .with_context(|| format!("unable to read {}", query_file.display()))?;
            let query: QueryModel = serde_json::from_str(&contents)
                .with_context(|| format!("{} is not a valid query", query_file.display()))?;

            let collection = connect(context).await?.get_entities(query).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&collection)?)?;
            Ok(())
        }
        Command::GetEntity { entity, id } => {
            let reference = EntityReference::new(entity, id);
            let entity = connect(context).await?.get_entity(&reference).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&entity)?)?;
            Ok(())
        }
    }
}

/// Initialize an empty directory with an empty configuration for the given store.
///
/// An existing configuration is never overwritten.
async fn initialize(
    context_path: &Path,
    data_source: configuration::DataSourceKind,
) -> anyhow::Result<()> {
    if context_path.join(CONFIGURATION_FILENAME).exists() {
        anyhow::bail!(
            "a configuration already exists in {}",
            context_path.display()
        );
    }

    configuration::write_parsed_configuration(
        configuration::ParsedConfiguration::initial(data_source),
        context_path,
    )
    .await?;

    tracing::info!(path = %context_path.display(), "initialized configuration");
    Ok(())
}

async fn connect(context: Context<impl Environment>) -> anyhow::Result<VirtualEntity> {
    let setup = VirtualEntitySetup::new(context.environment);
    let service = setup
        .connect(&context.context_path, &mut prometheus::Registry::new())
        .await?;
    Ok(service)
}
