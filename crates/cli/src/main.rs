//! The CLI for the virtual entity data services.
//!
//! The actual code is located in the library; this just parses arguments and sets up logging.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use virtual_entity_cli::*;
use virtual_entity_configuration::environment::ProcessEnvironment;

/// The release version specified at build time.
const RELEASE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query virtual entities stored in a document store or a remote OData service.
#[derive(Parser)]
#[command(version = RELEASE_VERSION)]
struct Args {
    /// The directory holding the configuration.
    #[arg(long = "context-path", env = "VIRTUAL_ENTITY_CONTEXT_PATH", default_value = ".")]
    context_path: PathBuf,
    #[command(subcommand)]
    subcommand: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "virtual_entity=info,virtual_entity_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let context = Context {
        context_path: args.context_path,
        environment: ProcessEnvironment,
    };

    match run(args.subcommand, context, &mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
