// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use document_connector::config::parse_override;
use document_connector::exporter::tasks_to_json;
use document_connector::utils::logging::{format_error, format_field, format_success};
use document_connector::{
    AppConfig, ConfigValidator, DocumentSourceConnector, JsonExporter, SourceConnector,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "document_connector")]
#[command(version)]
#[command(about = "Validates document connector settings and plans balanced task configurations", long_about = None)]
struct Cli {
    /// Connector config file [default: config/default.toml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override a connector property, e.g. --set topic=documents
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate connector properties and print the resolved configuration
    Validate,

    /// Generate one task configuration per file group
    Plan {
        #[arg(short, long, value_name = "NUM")]
        max_tasks: Option<NonZeroUsize>,

        /// Write task-<n>.json files and a manifest instead of printing
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    document_connector::utils::logging::init_logger(cli.color, cli.verbose);

    match &cli.config {
        Some(path) => info!("Loading configuration from: {}", path.display()),
        None => info!("Loading default configuration"),
    }

    let mut config =
        AppConfig::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(cli.overrides);

    match cli.command {
        Commands::Validate => cmd_validate(&config)?,
        Commands::Plan {
            max_tasks,
            output,
            pretty,
        } => cmd_plan(&config, max_tasks, output, pretty)?,
    }

    Ok(())
}

fn cmd_validate(config: &AppConfig) -> Result<()> {
    let validated = match ConfigValidator::validate(&config.connector) {
        Ok(validated) => validated,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            if e.is_missing_field() {
                eprintln!("  set it in the [connector] table or with --set KEY=VALUE");
            }
            return Err(e).context("Connector configuration is invalid");
        }
    };

    println!("{}", format_success("Connector configuration is valid"));
    for (key, value) in validated.to_properties() {
        println!("{}", format_field(&key, &value));
    }
    println!(
        "{}",
        format_field("file count", &validated.file_count().to_string())
    );

    Ok(())
}

fn cmd_plan(
    config: &AppConfig,
    max_tasks: Option<NonZeroUsize>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let max_tasks = config.resolve_max_tasks(max_tasks)?;

    let mut connector = DocumentSourceConnector::new();
    info!("Document source connector {}", connector.version());
    connector
        .start(&config.connector)
        .context("Failed to start connector")?;

    let tasks = connector.task_configs(max_tasks)?;
    connector.stop();

    match output {
        Some(dir) => {
            let exporter = JsonExporter::new(&dir)?;
            let manifest = exporter.export_tasks(&tasks, pretty)?;
            eprintln!(
                "{}",
                format_success(&format!(
                    "Wrote {} task configurations covering {} files to {}",
                    manifest.total_tasks,
                    manifest.total_files,
                    exporter.output_dir().display()
                ))
            );
        }
        None => println!("{}", tasks_to_json(&tasks, pretty)?),
    }

    Ok(())
}
