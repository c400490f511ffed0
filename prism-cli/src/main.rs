use anyhow::Result;
use clap::{Parser, Subcommand};
use prism_query::config::default_config_path;
use prism_query::QueryConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Prism CLI - build and translate search query descriptors")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.prism/query.toml)
    #[arg(long, global = true, env = "PRISM_QUERY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a query from arguments and print the search request
    Translate {
        /// Index to search (repeatable, default: all)
        #[arg(short, long = "index")]
        indices: Vec<String>,

        /// Type to search (repeatable, default: all)
        #[arg(short, long = "type")]
        types: Vec<String>,

        /// Field to return (repeatable, default: all)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Result offset
        #[arg(long, allow_negative_numbers = true)]
        from: Option<i64>,

        /// Page size
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Sort key as field[:asc|desc] (repeatable, applied in order)
        #[arg(short, long)]
        sort: Vec<String>,

        /// Pretty-print the request body
        #[arg(long)]
        pretty: bool,
    },

    /// Translate a descriptor stored as JSON
    Describe {
        /// Path to the descriptor file
        path: PathBuf,

        /// Pretty-print the request body
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = QueryConfig::load_or_default(&config_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Using config {}", config_path.display());

    match cli.command {
        Commands::Translate {
            indices,
            types,
            fields,
            from,
            size,
            sort,
            pretty,
        } => {
            let args = commands::TranslateArgs {
                indices,
                types,
                fields,
                from,
                size,
                sort,
            };
            commands::run_translate(&args, &config, pretty)?;
        }
        Commands::Describe { path, pretty } => {
            tracing::info!("Describing {}", path.display());
            commands::run_describe(&path, &config, pretty)?;
        }
        Commands::Config => {
            commands::run_config(&config)?;
        }
    }

    Ok(())
}
