use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "codeview")]
#[command(about = "CodeView CLI - tabbed code viewer with plugin analysis results", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/codeview/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file, attach stored plugin results and print the view state as JSON
    Open {
        /// File to open
        file: String,
        /// Project root used to match plugin results (defaults to the file's directory, loaded before matching)
        #[arg(long)]
        root: Option<String>,
        /// Show the plugin result next to the file
        #[arg(long)]
        split: bool,
    },
    /// Print the content a tab would render
    Content {
        /// Document id: a file path or `plugin_result:{plugin}:{path}`
        id: String,
        /// Project root used to look up plugin results
        #[arg(long)]
        root: Option<String>,
    },
    /// Manage model configurations
    Models {
        #[command(subcommand)]
        action: ModelsAction,
    },
}

#[derive(Subcommand)]
enum ModelsAction {
    /// Add a model configuration
    Add(commands::models::AddArgs),
    /// List model configurations
    List {
        /// Only show enabled models
        #[arg(long)]
        enabled: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::utils::config_service(cli.config.as_deref())?;

    match cli.command {
        Commands::Open { file, root, split } => {
            commands::view::open(&config, &file, root.as_deref(), split).await?
        }
        Commands::Content { id, root } => {
            commands::view::content(&config, &id, root.as_deref()).await?
        }
        Commands::Models { action } => match action {
            ModelsAction::Add(args) => commands::models::add(&config, args).await?,
            ModelsAction::List { enabled } => commands::models::list(&config, enabled).await?,
        },
    }

    Ok(())
}
