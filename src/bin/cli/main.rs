use anyhow::{Context, Result};
use bucket_config_expander::{
    AppConfig, OutputFormat, build_bucket_requests, load_bucket_config,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(name = "bucket-expand")]
#[command(about = "Expand a bucket configuration into storage API requests", long_about = None)]
struct Cli {
    /// Output format: xml or json
    #[arg(short, long, env = "BUCKET_EXPAND_FORMAT", default_value = "xml")]
    format: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the bucket tagging request
    Tags {
        /// Bucket configuration file (JSON)
        config: PathBuf,
    },

    /// Print the bucket lifecycle configuration request
    Lifecycle {
        /// Bucket configuration file (JSON)
        config: PathBuf,
    },

    /// Print every request for the bucket
    All {
        /// Bucket configuration file (JSON)
        config: PathBuf,
    },
}

impl Commands {
    fn config_path(&self) -> &PathBuf {
        match self {
            Commands::Tags { config }
            | Commands::Lifecycle { config }
            | Commands::All { config } => config,
        }
    }
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let output_format = self
            .format
            .parse::<OutputFormat>()
            .context("Invalid --format value")?;

        Ok(AppConfig { output_format })
    }

    fn init_logging(&self) -> Result<()> {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();

        Ok(())
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    let app_config = cli.to_app_config()?;
    let path = cli.command.config_path();
    info!("Reading bucket configuration from {}", path.display());

    let config = load_bucket_config(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let requests = build_bucket_requests(&config)?;

    let output = match &cli.command {
        Commands::Tags { .. } => requests.tagging.render(app_config.output_format)?,
        Commands::Lifecycle { .. } => requests.lifecycle.render(app_config.output_format)?,
        Commands::All { .. } => requests.render(app_config.output_format)?,
    };
    println!("{}", output);

    Ok(())
}
