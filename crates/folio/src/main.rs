//! Folio CLI - portfolio site builder.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build a standalone portfolio page from your data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a portfolio project in the current directory
    Init {
        /// Skip interactive prompts, use defaults
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the live preview server for a portfolio file
    Dev {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,

        /// Portfolio source file (defaults to config)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Start the authenticated wizard API server
    Wizard {
        /// Port to listen on
        #[arg(short, long, default_value = "4100")]
        port: u16,

        /// Secret for signing bearer tokens (generated when absent)
        #[arg(long)]
        jwt_secret: Option<String>,
    },

    /// Build the standalone portfolio page
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip stylesheet minification
        #[arg(long)]
        no_minify: bool,

        /// Portfolio source file (defaults to config)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Preview a built output directory
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Dev {
            port,
            no_open,
            input,
        } => {
            commands::dev::run(&cli.config, port, !no_open, input).await?;
        }
        Commands::Wizard { port, jwt_secret } => {
            commands::wizard::run(&cli.config, port, jwt_secret).await?;
        }
        Commands::Build {
            output,
            no_minify,
            input,
        } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(&cli.config, output, minify, input).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(port, dir).await?;
        }
    }

    Ok(())
}
