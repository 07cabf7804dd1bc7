//! svmd CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "svmd")]
#[command(version)]
#[command(about = "Render extended Markdown for component-based sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to markup or a JSON render tree
    Render {
        /// Input document
        input: String,

        /// Output format (html, json)
        #[arg(short = 't', long, default_value = "html")]
        to: String,

        /// Write output to FILE (use '--output -' for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// JSON pipeline configuration file
        #[arg(long)]
        config: Option<String>,
    },

    /// Print the metadata collected from a document as JSON
    Meta {
        /// Input document
        input: String,

        /// JSON pipeline configuration file
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "svmd=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            to,
            output,
            config,
        } => commands::render::execute(commands::render::RenderArgs {
            input,
            to,
            output,
            config,
        }),
        Commands::Meta { input, config } => {
            commands::meta::execute(commands::meta::MetaArgs { input, config })
        }
    }
}
