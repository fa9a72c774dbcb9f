#![forbid(unsafe_code)]
//! readme-gen command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use readme_gen::commands::{execute_generate, execute_set, GenerateOptions, SetOptions};

#[derive(Parser)]
#[command(name = "readme-gen")]
#[command(about = "Generate a beautiful README.md from interactive prompts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to your own template
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Use default values for all fields
    #[arg(short, long)]
    yes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Persist key=value answers into config.json and exit
    Set {
        /// key=value pairs; keys outside the recognized set are ignored
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The execution mode is decided exactly once, here.
    match cli.command {
        Some(Commands::Set { pairs }) => execute_set(SetOptions { pairs }),
        None => execute_generate(GenerateOptions {
            template_path: cli.path,
            use_default_answers: cli.yes,
        }),
    }
}
