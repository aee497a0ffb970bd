//! CLI Adapter.

mod generate;
mod list;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::app::config::{PROMPTS_DIR_ENV, load_config};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(version)]
#[command(about = "Assemble LLM prompts from topic guideline libraries", long_about = None)]
struct Cli {
    /// Path to a promptdeck.toml (defaults to ./promptdeck.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Topic library directory (overrides config and PROMPTDECK_PROMPTS_DIR)
    #[arg(long, global = true)]
    prompts_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available topics
    #[clap(visible_alias = "ls")]
    List {
        /// Filter by name, description or keyword
        #[arg(short, long)]
        query: Option<String>,
        /// Show every match instead of the first page
        #[arg(short, long)]
        all: bool,
    },
    /// Show a topic's details and combined guidelines
    Show {
        /// Topic identifier
        topic: String,
    },
    /// Generate a prompt for one or more topics
    #[clap(visible_alias = "g")]
    Generate {
        /// Topic identifiers, in order (interactive selection when omitted)
        topics: Vec<String>,
        /// Task description (prompted when omitted)
        #[arg(short, long)]
        task: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = load_context(cli.config, cli.prompts_dir).and_then(|ctx| match cli.command {
        Commands::List { query, all } => list::run_list(&ctx, query.as_deref(), all),
        Commands::Show { topic } => show::run_show(&ctx, &topic),
        Commands::Generate { topics, task } => generate::run_generate(&ctx, topics, task),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_context(
    config_path: Option<PathBuf>,
    prompts_dir: Option<PathBuf>,
) -> Result<AppContext, AppError> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(config_path.as_deref(), &cwd)?
        .with_prompts_dir_override(std::env::var_os(PROMPTS_DIR_ENV));
    if let Some(dir) = prompts_dir {
        config.prompts_dir = Some(dir);
    }
    AppContext::load(config)
}
