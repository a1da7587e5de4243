//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use many::defaults;
use many::output::OutputConfig;

use crate::commands;

/// Many - Microservice versioning tool
#[derive(Parser, Debug)]
#[command(name = "many")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the Many repository
    #[arg(
        short,
        long,
        global = true,
        value_name = "DIR",
        default_value = "."
    )]
    repo: PathBuf,

    /// Name of the Many record file
    #[arg(
        short,
        long,
        global = true,
        value_name = "NAME",
        default_value = defaults::RECORD_FILE
    )]
    file: String,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new Many repository with an empty record file
    Init(commands::init::InitArgs),
    /// Register a new microservice with Many
    Create(commands::create::CreateArgs),
    /// View details for microservices
    View(commands::view::ViewArgs),
    /// Delete a microservice
    Delete(commands::delete::DeleteArgs),
    /// Promote a candidate version of a microservice
    Promote(commands::promote::PromoteArgs),
    /// View the current overall version
    Current,
    /// Create a new overall version from the candidates
    Release(commands::release::ReleaseArgs),
    /// Pull changes from the remote Many repository
    Pull,
    /// Push changes to the remote Many repository
    Push,
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Global flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path to the repository directory holding the record file.
    pub repo: PathBuf,
    /// Name of the record file inside the repository.
    pub file: String,
    /// Output appearance configuration.
    pub output: OutputConfig,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .init();

        let context = Context {
            repo: self.repo,
            file: self.file,
            output: OutputConfig::from_env_and_flag(&self.color),
        };

        match self.command {
            Commands::Init(args) => commands::init::execute(&context, args),
            Commands::Create(args) => commands::create::execute(&context, args),
            Commands::View(args) => commands::view::execute(&context, args),
            Commands::Delete(args) => commands::delete::execute(&context, args),
            Commands::Promote(args) => commands::promote::execute(&context, args),
            Commands::Current => commands::current::execute(&context),
            Commands::Release(args) => commands::release::execute(&context, args),
            Commands::Pull => commands::pull::execute(&context),
            Commands::Push => commands::push::execute(&context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
