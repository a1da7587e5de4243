//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates a new record
//! file for a repository, optionally cloning the repository from its remote
//! first.
//!
//! ## Functionality
//!
//! - **Create Mode**: Creates an empty record holding the repository name
//!   and remote identity (default).
//! - **Update Mode**: With `--update`, merges the supplied details into an
//!   already initialised record instead of failing.
//! - **Clone Step**: When the repository directory does not exist and
//!   `--no-clone` is not given, the directory is first cloned from the
//!   remote URL using the system `git` client. The record core itself never
//!   clones.

use anyhow::Result;
use clap::Args;
use url::Url;

use many::defaults;
use many::git;
use many::record::RecordChanges;
use many::store::{InitOutcome, RepositoryStore};

use crate::cli::Context;

/// Initialize a new Many repository with an empty record file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the Many repository
    pub name: String,

    /// URL of the Git remote
    #[arg(value_name = "GIT_URL")]
    pub remote_url: Url,

    /// Name of the Git remote
    #[arg(
        short = 'm',
        long,
        value_name = "NAME",
        default_value = defaults::REMOTE_NAME
    )]
    pub remote: String,

    /// Update Many repository details if it is already initialised
    #[arg(short, long)]
    pub update: bool,

    /// Do not clone from an existing repository at the remote URL
    #[arg(short, long)]
    pub no_clone: bool,
}

/// Execute the `init` command.
///
/// Clones the repository when requested and absent, then creates or updates
/// the record file through the store lifecycle.
pub fn execute(context: &Context, args: InitArgs) -> Result<()> {
    if !args.no_clone && !context.repo.exists() {
        println!(
            "Cloning {} into {}...",
            args.remote_url,
            context.repo.display()
        );
        git::clone(args.remote_url.as_str(), &context.repo)?;
    }

    let changes = RecordChanges {
        name: Some(args.name),
        remote_url: Some(args.remote_url.to_string()),
        remote_name: Some(args.remote),
        ..RecordChanges::default()
    };
    let (store, outcome) =
        RepositoryStore::initialize(&context.repo, &context.file, changes, args.update)?;

    match outcome {
        InitOutcome::Created => println!(
            "Initialised Many repository '{}' at {}",
            store.record.name,
            store.record_path().display()
        ),
        InitOutcome::Updated => println!(
            "Updated Many repository '{}' at {}",
            store.record.name,
            store.record_path().display()
        ),
    }
    Ok(())
}
