//! # Promote Command Implementation
//!
//! This module implements the `promote` subcommand, which nominates a
//! version as the candidate for a microservice. The candidate is a fresh
//! version entry stamped with the current time; a later promote of a
//! different version simply replaces it. Released history is only ever
//! written by a release, never by promote.

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use many::defaults;
use many::record::{RecordChanges, ServiceChanges, VersionEntry};
use many::store::RepositoryStore;
use many::suggestions;

use crate::cli::Context;

/// Promote a candidate version of a microservice
#[derive(Args, Debug)]
pub struct PromoteArgs {
    /// Name of microservice
    pub service: String,

    /// Candidate version
    pub version: String,

    /// Description of the candidate version
    #[arg(short = 's', long)]
    pub description: Option<String>,

    /// Author recorded on the candidate version (defaults to $USER)
    #[arg(short, long)]
    pub author: Option<String>,
}

/// Execute the `promote` command.
pub fn execute(context: &Context, args: PromoteArgs) -> Result<()> {
    let mut store = RepositoryStore::load(&context.repo, &context.file)?;

    if !store.record.services.contains_key(&args.service) {
        return Err(suggestions::unknown_service(&args.service, &store.record).into());
    }

    let candidate = VersionEntry::new(
        args.version.clone(),
        args.description.unwrap_or_default(),
        Utc::now(),
        args.author.unwrap_or_else(defaults::default_author),
    );
    store.record.apply(RecordChanges::for_service(
        args.service.clone(),
        ServiceChanges {
            candidate: Some(candidate),
            ..ServiceChanges::default()
        },
    ));
    store.save()?;

    println!(
        "Promoted version '{}' to candidate for service '{}'",
        args.version, args.service
    );
    Ok(())
}
