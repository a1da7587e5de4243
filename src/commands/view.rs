//! # View Command Implementation
//!
//! This module implements the `view` subcommand, which prints the stored
//! details for one or more microservices named as a comma-separated list.
//! Unknown names fail up front, before anything is printed, with a
//! did-you-mean suggestion when a registered name is close.

use anyhow::Result;
use clap::Args;

use many::output::{dim, emphasize, OutputConfig};
use many::record::{Service, VersionEntry};
use many::store::RepositoryStore;
use many::suggestions;

use crate::cli::Context;

/// View details for microservices
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// CSV list of microservices
    pub services: String,
}

/// Execute the `view` command.
pub fn execute(context: &Context, args: ViewArgs) -> Result<()> {
    let store = RepositoryStore::load(&context.repo, &context.file)?;

    let names: Vec<&str> = args
        .services
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    for name in &names {
        if !store.record.services.contains_key(*name) {
            return Err(suggestions::unknown_service(name, &store.record).into());
        }
    }

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_service(&context.output, name, &store.record.services[*name]);
    }
    Ok(())
}

fn print_service(output: &OutputConfig, name: &str, service: &Service) {
    println!("{}", emphasize(output, name));
    if !service.description.is_empty() {
        println!("  description: {}", service.description);
    }
    if !service.git.is_empty() {
        println!("  git:         {}", service.git);
    }
    if !service.docker.is_empty() {
        println!("  docker:      {}", service.docker);
    }
    match &service.candidate {
        Some(candidate) => println!("  candidate:   {}", describe(output, candidate)),
        None => println!("  candidate:   none"),
    }
    if service.history.is_empty() {
        println!("  history:     none");
    } else {
        println!("  history:");
        for version in &service.history {
            println!("    {}", describe(output, version));
        }
    }
}

fn describe(output: &OutputConfig, version: &VersionEntry) -> String {
    let mut line = format!(
        "{} {}",
        version.name,
        dim(output, &version.released_at.format("%Y-%m-%d").to_string())
    );
    if !version.author.is_empty() {
        line.push_str(&format!(" by {}", version.author));
    }
    if !version.description.is_empty() {
        line.push_str(&format!(" - {}", version.description));
    }
    line
}
