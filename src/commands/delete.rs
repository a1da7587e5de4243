//! # Delete Command Implementation
//!
//! This module implements the `delete` subcommand, which removes a
//! microservice from the record. Deletion is destructive, so an interactive
//! confirmation is required; `--yes` skips it, and without a TTY the prompt
//! cannot be shown, so `--yes` becomes mandatory.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

use many::store::RepositoryStore;
use many::suggestions;

use crate::cli::Context;

/// Delete a microservice
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of microservice
    pub service: String,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the `delete` command.
pub fn execute(context: &Context, args: DeleteArgs) -> Result<()> {
    let mut store = RepositoryStore::load(&context.repo, &context.file)?;

    if !store.record.services.contains_key(&args.service) {
        return Err(suggestions::unknown_service(&args.service, &store.record).into());
    }

    if !args.yes {
        if !console::user_attended() {
            anyhow::bail!(
                "Refusing to delete service '{}' without confirmation\n  \
                 hint: Use --yes to skip the prompt",
                args.service
            );
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete service '{}'?", args.service))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.record.services.remove(&args.service);
    store.save()?;

    println!("Deleted service '{}'", args.service);
    Ok(())
}
