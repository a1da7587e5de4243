//! Implementation of the `push` subcommand: push local changes to the
//! remote recorded for this repository.

use anyhow::Result;

use many::git;
use many::store::RepositoryStore;

use crate::cli::Context;

/// Execute the `push` command.
pub fn execute(context: &Context) -> Result<()> {
    let store = RepositoryStore::load(&context.repo, &context.file)?;

    if store.record.remote_name.is_empty() {
        anyhow::bail!(
            "No remote is configured for this repository\n  \
             hint: Use `many init --update` to set one"
        );
    }

    git::push(store.root(), &store.record.remote_name)?;
    println!("Pushed changes to '{}'", store.record.remote_name);
    Ok(())
}
