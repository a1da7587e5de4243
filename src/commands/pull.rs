//! Implementation of the `pull` subcommand: fetch and merge changes from
//! the remote recorded for this repository.

use anyhow::Result;

use many::git;
use many::store::RepositoryStore;

use crate::cli::Context;

/// Execute the `pull` command.
pub fn execute(context: &Context) -> Result<()> {
    let store = RepositoryStore::load(&context.repo, &context.file)?;

    if store.record.remote_name.is_empty() {
        anyhow::bail!(
            "No remote is configured for this repository\n  \
             hint: Use `many init --update` to set one"
        );
    }

    git::pull(store.root(), &store.record.remote_name)?;
    println!("Pulled changes from '{}'", store.record.remote_name);
    Ok(())
}
