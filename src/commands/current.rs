//! Implementation of the `current` subcommand, which prints the latest
//! overall version of the project. "Latest" is the last entry of the
//! release history in name order.

use anyhow::Result;

use many::output::emphasize;
use many::store::RepositoryStore;

use crate::cli::Context;

/// Execute the `current` command.
pub fn execute(context: &Context) -> Result<()> {
    let store = RepositoryStore::load(&context.repo, &context.file)?;

    match store.record.history.latest() {
        Some(version) => {
            println!(
                "{} {}",
                emphasize(&context.output, &store.record.name),
                version.name
            );
            let mut detail = format!("released {}", version.released_at.format("%Y-%m-%d"));
            if !version.author.is_empty() {
                detail.push_str(&format!(" by {}", version.author));
            }
            println!("  {}", detail);
            if !version.description.is_empty() {
                println!("  {}", version.description);
            }
        }
        None => println!(
            "{}: no versions have been released yet",
            store.record.name
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use many::output::OutputConfig;
    use many::record::{RecordChanges, VersionEntry};
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> Context {
        Context {
            repo: temp.path().join("repo"),
            file: "Many.toml".to_string(),
            output: OutputConfig { use_color: false },
        }
    }

    fn initialise(context: &Context, history: Vec<VersionEntry>) {
        let changes = RecordChanges {
            name: Some("checkout".to_string()),
            remote_url: Some("https://example.com/repo.git".to_string()),
            remote_name: Some("origin".to_string()),
            history,
            ..RecordChanges::default()
        };
        RepositoryStore::initialize(&context.repo, &context.file, changes, false).unwrap();
    }

    #[test]
    fn test_execute_with_empty_history() {
        let temp = TempDir::new().unwrap();
        let context = context(&temp);
        initialise(&context, vec![]);

        execute(&context).unwrap();
    }

    #[test]
    fn test_execute_with_releases() {
        let temp = TempDir::new().unwrap();
        let context = context(&temp);
        let released = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        initialise(
            &context,
            vec![
                VersionEntry::new("0.9.0", "", released, "alice"),
                VersionEntry::new("1.0.0", "", released, "alice"),
            ],
        );

        execute(&context).unwrap();
    }

    #[test]
    fn test_execute_without_record_fails() {
        let temp = TempDir::new().unwrap();
        let context = context(&temp);
        assert!(execute(&context).is_err());
    }
}
