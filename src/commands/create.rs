//! # Create Command Implementation
//!
//! This module implements the `create` subcommand, which registers a new
//! microservice in the record, or updates the details of an existing one
//! when `--update` is given. Only the flags the caller supplies end up in
//! the change set; everything else is left as stored.

use anyhow::Result;
use clap::Args;
use url::Url;

use many::error::Error;
use many::record::{RecordChanges, ServiceChanges};
use many::store::RepositoryStore;

use crate::cli::Context;

/// Register a new microservice with Many
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of microservice
    pub service: String,

    /// Description of microservice
    #[arg(short = 's', long)]
    pub description: Option<String>,

    /// URL of the Git repository for the microservice
    #[arg(short, long, value_name = "URL")]
    pub git: Option<Url>,

    /// URL of the Docker repository for the microservice
    #[arg(short = 'c', long, value_name = "URL")]
    pub docker: Option<Url>,

    /// Update microservice details if it already exists
    #[arg(short, long)]
    pub update: bool,
}

/// Execute the `create` command.
pub fn execute(context: &Context, args: CreateArgs) -> Result<()> {
    let mut store = RepositoryStore::load(&context.repo, &context.file)?;

    let existed = store.record.services.contains_key(&args.service);
    if existed && !args.update {
        return Err(Error::ServiceExists { name: args.service }.into());
    }

    let changes = RecordChanges::for_service(
        args.service.clone(),
        ServiceChanges {
            description: args.description,
            git: args.git.map(|url| url.to_string()),
            docker: args.docker.map(|url| url.to_string()),
            ..ServiceChanges::default()
        },
    );
    store.record.apply(changes);
    store.save()?;

    if existed {
        println!("Updated service '{}'", args.service);
    } else {
        println!("Registered service '{}'", args.service);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use many::output::OutputConfig;
    use many::record::RecordChanges;
    use tempfile::TempDir;

    fn initialised_context(temp: &TempDir) -> Context {
        let context = Context {
            repo: temp.path().join("repo"),
            file: "Many.toml".to_string(),
            output: OutputConfig { use_color: false },
        };
        let changes = RecordChanges {
            name: Some("checkout".to_string()),
            remote_url: Some("https://example.com/repo.git".to_string()),
            remote_name: Some("origin".to_string()),
            ..RecordChanges::default()
        };
        RepositoryStore::initialize(&context.repo, &context.file, changes, false).unwrap();
        context
    }

    fn args(service: &str, update: bool) -> CreateArgs {
        CreateArgs {
            service: service.to_string(),
            description: Some("Billing service".to_string()),
            git: Some(Url::parse("https://example.com/billing.git").unwrap()),
            docker: None,
            update,
        }
    }

    #[test]
    fn test_execute_registers_service() {
        let temp = TempDir::new().unwrap();
        let context = initialised_context(&temp);

        execute(&context, args("billing", false)).unwrap();

        let store = RepositoryStore::load(&context.repo, &context.file).unwrap();
        let billing = &store.record.services["billing"];
        assert_eq!(billing.description, "Billing service");
        assert_eq!(billing.git, "https://example.com/billing.git");
        assert_eq!(billing.docker, "");
    }

    #[test]
    fn test_execute_existing_service_without_update_fails() {
        let temp = TempDir::new().unwrap();
        let context = initialised_context(&temp);

        execute(&context, args("billing", false)).unwrap();
        let result = execute(&context, args("billing", false));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("already registered"));
    }

    #[test]
    fn test_execute_update_merges_supplied_fields_only() {
        let temp = TempDir::new().unwrap();
        let context = initialised_context(&temp);

        execute(&context, args("billing", false)).unwrap();
        execute(
            &context,
            CreateArgs {
                service: "billing".to_string(),
                description: Some("Payments and invoicing".to_string()),
                git: None,
                docker: None,
                update: true,
            },
        )
        .unwrap();

        let store = RepositoryStore::load(&context.repo, &context.file).unwrap();
        let billing = &store.record.services["billing"];
        assert_eq!(billing.description, "Payments and invoicing");
        // Not supplied, so left as stored.
        assert_eq!(billing.git, "https://example.com/billing.git");
    }

    #[test]
    fn test_execute_without_record_fails() {
        let temp = TempDir::new().unwrap();
        let context = Context {
            repo: temp.path().join("repo"),
            file: "Many.toml".to_string(),
            output: OutputConfig { use_color: false },
        };

        let result = execute(&context, args("billing", false));
        assert!(result.is_err());
    }
}
