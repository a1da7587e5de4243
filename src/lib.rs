//! # Many Library
//!
//! This library provides the core functionality for tracking version
//! metadata for a set of named microservices inside a single record file
//! (`Many.toml`) kept in a repository directory. It is designed to be used
//! by the `many` command-line tool but can also be integrated into other
//! applications that need to read or reconcile version records.
//!
//! ## Quick Example
//!
//! ```
//! use many::record::{ProjectRecord, RecordChanges, ServiceChanges};
//!
//! let mut record = ProjectRecord::new("checkout", "https://example.com/repo.git", "origin");
//!
//! // Commands express intent as a partial change set; only the supplied
//! // fields are applied.
//! record.apply(RecordChanges::for_service(
//!     "billing",
//!     ServiceChanges {
//!         description: Some("Billing service".to_string()),
//!         ..ServiceChanges::default()
//!     },
//! ));
//!
//! assert_eq!(record.services["billing"].description, "Billing service");
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Record (`record`)**: The schema of the record file (version
//!   entries, the ordered name-unique version set, per-service metadata,
//!   and the aggregate project record), together with the merge logic that
//!   reconciles a partial change set with persisted state.
//! - **Store (`store`)**: Binds a record to its repository directory and
//!   record file, and owns the load, save, and initialize-or-update
//!   lifecycle.
//! - **Git (`git`)**: A thin wrapper around the system `git` command for
//!   cloning, pulling, and pushing the repository that holds the record.
//!   The record core never performs version-control operations itself.
//! - **Output (`output`) and suggestions (`suggestions`)**: CLI niceties:
//!   color handling that respects `NO_COLOR` and friends, and error hints
//!   with did-you-mean suggestions for misspelled service names.
//!
//! ## Execution Flow
//!
//! Every mutating command follows the same shape:
//!
//! 1.  **Parse**: the CLI builds a partial change set containing only the
//!     fields the caller supplied.
//! 2.  **Load**: the store reads and decodes the persisted record, if any.
//! 3.  **Merge**: the change set is applied; unsupplied fields are left
//!     untouched, version entries go through ordered insert-or-replace.
//! 4.  **Save**: the store rewrites the record file in full.
//!
//! Commands are synchronous and perform at most one load and one save; the
//! record file is the only state there is.

pub mod defaults;
pub mod error;
pub mod git;
pub mod output;
pub mod record;
pub mod store;
pub mod suggestions;

#[cfg(test)]
mod record_proptest;
