//! # Repository Store
//!
//! This module binds a [`ProjectRecord`] to a filesystem location: a
//! repository directory and the record file inside it. It owns the
//! load, save, and initialize-or-update lifecycle.
//!
//! A store is `Absent` (no directory or no record file) until a successful
//! load or save; it holds no invariants beyond "the record reflects the last
//! successful load or save". Saving rewrites the record file in full with no
//! atomic rename and no lock, so a concurrent writer can race and lose
//! updates; that is an accepted limitation, not a guarantee.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::record::{ProjectRecord, RecordChanges};

/// Outcome of [`RepositoryStore::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A new record file was created.
    Created,
    /// An existing record was updated in place.
    Updated,
}

/// A [`ProjectRecord`] bound to its on-disk location.
#[derive(Debug)]
pub struct RepositoryStore {
    root: PathBuf,
    record_path: PathBuf,
    /// The record as of the last successful load or save.
    pub record: ProjectRecord,
}

impl RepositoryStore {
    /// Load the record file `file_name` from the repository at `root`.
    ///
    /// Fails with [`Error::NotFound`] when the directory or the record file
    /// is missing, and with [`Error::Decode`] when the file exists but is
    /// not a well-formed record.
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let root = root.canonicalize().map_err(|_| Error::NotFound {
            path: root.to_path_buf(),
            hint: Some("Check the --repo path".to_string()),
        })?;
        let record_path = root.join(file_name);
        if !record_path.is_file() {
            return Err(Error::NotFound {
                path: record_path,
                hint: Some("Run `many init` to create a record".to_string()),
            });
        }

        debug!("loading record from {}", record_path.display());
        let raw = fs::read_to_string(&record_path)?;
        let record = toml::from_str(&raw).map_err(|e| Error::Decode {
            path: record_path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            root,
            record_path,
            record,
        })
    }

    /// Write the record back to disk.
    ///
    /// Creates the repository directory (including parents) if it is absent,
    /// then rewrites the record file in full. There is no incremental update
    /// and no atomic rename.
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let encoded = toml::to_string_pretty(&self.record)?;
        debug!("writing record to {}", self.record_path.display());
        fs::write(&self.record_path, encoded)?;
        Ok(())
    }

    /// Create the record if it does not exist, or update it if allowed.
    ///
    /// When no record is present, an empty [`ProjectRecord`] is built,
    /// `changes` are merged in, and the result is saved. When a record is
    /// already present, the call fails with [`Error::AlreadyExists`] unless
    /// `update` is set, in which case `changes` are merged into the loaded
    /// record and the result is saved.
    pub fn initialize(
        root: &Path,
        file_name: &str,
        changes: RecordChanges,
        update: bool,
    ) -> Result<(Self, InitOutcome)> {
        match Self::load(root, file_name) {
            Ok(mut store) => {
                if !update {
                    return Err(Error::AlreadyExists {
                        path: store.record_path,
                    });
                }
                store.record.apply(changes);
                store.save()?;
                info!("updated record at {}", store.record_path.display());
                Ok((store, InitOutcome::Updated))
            }
            Err(Error::NotFound { .. }) => {
                let mut record = ProjectRecord::default();
                record.apply(changes);
                let store = Self {
                    root: root.to_path_buf(),
                    record_path: root.join(file_name),
                    record,
                };
                store.save()?;
                info!("created record at {}", store.record_path.display());
                Ok((store, InitOutcome::Created))
            }
            Err(e) => Err(e),
        }
    }

    /// The repository directory this store is bound to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The full path of the record file.
    pub fn record_path(&self) -> &Path {
        &self.record_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Service, ServiceChanges, VersionEntry};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn init_changes() -> RecordChanges {
        RecordChanges {
            name: Some("checkout".to_string()),
            remote_url: Some("https://example.com/repo.git".to_string()),
            remote_name: Some("origin".to_string()),
            ..RecordChanges::default()
        }
    }

    #[test]
    fn test_initialize_creates_record_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");

        let (store, outcome) =
            RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();

        assert_eq!(outcome, InitOutcome::Created);
        assert!(root.join("record.toml").is_file());
        assert_eq!(store.record.name, "checkout");
        assert_eq!(store.record.remote_url, "https://example.com/repo.git");
        assert_eq!(store.record.remote_name, "origin");
        assert!(store.record.history.is_empty());
        assert!(store.record.services.is_empty());

        let raw = fs::read_to_string(root.join("record.toml")).unwrap();
        assert!(raw.contains(r#"name = "checkout""#));
        assert!(raw.contains(r#"remote_url = "https://example.com/repo.git""#));
        assert!(raw.contains(r#"remote_name = "origin""#));
    }

    #[test]
    fn test_initialize_twice_without_update_fails() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");

        RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();
        let err = RepositoryStore::initialize(&root, "record.toml", init_changes(), false)
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }

    #[test]
    fn test_initialize_with_update_changes_only_supplied_fields() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");

        RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();
        let changes = RecordChanges {
            remote_name: Some("upstream".to_string()),
            ..RecordChanges::default()
        };
        let (store, outcome) =
            RepositoryStore::initialize(&root, "record.toml", changes, true).unwrap();

        assert_eq!(outcome, InitOutcome::Updated);
        assert_eq!(store.record.name, "checkout");
        assert_eq!(store.record.remote_url, "https://example.com/repo.git");
        assert_eq!(store.record.remote_name, "upstream");
    }

    #[test]
    fn test_load_missing_directory_fails_not_found() {
        let temp = TempDir::new().unwrap();
        let err =
            RepositoryStore::load(&temp.path().join("nope"), "record.toml").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_load_missing_record_file_fails_not_found() {
        let temp = TempDir::new().unwrap();
        let err = RepositoryStore::load(temp.path(), "record.toml").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        let display = format!("{}", err);
        assert!(display.contains("many init"));
    }

    #[test]
    fn test_load_malformed_record_fails_decode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("record.toml"), "name = [unclosed").unwrap();

        let err = RepositoryStore::load(temp.path(), "record.toml").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");

        let (mut store, _) =
            RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();

        let released = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        store
            .record
            .history
            .add(VersionEntry::new("1.0.0", "first", released, "alice"));
        store.record.services.insert(
            "billing".to_string(),
            Service {
                description: "Billing service".to_string(),
                git: "https://example.com/billing.git".to_string(),
                docker: "https://registry.example.com/billing".to_string(),
                candidate: Some(VersionEntry::new("1.1.0", "", released, "bob")),
                history: Default::default(),
            },
        );
        store.save().unwrap();

        let loaded = RepositoryStore::load(&root, "record.toml").unwrap();
        assert_eq!(loaded.record, store.record);
    }

    #[test]
    fn test_save_overwrites_previous_contents_in_full() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");

        let (mut store, _) =
            RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();
        store.record.services.insert(
            "billing".to_string(),
            Service {
                description: "Billing service".to_string(),
                ..Service::default()
            },
        );
        store.save().unwrap();

        store.record.services.remove("billing");
        store.save().unwrap();

        let raw = fs::read_to_string(root.join("record.toml")).unwrap();
        assert!(!raw.contains("billing"));
    }

    #[test]
    fn test_initialize_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a").join("b").join("repo");

        RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();
        assert!(root.join("record.toml").is_file());
    }

    #[test]
    fn test_initialize_update_can_register_service() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");

        RepositoryStore::initialize(&root, "record.toml", init_changes(), false).unwrap();
        let changes = RecordChanges::for_service(
            "billing",
            ServiceChanges {
                description: Some("Billing service".to_string()),
                ..ServiceChanges::default()
            },
        );
        let (store, _) = RepositoryStore::initialize(&root, "record.toml", changes, true).unwrap();
        assert_eq!(store.record.services["billing"].description, "Billing service");
    }
}
