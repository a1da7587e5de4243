//! # Record Schema and Merge Logic
//!
//! This module defines the data structures that make up a `Many.toml` record
//! file, together with the reconciliation logic that combines a
//! caller-supplied partial change set with previously persisted state.
//!
//! ## Key Components
//!
//! - **`VersionEntry`**: One named release (name, description, release date,
//!   author). Identity is the name: two entries with the same name are the
//!   same version, and a later write replaces the earlier one.
//!
//! - **`VersionSet`**: An ordered collection of `VersionEntry` values, kept
//!   strictly ascending by name under plain string comparison. Owns the
//!   insert-or-replace algorithm.
//!
//! - **`Service`**: Metadata for one microservice plus its candidate version
//!   and its history of released versions. Identified by its key in the
//!   owning record's `services` map.
//!
//! - **`ProjectRecord`**: The aggregate root: repository-wide metadata, the
//!   overall release history, and the map of registered services.
//!
//! ## Change Sets
//!
//! Commands never mutate a record field-by-field. They build a
//! `RecordChanges` (or nested `ServiceChanges`) containing only the fields
//! the caller supplied, and the record merges it in via [`ProjectRecord::apply`].
//! A `None` field means "no change requested"; `Some` always wins, so setting
//! a field to the empty string is expressible and distinct from omitting it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named release of a service or of the overall project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// The version name, e.g. "1.2.0". Identity within a [`VersionSet`].
    pub name: String,
    /// Free-form description of the release.
    #[serde(default)]
    pub description: String,
    /// When the version was released.
    #[serde(rename = "date")]
    pub released_at: DateTime<Utc>,
    /// Who released it.
    #[serde(default)]
    pub author: String,
}

impl VersionEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        released_at: DateTime<Utc>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            released_at,
            author: author.into(),
        }
    }
}

/// An ordered collection of [`VersionEntry`] values, unique by name.
///
/// Invariant: the backing vector is strictly ascending by `name` under
/// lexicographic comparison. This is a naming order, not a semantic-version
/// order: `"10.0.0"` sorts before `"2.0.0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionSet(Vec<VersionEntry>);

impl VersionSet {
    /// Insert a version, replacing any existing entry with the same name.
    ///
    /// Re-inserting a byte-identical entry is a no-op. An out-of-order
    /// backing vector is tolerated at the cost of a full re-sort before the
    /// binary search.
    pub fn add(&mut self, entry: VersionEntry) {
        if !self.is_sorted() {
            self.0.sort_by(|a, b| a.name.cmp(&b.name));
            self.0.dedup_by(|a, b| a.name == b.name);
        }
        match self
            .0
            .binary_search_by(|e| e.name.as_str().cmp(entry.name.as_str()))
        {
            Ok(pos) => {
                if self.0[pos] != entry {
                    self.0[pos] = entry;
                }
            }
            Err(pos) => self.0.insert(pos, entry),
        }
    }

    /// Look up a version by name.
    pub fn get(&self, name: &str) -> Option<&VersionEntry> {
        self.0
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|pos| &self.0[pos])
    }

    /// The last entry in name order, i.e. the greatest name.
    pub fn latest(&self) -> Option<&VersionEntry> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0].name < w[1].name)
    }
}

impl<'a> IntoIterator for &'a VersionSet {
    type Item = &'a VersionEntry;
    type IntoIter = std::slice::Iter<'a, VersionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Decoded entries are folded through `add` so that a hand-edited file cannot
// smuggle in duplicate names or an unsorted sequence.
impl<'de> Deserialize<'de> for VersionSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<VersionEntry>::deserialize(deserializer)?;
        let mut set = VersionSet::default();
        for entry in entries {
            set.add(entry);
        }
        Ok(set)
    }
}

/// Metadata and version state for one registered microservice.
///
/// The service's name is the key under which it is stored in
/// [`ProjectRecord::services`]; it is not duplicated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Description of the microservice.
    #[serde(default)]
    pub description: String,
    /// URL of the service's Git repository.
    #[serde(default)]
    pub git: String,
    /// URL of the service's Docker repository.
    #[serde(default)]
    pub docker: String,
    /// The proposed, not-yet-released version under consideration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<VersionEntry>,
    /// Released versions.
    #[serde(default, skip_serializing_if = "VersionSet::is_empty")]
    pub history: VersionSet,
}

impl Service {
    /// Merge a partial change set into this service.
    ///
    /// Each `Some` scalar overwrites its field, each `None` leaves the field
    /// untouched, and every entry in `changes.history` goes through
    /// [`VersionSet::add`].
    pub fn apply(&mut self, changes: ServiceChanges) {
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(git) = changes.git {
            self.git = git;
        }
        if let Some(docker) = changes.docker {
            self.docker = docker;
        }
        if let Some(candidate) = changes.candidate {
            self.candidate = Some(candidate);
        }
        for entry in changes.history {
            self.history.add(entry);
        }
    }
}

/// A partial update for one service: only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ServiceChanges {
    pub description: Option<String>,
    pub git: Option<String>,
    pub docker: Option<String>,
    pub candidate: Option<VersionEntry>,
    pub history: Vec<VersionEntry>,
}

impl From<ServiceChanges> for Service {
    fn from(changes: ServiceChanges) -> Self {
        let mut service = Service::default();
        service.apply(changes);
        service
    }
}

/// The aggregate root: one record file's worth of state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Name of the repository the record belongs to.
    #[serde(default)]
    pub name: String,
    /// URL of the Git remote.
    #[serde(default)]
    pub remote_url: String,
    /// Name of the Git remote.
    #[serde(default)]
    pub remote_name: String,
    /// The overall project's release history, independent of any one
    /// service's history.
    #[serde(default, skip_serializing_if = "VersionSet::is_empty")]
    pub history: VersionSet,
    /// Registered services, keyed by unique service name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub services: BTreeMap<String, Service>,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        remote_url: impl Into<String>,
        remote_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            remote_url: remote_url.into(),
            remote_name: remote_name.into(),
            ..Self::default()
        }
    }

    /// Merge a partial change set into this record.
    ///
    /// Scalar fields follow the same `Some`-wins rule as
    /// [`Service::apply`]; history entries go through [`VersionSet::add`].
    /// A service already in the record is merged field-wise; a change set may
    /// also register a brand new service, which is built from its changes
    /// alone.
    pub fn apply(&mut self, changes: RecordChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(remote_url) = changes.remote_url {
            self.remote_url = remote_url;
        }
        if let Some(remote_name) = changes.remote_name {
            self.remote_name = remote_name;
        }
        for entry in changes.history {
            self.history.add(entry);
        }
        for (name, service_changes) in changes.services {
            match self.services.get_mut(&name) {
                Some(service) => service.apply(service_changes),
                None => {
                    self.services.insert(name, Service::from(service_changes));
                }
            }
        }
    }
}

/// A partial update for the whole record: only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct RecordChanges {
    pub name: Option<String>,
    pub remote_url: Option<String>,
    pub remote_name: Option<String>,
    pub history: Vec<VersionEntry>,
    pub services: BTreeMap<String, ServiceChanges>,
}

impl RecordChanges {
    /// A change set touching a single service and nothing else.
    pub fn for_service(name: impl Into<String>, changes: ServiceChanges) -> Self {
        let mut services = BTreeMap::new();
        services.insert(name.into(), changes);
        Self {
            services,
            ..Self::default()
        }
    }
}
