//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `many` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! The covered failure scenarios are:
//!
//! - A missing repository directory or record file.
//! - Initializing a repository that already holds a record.
//! - A record file that exists but cannot be decoded.
//! - Registering a service that is already registered.
//! - Referring to a service that is not registered.
//! - Git command execution failures.
//! - Features that are deliberately not implemented.
//! - Serialization failures when writing the record.
//! - I/O errors.
//!
//! Every core operation returns a `Result` rather than aborting; the command
//! layer is the only place an `Error` is converted into a user-visible
//! failure with a non-zero exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for many operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository directory or its record file does not exist.
    ///
    /// Includes an optional hint about how to create the record.
    #[error("Record not found: {}{}", path.display(), hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    NotFound {
        path: PathBuf,
        /// Optional hint for how to create the missing record
        hint: Option<String>,
    },

    /// A record file already exists where `init` was asked to create one.
    #[error("Repository already initialised: {}\n  hint: Use --update to update its details", path.display())]
    AlreadyExists { path: PathBuf },

    /// The record file exists but is not a well-formed record.
    #[error("Record decode error in {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// A service was registered twice without update permission.
    #[error("Service '{name}' is already registered\n  hint: Use --update to update its details")]
    ServiceExists { name: String },

    /// A command referred to a service that is not in the record.
    ///
    /// May carry a did-you-mean suggestion when a registered name is close.
    #[error("Unknown service '{name}'{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    UnknownService {
        name: String,
        /// Optional suggestion for a similarly named registered service
        hint: Option<String>,
    },

    /// An error occurred while executing a Git command.
    #[error("Git command failed: git {command} - {stderr}")]
    Git { command: String, stderr: String },

    /// An error for a feature that is deliberately not implemented.
    #[error("Feature not implemented: {feature}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Unsupported {
        feature: String,
        /// Optional hint about the feature's status
        hint: Option<String>,
    },

    /// An error occurred while serializing the record to TOML.
    #[error("Record serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
