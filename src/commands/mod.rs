//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `many`
//! command-line tool. Each subcommand is defined in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap` (commands without options omit it).
//! - An `execute` function that takes the global [`crate::cli::Context`] and
//!   the parsed `Args` and performs the command's logic.
//!
//! The `execute` function is the main entry point for the command and is
//! responsible for orchestrating the necessary operations, calling into the
//! `many` library to perform the core logic.

pub mod completions;
pub mod create;
pub mod current;
pub mod delete;
pub mod init;
pub mod promote;
pub mod pull;
pub mod push;
pub mod release;
pub mod view;
