//! Implementation of the `release` subcommand.
//!
//! Creating a new overall version means picking the next version name from
//! the category to increment, and the increment rules for patch, minor, and
//! major have deliberately never been defined for this tool; version names
//! are plain strings with no arithmetic. The command therefore reports the
//! feature as not implemented rather than guessing.

use anyhow::Result;
use clap::{Args, ValueEnum};

use many::error::Error;

use crate::cli::Context;

/// Category of version increment for a release
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Category {
    Patch,
    Minor,
    Major,
}

impl Category {
    fn as_str(self) -> &'static str {
        match self {
            Category::Patch => "patch",
            Category::Minor => "minor",
            Category::Major => "major",
        }
    }
}

/// Create a new overall version from the candidates
#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Version to increment for this release
    #[arg(value_enum)]
    pub category: Category,
}

/// Execute the `release` command.
pub fn execute(_context: &Context, args: ReleaseArgs) -> Result<()> {
    Err(Error::Unsupported {
        feature: format!("release ({} increment)", args.category.as_str()),
        hint: Some(
            "Version names carry no increment rules; releases cannot be derived yet".to_string(),
        ),
    }
    .into())
}
