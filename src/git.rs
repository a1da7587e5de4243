//! Git remote operations for the repository holding the record file.
//!
//! This uses the system git command, which automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig
//!
//! The record core never calls into this module; the `init`, `pull`, and
//! `push` commands do.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Clone the repository at `url` into `target_dir`.
pub fn clone(url: &str, target_dir: &Path) -> Result<()> {
    let args = vec![
        "clone".to_string(),
        url.to_string(),
        target_dir.display().to_string(),
    ];
    run(None, &args)
}

/// Pull changes from `remote` into the repository at `repo_dir`.
pub fn pull(repo_dir: &Path, remote: &str) -> Result<()> {
    run(Some(repo_dir), &["pull".to_string(), remote.to_string()])
}

/// Push changes from the repository at `repo_dir` to `remote`.
pub fn push(repo_dir: &Path, remote: &str) -> Result<()> {
    run(Some(repo_dir), &["push".to_string(), remote.to_string()])
}

fn run(repo_dir: Option<&Path>, args: &[String]) -> Result<()> {
    let mut command = Command::new("git");
    if let Some(dir) = repo_dir {
        command.arg("-C").arg(dir);
    }
    command.args(args);

    debug!("running git {}", args.join(" "));
    let output = command.output().map_err(|e| Error::Git {
        command: args.join(" "),
        stderr: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let stderr = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository.\n\
                For private repos, ensure you have:\n\
                - SSH key added to ssh-agent\n\
                - Git credentials configured\n\
                - Personal access token set up\n\
                Error: {}",
                stderr
            )
        } else {
            stderr.to_string()
        };

        return Err(Error::Git {
            command: args.join(" "),
            stderr,
        });
    }

    Ok(())
}
