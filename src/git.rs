//! Read-only repository probes.
//!
//! These queries inform input resolution and plan building; they are not
//! plan steps and never mutate the repository.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::Command;
use tracing::debug;

fn git_output(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(args = ?args, stderr = %stderr, "git probe failed");
        return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Name of the currently checked-out branch.
pub fn current_branch(dir: &Path) -> Result<String> {
    let out = git_output(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(out.trim().to_string())
}

/// Whether a local branch with this exact name exists.
pub fn branch_exists(dir: &Path, name: &str) -> Result<bool> {
    let out = git_output(dir, &["branch", "--list", name])?;
    Ok(!out.trim().is_empty())
}

/// Whether tracked files have uncommitted modifications.
pub fn has_tracked_changes(dir: &Path) -> Result<bool> {
    let out = git_output(dir, &["status", "--porcelain", "-uno"])?;
    Ok(!out.trim().is_empty())
}

/// Whether untracked (non-ignored) files are present.
pub fn has_untracked_files(dir: &Path) -> Result<bool> {
    let out = git_output(dir, &["ls-files", "--others", "--exclude-standard"])?;
    Ok(!out.trim().is_empty())
}

/// Subject line of the earliest non-merge commit in `base..branch`, or an
/// empty string when the range has no commits.
pub fn first_commit_subject(dir: &Path, base: &str, branch: &str) -> Result<String> {
    let range = format!("{}..{}", base, branch);
    let out = git_output(
        dir,
        &["log", "--no-merges", "--reverse", "--format=%s", &range],
    )?;
    Ok(out.lines().next().unwrap_or_default().trim().to_string())
}
