pub mod post_release;
pub mod pull_request;
pub mod push_sync;
pub mod release_pr;
pub mod stable_release_pr;
pub mod working_branch;

use crate::config::Settings;
use crate::prompt::{self, Prompter};
use crate::{git, spinner};
use anyhow::{Context, Result};

/// Resolve the branch name from the prompt answer, falling back to the
/// currently checked-out branch when the answer is blank.
pub fn resolve_branch_name(prompter: &dyn Prompter, settings: &Settings) -> Result<String> {
    let answer = prompt::resolve_text(prompter, "Enter the branch name (blank for current)")?;
    if answer.is_empty() {
        spinner::with_spinner("Detecting current branch", || {
            git::current_branch(&settings.project_dir)
        })
        .context("Failed to get current branch")
    } else {
        Ok(answer)
    }
}
