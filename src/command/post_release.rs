use crate::config::Settings;
use crate::exec::{CommandRunner, Executor};
use crate::prompt::{self, Prompter};
use crate::workflow::release::{self, PromoteInput};
use crate::{git, spinner};
use anyhow::{Result, bail};
use tracing::debug;

pub fn run(settings: &Settings, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> Result<()> {
    let dir = &settings.project_dir;
    let original_branch =
        spinner::with_spinner("Detecting current branch", || git::current_branch(dir))?;

    // Two independent probes: tracked modifications and untracked files.
    let dirty = spinner::with_spinner("Checking working tree", || {
        Ok(git::has_tracked_changes(dir)? || git::has_untracked_files(dir)?)
    })?;
    debug!(dirty, branch = %original_branch, "pre-promote state");

    promote(settings, prompter, runner, &original_branch, dirty)
}

/// Dirty state must be handled before a single command is queued: either the
/// user agrees to stash or the whole workflow aborts.
fn promote(
    settings: &Settings,
    prompter: &dyn Prompter,
    runner: &dyn CommandRunner,
    original_branch: &str,
    dirty: bool,
) -> Result<()> {
    let stash_first = if dirty {
        let stash = prompt::resolve_yes_no(
            prompter,
            "Working tree has local changes. Stash them before promoting? (y/n)",
            false,
        )?;
        if !stash {
            bail!("Aborted: local changes present and not stashed");
        }
        true
    } else {
        false
    };

    let plan = release::promote_plan(
        settings,
        &PromoteInput {
            original_branch: original_branch.to_string(),
            stash_first,
        },
    );

    Executor::new(runner, &settings.project_dir).run(&plan)?;
    println!("✓ Done");
    Ok(())
}
