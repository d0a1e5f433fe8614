use crate::config::Settings;
use crate::exec::{CommandRunner, Executor};
use crate::naming::{self, MergeTarget, Naming};
use crate::prompt::{self, Prompter};
use crate::workflow::pr::{self, PrInput};
use crate::{git, spinner};
use anyhow::{Result, anyhow};
use tracing::debug;

pub fn run(settings: &Settings, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> Result<()> {
    let original_branch = super::resolve_branch_name(prompter, settings)?;
    let choice = prompt::resolve_choice(
        prompter,
        "Merge to (d: develop, s: staging, m: master)",
        &["d", "s", "m"],
    )?;
    let target = MergeTarget::from_choice(&choice)
        .ok_or_else(|| anyhow!("Unknown merge target choice: {}", choice))?;
    let explicit_title = prompt::resolve_text(
        prompter,
        "Enter the PR title (blank to use the first commit message)",
    )?;
    let draft = prompt::resolve_yes_no(prompter, "Create a draft PR? (y/n)", false)?;
    let dry_run = prompt::resolve_yes_no(prompter, "Dry run? (y/n)", false)?;

    let qualified_branch = naming::qualified_branch_name(&original_branch, target);
    let base_branch = target.base_branch().to_string();

    let naming = Naming::new(settings)?;
    let body = naming
        .extract_ticket(&qualified_branch)
        .map(|ticket| ticket.link)
        .unwrap_or_default();

    // Explicit title wins; otherwise take the earliest non-merge commit
    // subject in base..branch. Either way the ticket-prefix pass runs last.
    let mut title = explicit_title;
    if title.is_empty() {
        title = spinner::with_spinner("Reading first commit message", || {
            git::first_commit_subject(&settings.project_dir, &base_branch, &qualified_branch)
        })?;
        debug!(title = %title, "derived PR title from commit range");
    }
    let title = naming.ensure_title_has_ticket_prefix(&title, &qualified_branch);

    let plan = pr::plan(&PrInput {
        original_branch,
        qualified_branch,
        base_branch,
        title,
        body,
        draft,
        dry_run,
    });

    Executor::new(runner, &settings.project_dir).run(&plan)?;
    println!("✓ Done");
    Ok(())
}
