use crate::config::Settings;
use crate::exec::{CommandRunner, Executor};
use crate::naming;
use crate::prompt::{self, Prompter};
use crate::workflow::release;
use anyhow::{Result, bail};
use chrono::Local;

pub fn run(settings: &Settings, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> Result<()> {
    let today = Local::now().date_naive();

    let typed =
        prompt::resolve_text(prompter, "Enter the stable branch name (blank to generate one)")?;
    let branch_name = if typed.is_empty() {
        let generated = naming::stable_branch_name(today);
        let confirmed = prompt::resolve_yes_no(
            prompter,
            &format!("Use generated branch name '{}'? (y/n)", generated),
            false,
        )?;
        if !confirmed {
            bail!("Aborted: generated branch name not confirmed");
        }
        generated
    } else {
        typed
    };

    let release_id = prompt::resolve_required_text(prompter, "Enter the release id")?;
    let explicit_title =
        prompt::resolve_text(prompter, "Enter the PR title (blank to generate one)")?;
    let title = if explicit_title.is_empty() {
        naming::release_title("Stable", today, &release_id)
    } else {
        explicit_title
    };
    let body = settings.release_tracker_link(&release_id);

    let plan = release::stable_release_pr_plan(settings, &branch_name, &title, &body);
    Executor::new(runner, &settings.project_dir).run(&plan)?;
    println!("✓ Done");
    Ok(())
}
