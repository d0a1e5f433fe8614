use crate::config::Settings;
use crate::exec::{CommandRunner, Executor};
use crate::prompt::{self, Prompter};
use crate::spinner;
use crate::workflow::RepoProbe;
use crate::workflow::sync::{self, PushTo, SyncInput};
use anyhow::{Result, anyhow};

pub fn run(settings: &Settings, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> Result<()> {
    let branch_name = super::resolve_branch_name(prompter, settings)?;
    let force = prompt::resolve_yes_no(prompter, "Force push? (y/n)", false)?;
    let choice = prompt::resolve_choice(
        prompter,
        "Push to (d: develop, s: staging, a: both, m: master)",
        &["d", "s", "a", "m"],
    )?;
    let push_to =
        PushTo::from_choice(&choice).ok_or_else(|| anyhow!("Unknown push target: {}", choice))?;

    // Master has no integration branch, so the per-branch toggles only
    // apply to develop/staging targets.
    let (delete_existing, sync_with_base) = if push_to == PushTo::Master {
        (false, false)
    } else {
        (
            prompt::resolve_yes_no(prompter, "Delete the integration branch if it exists? (y/n)", false)?,
            prompt::resolve_yes_no(prompter, "Sync an existing integration branch with its base? (y/n)", false)?,
        )
    };

    let input = SyncInput {
        branch_name,
        force,
        push_to,
        delete_existing,
        sync_with_base,
    };

    let probe = RepoProbe::new(&settings.project_dir);
    let plan = spinner::with_spinner("Checking integration branches", || {
        sync::plan(&input, &probe)
    })?;

    Executor::new(runner, &settings.project_dir).run(&plan)?;
    println!("✓ Done");
    Ok(())
}
