use crate::config::Settings;
use crate::exec::{CommandRunner, Executor};
use crate::prompt::{self, Prompter};
use crate::workflow::branch::{self, WorkingBranchInput};
use anyhow::Result;

pub fn run(settings: &Settings, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> Result<()> {
    let branch_name = super::resolve_branch_name(prompter, settings)?;
    let merge_with = prompt::resolve_text(prompter, "Enter the branch to merge with (can be blank)")?;

    let plan = branch::plan(
        settings,
        &WorkingBranchInput {
            branch_name,
            merge_with,
        },
    );

    Executor::new(runner, &settings.project_dir).run(&plan)?;
    println!("✓ Done");
    Ok(())
}
