use crate::config::Settings;
use crate::exec::{CommandRunner, Executor};
use crate::naming;
use crate::prompt::{self, Prompter};
use crate::workflow::release;
use anyhow::Result;
use chrono::Local;

pub fn run(settings: &Settings, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> Result<()> {
    let release_id = prompt::resolve_required_text(prompter, "Enter the release id")?;
    let explicit_title =
        prompt::resolve_text(prompter, "Enter the PR title (blank to generate one)")?;

    let title = if explicit_title.is_empty() {
        naming::release_title("Production", Local::now().date_naive(), &release_id)
    } else {
        explicit_title
    };
    let body = settings.release_tracker_link(&release_id);

    let plan = release::release_pr_plan(settings, &title, &body);
    Executor::new(runner, &settings.project_dir).run(&plan)?;
    println!("✓ Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::MockRunner;
    use crate::prompt::testing::ScriptedPrompter;

    #[test]
    fn blank_title_is_synthesized_from_release_id() {
        let settings = Settings::new(None);
        let prompter = ScriptedPrompter::new(&["124", ""]);
        let runner = MockRunner::new(&[]);
        run(&settings, &prompter, &runner).unwrap();
        let executed = runner.executed();
        assert_eq!(executed.len(), 1);
        assert!(executed[0].contains("'Release Production - "));
        assert!(executed[0].contains("v124"));
        assert!(executed[0].contains("--base master --head release"));
    }

    #[test]
    fn explicit_title_is_used_verbatim() {
        let settings = Settings::new(None);
        let prompter = ScriptedPrompter::new(&["124", "Hotfix rollup"]);
        let runner = MockRunner::new(&[]);
        run(&settings, &prompter, &runner).unwrap();
        assert!(runner.executed()[0].contains("'Hotfix rollup'"));
    }
}
