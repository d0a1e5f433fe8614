//! Plans for the post-release promote chain and the release PRs.

use crate::config::Settings;
use crate::plan::{CommandPlan, Step};

pub struct PromoteInput {
    /// Branch checked out when the workflow started; restored at the end.
    pub original_branch: String,
    /// Stage everything and stash before promoting, popping afterwards.
    pub stash_first: bool,
}

/// Promote release through master, staging, and develop, refresh stable,
/// and return to the original branch.
///
/// The stash pop is the final step of the plan. A promote step failing
/// mid-plan leaves the stash in place for manual recovery; popping over a
/// half-promoted tree would be worse than asking the user to clean up.
pub fn promote_plan(settings: &Settings, input: &PromoteInput) -> CommandPlan {
    let master = settings.master_branch.as_str();
    let develop = settings.develop_branch.as_str();
    let staging = settings.staging_branch.as_str();
    let release = settings.release_branch.as_str();
    let stable = settings.stable_branch.as_str();

    let mut plan = CommandPlan::new();
    plan.push_if(input.stash_first, || Step::git(&["add", "-A"]));
    plan.push_if(input.stash_first, || Step::git(&["stash", "push"]));

    plan.push(Step::git(&["checkout", release]));
    plan.push(Step::git(&["pull", "origin", release]));
    for (branch, from) in [(master, release), (staging, master), (develop, staging)] {
        plan.push(Step::git(&["checkout", branch]));
        plan.push(Step::git(&["pull", "origin", branch]));
        plan.push(Step::git(&["merge", from, "--no-edit"]));
        plan.push(Step::git(&["push", "origin", branch]));
    }
    plan.push(Step::git(&["checkout", stable]));
    plan.push(Step::git(&["pull", "origin", stable]));
    plan.push(Step::git(&["checkout", &input.original_branch]));

    plan.push_if(input.stash_first, || Step::git(&["stash", "pop"]));
    plan
}

/// A release PR proposes merging the release branch into master.
pub fn release_pr_plan(settings: &Settings, title: &str, body: &str) -> CommandPlan {
    let mut plan = CommandPlan::new();
    plan.push(Step::new(
        "gh",
        &[
            "pr",
            "create",
            "--title",
            title,
            "--body",
            body,
            "--base",
            &settings.master_branch,
            "--head",
            &settings.release_branch,
        ],
    ));
    plan
}

/// A stable release PR pushes the dated stable branch first, then proposes
/// merging it into the stable base.
pub fn stable_release_pr_plan(
    settings: &Settings,
    branch_name: &str,
    title: &str,
    body: &str,
) -> CommandPlan {
    let mut plan = CommandPlan::new();
    plan.push(Step::git(&["push", "origin", branch_name]));
    plan.push(Step::new(
        "gh",
        &[
            "pr",
            "create",
            "--title",
            title,
            "--body",
            body,
            "--base",
            &settings.stable_branch,
            "--head",
            branch_name,
        ],
    ));
    plan
}
