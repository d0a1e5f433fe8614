//! Plan for opening a pull request from a qualified branch.

use crate::plan::{CommandPlan, Step};

pub struct PrInput {
    /// Branch name as the user typed it, before prefix qualification. The
    /// final checkout restores this working context.
    pub original_branch: String,
    pub qualified_branch: String,
    pub base_branch: String,
    pub title: String,
    /// Ticket link markdown, or empty when the branch carries no ticket.
    pub body: String,
    pub draft: bool,
    pub dry_run: bool,
}

pub fn plan(input: &PrInput) -> CommandPlan {
    let mut plan = CommandPlan::new();
    plan.push(Step::git(&["checkout", &input.qualified_branch]));
    plan.push(Step::git(&["push", "origin", &input.qualified_branch]));

    let mut create = vec![
        "pr",
        "create",
        "--title",
        &input.title,
        "--body",
        &input.body,
        "--label",
        &input.base_branch,
        "--base",
        &input.base_branch,
        "--head",
        &input.qualified_branch,
    ];
    if input.draft {
        create.push("--draft");
    }
    if input.dry_run {
        create.push("--dry-run");
    }
    plan.push(Step::new("gh", &create));

    plan.push(Step::git(&["checkout", &input.original_branch]));
    plan
}
