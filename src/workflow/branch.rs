//! Plan for creating a fresh working branch off master.

use crate::config::Settings;
use crate::plan::{CommandPlan, Step};

pub struct WorkingBranchInput {
    pub branch_name: String,
    /// Optional second branch merged into the new one; blank means none.
    pub merge_with: String,
}

pub fn plan(settings: &Settings, input: &WorkingBranchInput) -> CommandPlan {
    let master = settings.master_branch.as_str();
    let merge_with = input.merge_with.trim();

    let mut plan = CommandPlan::new();
    plan.push(Step::git(&["checkout", master]));
    plan.push(Step::git(&["pull", "origin", master]));
    plan.push(Step::git(&["checkout", "-b", &input.branch_name]));
    plan.push_if(!merge_with.is_empty(), || Step::git(&["merge", merge_with]));
    plan
}
