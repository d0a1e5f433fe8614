//! Plan for pushing a working branch and syncing its integration branches.

use super::BranchProbe;
use crate::naming::MergeTarget;
use crate::plan::{CommandPlan, Step};
use anyhow::Result;
use tracing::debug;

/// Where the branch gets pushed beyond its own remote ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushTo {
    Develop,
    Staging,
    Both,
    Master,
}

impl PushTo {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "d" => Some(Self::Develop),
            "s" => Some(Self::Staging),
            "a" => Some(Self::Both),
            "m" => Some(Self::Master),
            _ => None,
        }
    }

    fn includes(self, target: MergeTarget) -> bool {
        matches!(
            (self, target),
            (Self::Develop | Self::Both, MergeTarget::Develop)
                | (Self::Staging | Self::Both, MergeTarget::Staging)
        )
    }
}

pub struct SyncInput {
    pub branch_name: String,
    pub force: bool,
    pub push_to: PushTo,
    /// Recreate an existing integration branch from its base.
    pub delete_existing: bool,
    /// When keeping an existing integration branch, merge its base in first.
    pub sync_with_base: bool,
}

pub fn plan(input: &SyncInput, probe: &dyn BranchProbe) -> Result<CommandPlan> {
    let branch = input.branch_name.as_str();
    let mut plan = CommandPlan::new();
    plan.push(Step::git(&["checkout", branch]));
    plan.push(push_step(branch, input.force));

    if input.push_to == PushTo::Master {
        // No integration branch for master; bring it into the working
        // branch and re-push.
        plan.push(Step::git(&["pull", "origin", "master", "--no-edit"]));
        plan.push(push_step(branch, input.force));
        return Ok(plan);
    }

    for target in [MergeTarget::Develop, MergeTarget::Staging] {
        if input.push_to.includes(target) {
            add_integration_steps(&mut plan, input, target, probe)?;
        }
    }

    plan.push(Step::git(&["checkout", branch]));
    Ok(plan)
}

fn push_step(branch: &str, force: bool) -> Step {
    if force {
        Step::git(&["push", "origin", branch, "--force-with-lease"])
    } else {
        Step::git(&["push", "origin", branch])
    }
}

fn add_integration_steps(
    plan: &mut CommandPlan,
    input: &SyncInput,
    target: MergeTarget,
    probe: &dyn BranchProbe,
) -> Result<()> {
    let base = target.base_branch();
    let branch = input.branch_name.as_str();
    let integration = format!("{}/{}", target.prefix(), branch);

    plan.push(Step::git(&["checkout", base]));
    plan.push(Step::git(&["pull", "origin", base]));

    let exists = probe.branch_exists(&integration)?;
    debug!(branch = %integration, exists, "integration branch probe");

    if exists {
        if input.delete_existing {
            // The probe result can go stale between planning and execution;
            // a failed delete degrades to a message instead of halting.
            plan.push(
                Step::git(&["branch", "-D", &integration])
                    .best_effort("Branch not found, nothing to delete"),
            );
            plan.push(Step::git(&["checkout", "-b", &integration]));
        } else {
            plan.push(Step::git(&["checkout", &integration]));
            plan.push_if(input.sync_with_base, || {
                Step::git(&["merge", base, "--no-edit"])
            });
        }
    } else {
        plan.push(Step::git(&["checkout", "-b", &integration]));
    }

    plan.push(Step::git(&["merge", branch, "--no-edit"]));
    plan.push(push_step(&integration, input.force));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::FailureMode;
    use std::collections::HashSet;

    struct MockProbe {
        existing: HashSet<String>,
    }

    impl MockProbe {
        fn new(existing: &[&str]) -> Self {
            Self {
                existing: existing.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl BranchProbe for MockProbe {
        fn branch_exists(&self, name: &str) -> Result<bool> {
            Ok(self.existing.contains(name))
        }
    }

    fn input(push_to: PushTo) -> SyncInput {
        SyncInput {
            branch_name: "SWWB-9-x".to_string(),
            force: false,
            push_to,
            delete_existing: false,
            sync_with_base: false,
        }
    }

    fn rendered(plan: &CommandPlan) -> Vec<String> {
        plan.steps().iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fresh_integration_branch_is_created_from_base() {
        let probe = MockProbe::new(&[]);
        let plan = plan(&input(PushTo::Develop), &probe).unwrap();
        assert_eq!(
            rendered(&plan),
            [
                "git checkout SWWB-9-x",
                "git push origin SWWB-9-x",
                "git checkout develop",
                "git pull origin develop",
                "git checkout -b dev/SWWB-9-x",
                "git merge SWWB-9-x --no-edit",
                "git push origin dev/SWWB-9-x",
                "git checkout SWWB-9-x"
            ]
        );
    }

    #[test]
    fn existing_branch_with_delete_is_recreated_best_effort() {
        let probe = MockProbe::new(&["dev/SWWB-9-x"]);
        let mut sync = input(PushTo::Develop);
        sync.delete_existing = true;
        let plan = plan(&sync, &probe).unwrap();
        let steps = rendered(&plan);
        assert_eq!(steps[4], "git branch -D dev/SWWB-9-x");
        assert_eq!(steps[5], "git checkout -b dev/SWWB-9-x");
        assert!(matches!(
            plan.steps()[4].failure_mode,
            FailureMode::BestEffort { .. }
        ));
        // Only the delete step tolerates its own failure
        let best_effort_count = plan
            .steps()
            .iter()
            .filter(|s| matches!(s.failure_mode, FailureMode::BestEffort { .. }))
            .count();
        assert_eq!(best_effort_count, 1);
    }

    #[test]
    fn existing_branch_without_delete_is_checked_out_and_not_synced() {
        let probe = MockProbe::new(&["dev/SWWB-9-x"]);
        let plan = plan(&input(PushTo::Develop), &probe).unwrap();
        let steps = rendered(&plan);
        assert_eq!(steps[4], "git checkout dev/SWWB-9-x");
        assert_eq!(steps[5], "git merge SWWB-9-x --no-edit");
    }

    #[test]
    fn sync_toggle_merges_base_into_existing_branch() {
        let probe = MockProbe::new(&["stg/SWWB-9-x"]);
        let mut sync = input(PushTo::Staging);
        sync.sync_with_base = true;
        let plan = plan(&sync, &probe).unwrap();
        let steps = rendered(&plan);
        assert_eq!(steps[4], "git checkout stg/SWWB-9-x");
        assert_eq!(steps[5], "git merge staging --no-edit");
        assert_eq!(steps[6], "git merge SWWB-9-x --no-edit");
    }

    #[test]
    fn both_targets_are_processed_develop_first() {
        let probe = MockProbe::new(&[]);
        let plan = plan(&input(PushTo::Both), &probe).unwrap();
        let steps = rendered(&plan);
        let dev_pos = steps
            .iter()
            .position(|s| s == "git checkout -b dev/SWWB-9-x")
            .unwrap();
        let stg_pos = steps
            .iter()
            .position(|s| s == "git checkout -b stg/SWWB-9-x")
            .unwrap();
        assert!(dev_pos < stg_pos);
        assert_eq!(steps.last().unwrap(), "git checkout SWWB-9-x");
    }

    #[test]
    fn master_target_pulls_and_repushes_without_integration_branch() {
        let probe = MockProbe::new(&[]);
        let mut sync = input(PushTo::Master);
        sync.force = true;
        let plan = plan(&sync, &probe).unwrap();
        assert_eq!(
            rendered(&plan),
            [
                "git checkout SWWB-9-x",
                "git push origin SWWB-9-x --force-with-lease",
                "git pull origin master --no-edit",
                "git push origin SWWB-9-x --force-with-lease"
            ]
        );
    }

    #[test]
    fn force_flag_propagates_to_integration_push() {
        let probe = MockProbe::new(&[]);
        let mut sync = input(PushTo::Develop);
        sync.force = true;
        let plan = plan(&sync, &probe).unwrap();
        let steps = rendered(&plan);
        assert!(steps.contains(&"git push origin dev/SWWB-9-x --force-with-lease".to_string()));
    }
}
