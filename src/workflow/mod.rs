//! Command plan builders, one per workflow.
//!
//! Builders are pure: resolved inputs in, ordered `CommandPlan` out. The one
//! repository-dependent decision (does the integration branch exist?) comes
//! in through `BranchProbe` so plans can be built and tested without running
//! a single subprocess.

pub mod branch;
pub mod pr;
pub mod release;
pub mod sync;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Branch-existence lookup used while assembling the push/sync plan.
pub trait BranchProbe {
    fn branch_exists(&self, name: &str) -> Result<bool>;
}

/// Probe backed by the real repository.
pub struct RepoProbe {
    project_dir: PathBuf,
}

impl RepoProbe {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
        }
    }
}

impl BranchProbe for RepoProbe {
    fn branch_exists(&self, name: &str) -> Result<bool> {
        crate::git::branch_exists(&self.project_dir, name)
    }
}
