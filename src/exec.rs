//! Sequential plan execution with fail-fast semantics.
//!
//! One command runs to completion before the next is issued; the first
//! aborting failure halts the remaining steps. No rollback is attempted for
//! repository changes already applied.

use crate::plan::{CommandPlan, FailureMode, Step};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Captured outcome of a single command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Seam between plan execution and the operating system. The process
/// implementation blocks until the child exits; at most one command is in
/// flight at a time.
pub trait CommandRunner {
    fn run(&self, step: &Step, dir: &Path) -> Result<CommandOutput>;
}

/// Runs steps as real subprocesses scoped to the project directory.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, step: &Step, dir: &Path) -> Result<CommandOutput> {
        let output = Command::new(&step.program)
            .args(&step.args)
            .current_dir(dir)
            .output()
            .with_context(|| format!("Failed to execute {}", step))?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Command failed: {command}")]
    StepFailed { command: String, code: Option<i32> },
}

/// Runs a plan in order inside the project directory, printing each step's
/// output as it completes.
pub struct Executor<'a> {
    runner: &'a dyn CommandRunner,
    project_dir: &'a Path,
}

impl<'a> Executor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, project_dir: &'a Path) -> Self {
        Self {
            runner,
            project_dir,
        }
    }

    /// Execute every step in order. Returns at the first failing step whose
    /// mode is `Abort`; best-effort steps print their fallback message and
    /// the plan continues.
    pub fn run(&self, plan: &CommandPlan) -> Result<()> {
        for step in plan.steps() {
            println!("{} {}", style("Executing:").bold(), step);
            let output = self.runner.run(step, self.project_dir)?;
            debug!(command = %step, code = ?output.code, "step finished");

            if output.success {
                if !output.stdout.is_empty() {
                    print!("{}", output.stdout);
                }
                continue;
            }

            match &step.failure_mode {
                FailureMode::BestEffort { message } => {
                    println!("{}", message);
                }
                FailureMode::Abort => {
                    eprintln!("{} {}", style("Command failed:").red().bold(), step);
                    if !output.stderr.is_empty() {
                        eprint!("{}", output.stderr);
                    }
                    return Err(ExecError::StepFailed {
                        command: step.to_string(),
                        code: output.code,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
