//! Command plans: the ordered list of external commands one workflow run
//! will execute.
//!
//! Steps are argv vectors (program + discrete arguments) rather than shell
//! strings, so branch names and PR titles are never reinterpreted by a shell.

use std::fmt;

/// What a step failure means for the rest of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMode {
    /// Non-zero exit halts the whole plan (the default).
    Abort,
    /// Non-zero exit prints the message and execution continues. Used only
    /// for the delete-if-exists step, which races against the branch list.
    BestEffort { message: String },
}

/// One external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
    pub failure_mode: FailureMode,
}

impl Step {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            failure_mode: FailureMode::Abort,
        }
    }

    pub fn git(args: &[&str]) -> Self {
        Self::new("git", args)
    }

    pub fn best_effort(mut self, message: &str) -> Self {
        self.failure_mode = FailureMode::BestEffort {
            message: message.to_string(),
        };
        self
    }
}

impl fmt::Display for Step {
    /// Shell-style rendering for the `Executing:` announcement only; the
    /// executor never passes this string to a shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", display_quote(arg))?;
        }
        Ok(())
    }
}

fn display_quote(arg: &str) -> String {
    let needs_quoting = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '$' | '&' | '|' | ';' | '*'));
    if needs_quoting {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

/// Append-only ordered command list. Steps are never reordered or removed
/// once added; execution treats the plan as immutable.
#[derive(Debug, Default)]
pub struct CommandPlan {
    steps: Vec<Step>,
}

impl CommandPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Conditional append; keeps workflow builders declarative instead of
    /// scattering `if` statements around the list.
    pub fn push_if(&mut self, condition: bool, step: impl FnOnce() -> Step) {
        if condition {
            self.steps.push(step());
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
