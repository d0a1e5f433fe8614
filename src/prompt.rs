//! Interactive input resolution.
//!
//! The `Prompter` trait isolates terminal I/O so the re-prompt loops can be
//! exercised with scripted answers. Validation is a pure predicate; the loop
//! just keeps asking until it passes.

use anyhow::{Context, Result};
use dialoguer::Input;

/// One free-text question to the user. Never validates; the resolvers own
/// the retry loops.
pub trait Prompter {
    fn ask(&self, question: &str) -> Result<String>;
}

/// Reads answers from the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, question: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read answer from terminal")
    }
}

/// Normalized single-letter choice, or `None` when the answer is not in the
/// allowed set.
fn parse_choice(answer: &str, allowed: &[&str]) -> Option<String> {
    let normalized = answer.trim().to_lowercase();
    allowed.contains(&normalized.as_str()).then_some(normalized)
}

fn parse_yes_no(answer: &str, allow_empty_as_no: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        "" if allow_empty_as_no => Some(false),
        _ => None,
    }
}

/// Ask until the lower-cased answer is a member of `allowed`.
pub fn resolve_choice(prompter: &dyn Prompter, question: &str, allowed: &[&str]) -> Result<String> {
    loop {
        let answer = prompter.ask(question)?;
        if let Some(choice) = parse_choice(&answer, allowed) {
            return Ok(choice);
        }
    }
}

/// Ask until the answer is y or n. An invalid keystroke re-prompts instead
/// of being silently treated as "no".
pub fn resolve_yes_no(
    prompter: &dyn Prompter,
    question: &str,
    allow_empty_as_no: bool,
) -> Result<bool> {
    loop {
        let answer = prompter.ask(question)?;
        if let Some(value) = parse_yes_no(&answer, allow_empty_as_no) {
            return Ok(value);
        }
    }
}

/// Free-text answer, trimmed.
pub fn resolve_text(prompter: &dyn Prompter, question: &str) -> Result<String> {
    Ok(prompter.ask(question)?.trim().to_string())
}

/// Free-text answer that may not be blank; re-prompts otherwise.
pub fn resolve_required_text(prompter: &dyn Prompter, question: &str) -> Result<String> {
    loop {
        let answer = resolve_text(prompter, question)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Prompter that replays a fixed script of answers.
    pub struct ScriptedPrompter {
        answers: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            let mut script: Vec<String> = answers.iter().map(|a| a.to_string()).collect();
            script.reverse();
            Self {
                answers: RefCell::new(script),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&self, _question: &str) -> Result<String> {
            Ok(self
                .answers
                .borrow_mut()
                .pop()
                .expect("scripted prompter ran out of answers"))
        }
    }
}
