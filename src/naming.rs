//! Branch naming and ticket conventions.
//!
//! Maps merge destinations to branch prefixes and base branches, and extracts
//! issue-tracker ticket tokens from branch names for PR titles and bodies.

use crate::config::Settings;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;

/// Where a branch is meant to be merged. The mapping to (prefix, base branch)
/// is total and fixed; master work happens on unprefixed branch names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTarget {
    Develop,
    Staging,
    Master,
}

impl MergeTarget {
    /// Single-letter choice as answered at the prompt. Callers are expected
    /// to have validated the choice already; anything else is `None`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "d" => Some(Self::Develop),
            "s" => Some(Self::Staging),
            "m" => Some(Self::Master),
            _ => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Develop => "dev",
            Self::Staging => "stg",
            Self::Master => "",
        }
    }

    pub fn base_branch(self) -> &'static str {
        match self {
            Self::Develop => "develop",
            Self::Staging => "staging",
            Self::Master => "master",
        }
    }
}

/// Prepend the target's prefix (with a path separator) unless it is empty.
/// Plan builders qualify a name exactly once; this function is not idempotent
/// for prefixed targets.
pub fn qualified_branch_name(raw: &str, target: MergeTarget) -> String {
    let raw = raw.trim();
    if target.prefix().is_empty() {
        raw.to_string()
    } else {
        format!("{}/{}", target.prefix(), raw)
    }
}

/// A ticket reference found in a branch name, with a markdown link for PR
/// bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRef {
    pub id: String,
    pub link: String,
}

/// Ticket-convention matcher compiled from the fixed prefix set.
pub struct Naming {
    ticket_re: Regex,
    prefix_re: Regex,
    link_base: String,
}

impl Naming {
    pub fn new(settings: &Settings) -> Result<Self> {
        let alternation = settings.ticket_prefixes.join("|");
        let ticket_re = Regex::new(&format!(r"({})-\d+", alternation))
            .context("Invalid ticket prefix set")?;
        let prefix_re =
            Regex::new(&format!(r"({})", alternation)).context("Invalid ticket prefix set")?;
        Ok(Self {
            ticket_re,
            prefix_re,
            link_base: settings.ticket_link_base.clone(),
        })
    }

    /// First `{PREFIX}-{digits}` token in the branch name, if any.
    pub fn extract_ticket(&self, branch_name: &str) -> Option<TicketRef> {
        self.ticket_re.find(branch_name).map(|m| {
            let id = m.as_str().to_string();
            let link = format!("[{}]({}/{})", id, self.link_base, id);
            TicketRef { id, link }
        })
    }

    /// Prefix the title with the branch's ticket token when the title does
    /// not already carry a known prefix. An empty title yields a degenerate
    /// `{ticket}-` result; callers accept that rough edge rather than guess.
    pub fn ensure_title_has_ticket_prefix(&self, title: &str, branch_name: &str) -> String {
        if self.prefix_re.is_match(title) {
            return title.to_string();
        }
        match self.ticket_re.find(branch_name) {
            Some(ticket) => format!("{}-{}", ticket.as_str(), title),
            None => title.to_string(),
        }
    }
}

/// Synthesized title for release PRs: `Release {env} - {date} - v{id}`.
pub fn release_title(environment: &str, date: NaiveDate, release_id: &str) -> String {
    format!(
        "Release {} - {} - v{}",
        environment,
        date.format("%Y-%m-%d"),
        release_id
    )
}

/// Generated branch name for stable releases.
pub fn stable_branch_name(date: NaiveDate) -> String {
    format!("stable-{}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming() -> Naming {
        Naming::new(&Settings::new(None)).unwrap()
    }

    #[test]
    fn merge_target_mapping_is_total_and_fixed() {
        let cases = [
            ("d", MergeTarget::Develop, "dev", "develop"),
            ("s", MergeTarget::Staging, "stg", "staging"),
            ("m", MergeTarget::Master, "", "master"),
        ];
        for (choice, target, prefix, base) in cases {
            let resolved = MergeTarget::from_choice(choice).unwrap();
            assert_eq!(resolved, target);
            assert_eq!(resolved.prefix(), prefix);
            assert_eq!(resolved.base_branch(), base);
        }
        assert_eq!(MergeTarget::from_choice("x"), None);
        assert_eq!(MergeTarget::from_choice(""), None);
    }

    #[test]
    fn qualification_prepends_prefix_once() {
        assert_eq!(
            qualified_branch_name("feature-x", MergeTarget::Develop),
            "dev/feature-x"
        );
        assert_eq!(
            qualified_branch_name("feature-x", MergeTarget::Staging),
            "stg/feature-x"
        );
        assert_eq!(
            qualified_branch_name("feature-x", MergeTarget::Master),
            "feature-x"
        );
        assert_eq!(
            qualified_branch_name("  feature-x  ", MergeTarget::Develop),
            "dev/feature-x"
        );
    }

    #[test]
    fn extract_ticket_finds_first_token() {
        let ticket = naming().extract_ticket("dev/SWWB-123-fix-thing").unwrap();
        assert_eq!(ticket.id, "SWWB-123");
        assert_eq!(
            ticket.link,
            "[SWWB-123](https://share-wis.atlassian.net/browse/SWWB-123)"
        );
    }

    #[test]
    fn extract_ticket_none_without_match() {
        assert_eq!(naming().extract_ticket("dev/no-ticket-here"), None);
        // Prefix without digits is not a ticket
        assert_eq!(naming().extract_ticket("dev/SWWB-fix"), None);
    }

    #[test]
    fn title_gains_ticket_prefix_from_branch() {
        assert_eq!(
            naming().ensure_title_has_ticket_prefix("fix bug", "dev/FDT-55-x"),
            "FDT-55-fix bug"
        );
    }

    #[test]
    fn title_with_existing_prefix_is_unchanged() {
        assert_eq!(
            naming().ensure_title_has_ticket_prefix("FDT-9 already tagged", "dev/FDT-9-x"),
            "FDT-9 already tagged"
        );
    }

    #[test]
    fn title_unchanged_when_branch_has_no_ticket() {
        assert_eq!(
            naming().ensure_title_has_ticket_prefix("fix bug", "dev/plain-branch"),
            "fix bug"
        );
    }

    #[test]
    fn release_titles_and_stable_names() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 30).unwrap();
        assert_eq!(
            release_title("Production", date, "124"),
            "Release Production - 2024-08-30 - v124"
        );
        assert_eq!(stable_branch_name(date), "stable-2024-08-30");
    }
}
