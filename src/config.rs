use std::path::PathBuf;

/// Default project checkout the commands run against. Overridable via the
/// `BRANCHPILOT_PROJECT_DIR` environment variable, resolved once in `main`.
const DEFAULT_PROJECT_DIR: &str = "/Users/viphat/projects/sharewis/sharewis-act";

/// Issue-tracker project prefixes recognized in branch names and PR titles.
const TICKET_PREFIXES: [&str; 2] = ["SWWB", "FDT"];

const TICKET_LINK_BASE: &str = "https://share-wis.atlassian.net/browse";

/// Release tracker versions page; `{release_id}` is substituted in.
const RELEASE_TRACKER_URL: &str =
    "https://share-wis.atlassian.net/projects/SWWB/versions/{release_id}";

/// Fixed, process-wide configuration. Built once at startup and passed by
/// reference into every component; nothing reads ambient state after this.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory every planned command and repository probe is scoped to.
    pub project_dir: PathBuf,
    pub ticket_prefixes: Vec<String>,
    pub ticket_link_base: String,
    pub release_tracker_url: String,
    pub master_branch: String,
    pub develop_branch: String,
    pub staging_branch: String,
    pub release_branch: String,
    pub stable_branch: String,
}

impl Settings {
    pub fn new(project_dir_override: Option<PathBuf>) -> Self {
        Self {
            project_dir: project_dir_override
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_DIR)),
            ticket_prefixes: TICKET_PREFIXES.iter().map(|p| p.to_string()).collect(),
            ticket_link_base: TICKET_LINK_BASE.to_string(),
            release_tracker_url: RELEASE_TRACKER_URL.to_string(),
            master_branch: "master".to_string(),
            develop_branch: "develop".to_string(),
            staging_branch: "staging".to_string(),
            release_branch: "release".to_string(),
            stable_branch: "stable".to_string(),
        }
    }

    /// Markdown link to the release tracker page for a release id.
    pub fn release_tracker_link(&self, release_id: &str) -> String {
        let url = self.release_tracker_url.replace("{release_id}", release_id);
        format!("[v{}]({})", release_id, url)
    }
}
