use serde::{Deserialize, Serialize};

use super::User;

/// A watched repository and the users who may be notified about its builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub vcs_url: String,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Project {
    pub fn new(vcs_url: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            vcs_url: vcs_url.into(),
            users,
        }
    }

    /// The `owner/repo` display name derived from the VCS URL. Handles https
    /// remotes and scp-style remotes (`git@github.com:owner/repo.git`), with
    /// or without a `.git` suffix. Returns `None` when the URL does not carry
    /// two path segments.
    pub fn github_project_name(&self) -> Option<String> {
        let trimmed = self
            .vcs_url
            .trim_end_matches('/')
            .trim_end_matches(".git");

        let mut segments = trimmed.rsplit('/');
        let repo = segments.next()?;
        let mut owner = segments.next()?;

        // scp-style remotes separate host and owner with a colon
        if let Some(idx) = owner.rfind(':') {
            owner = &owner[idx + 1..];
        }

        if owner.is_empty() || repo.is_empty() || repo.contains(':') {
            return None;
        }

        Some(format!("{owner}/{repo}"))
    }
}
