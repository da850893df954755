use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use super::{ActionLog, ActionType, Project, User};

/// What caused a build to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BuildCause {
    /// Started by a user from the UI.
    Trigger,
    /// Started by a VCS push event.
    Github,
}

/// A completed build, as read back from the build store. The aggregate
/// `failed` / `infrastructure_fail` / `timedout` flags are authoritative over
/// the per-log flags for classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    pub vcs_url: String,
    pub vcs_revision: String,
    pub branch: String,
    pub subject: String,
    pub committer_email: String,
    pub build_num: u32,
    pub project: Project,
    #[serde(default)]
    pub action_logs: Vec<ActionLog>,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub infrastructure_fail: bool,
    #[serde(default)]
    pub timedout: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<BuildCause>,
    pub start_time: Option<Timestamp>,
    pub stop_time: Option<Timestamp>,
}

impl Build {
    /// A build counts as UI-triggered only when both the cause and the
    /// triggering user are recorded.
    pub fn ui_triggered(&self) -> bool {
        self.why == Some(BuildCause::Trigger) && self.started_by.is_some()
    }

    pub fn has_test_commands(&self) -> bool {
        self.action_logs
            .iter()
            .any(|log| log.action_type == ActionType::Test)
    }

    /// The committer's identifying name: the local part of their email.
    pub fn committer_name(&self) -> &str {
        self.committer_email
            .split('@')
            .next()
            .unwrap_or(&self.committer_email)
    }
}
