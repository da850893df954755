use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::MailerConfig;
use crate::error::NotifyError;
use crate::models::Build;
use crate::outcome::Outcome;
use crate::recipients::Recipients;

/// One command from the build, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEntry {
    pub command: String,
    pub output: String,
    pub exit_code: Option<i32>,
}

impl CommandEntry {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Everything the renderer and transport need for one notification.
/// Constructed fresh per notification event, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    pub subject: String,
    pub outcome: Outcome,
    pub report_url: String,
    pub revision: String,
    pub entries: Vec<CommandEntry>,
    pub to: BTreeSet<String>,
    pub cc: BTreeSet<String>,
}

/// Combine a classified build with its recipients. Fails only on malformed
/// input: a build without a VCS URL, revision, or derivable project name is a
/// precondition violation.
pub fn assemble(
    build: &Build,
    outcome: Outcome,
    recipients: Recipients,
    config: &MailerConfig,
) -> Result<NotificationPayload, NotifyError> {
    if build.vcs_url.trim().is_empty() {
        return Err(NotifyError::MalformedBuild(
            "build has no VCS URL".to_string(),
        ));
    }
    if build.vcs_revision.trim().is_empty() {
        return Err(NotifyError::MalformedBuild(
            "build has no VCS revision".to_string(),
        ));
    }
    let project_name = build.project.github_project_name().ok_or_else(|| {
        NotifyError::MalformedBuild(format!(
            "cannot derive a project name from VCS URL {:?}",
            build.project.vcs_url
        ))
    })?;

    let subject = format!(
        "{}: {} #{} by {}: {}",
        outcome.subject_prefix(),
        project_name,
        build.build_num,
        build.committer_name(),
        build.subject
    );

    let entries = build
        .action_logs
        .iter()
        .map(|log| CommandEntry {
            command: log.command.clone(),
            output: log.output(),
            exit_code: log.exit_code,
        })
        .collect();

    Ok(NotificationPayload {
        subject,
        outcome,
        report_url: config.report_url(&project_name, build.build_num),
        revision: build.vcs_revision.clone(),
        entries,
        to: recipients.to,
        cc: recipients.cc,
    })
}
