use std::collections::BTreeSet;

use crate::config::MailerConfig;
use crate::models::Build;
use crate::outcome::Outcome;

/// Deduplicated To and Cc address sets for one notification. The sets may
/// overlap; the transport deals with that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
    pub to: BTreeSet<String>,
    pub cc: BTreeSet<String>,
}

impl Recipients {
    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.cc.is_empty()
    }
}

/// Compute who hears about a build.
///
/// A UI-triggered build goes to the user who started it and nobody else,
/// regardless of preferences. Otherwise every project user opted into the
/// outcome's category is added to To, and infrastructure failures Cc the
/// engineering address.
pub fn resolve(build: &Build, outcome: Outcome, config: &MailerConfig) -> Recipients {
    let mut recipients = Recipients::default();

    if build.ui_triggered() {
        if let Some(user) = &build.started_by {
            recipients.to.insert(user.email.clone());
        }
        return recipients;
    }

    let category = outcome.category();
    for user in &build.project.users {
        if user.email_preferences.wants(category) {
            recipients.to.insert(user.email.clone());
        }
    }

    if outcome == Outcome::InfrastructureFailure {
        recipients.cc.insert(config.engineering_email.clone());
    }

    recipients
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuildCause, EmailPreferences, NotifyScope, Project, User};

    fn lover() -> User {
        User::new("Bob", "lover@test.com").with_preferences(EmailPreferences::all())
    }

    fn hater() -> User {
        User::new("Bob", "hater@test.com").with_preferences(EmailPreferences::default())
    }

    fn fail_only() -> User {
        User::new("Bob", "failwatcher@test.com").with_preferences(EmailPreferences {
            on_fail: BTreeSet::from([NotifyScope::All]),
            ..EmailPreferences::default()
        })
    }

    fn build_with_users(users: Vec<User>) -> Build {
        Build {
            vcs_url: "https://github.com/owner/repo".to_string(),
            vcs_revision: "abcdef0123456789".to_string(),
            branch: "master".to_string(),
            subject: "a commit".to_string(),
            committer_email: "author@test.com".to_string(),
            build_num: 1,
            project: Project::new("https://github.com/owner/repo", users),
            action_logs: Vec::new(),
            failed: false,
            infrastructure_fail: false,
            timedout: false,
            started_by: None,
            why: None,
            start_time: None,
            stop_time: None,
        }
    }

    #[test]
    fn opted_in_users_receive_success_and_failure() {
        let build = build_with_users(vec![lover(), hater()]);

        for outcome in [Outcome::Success, Outcome::Failed] {
            let recipients = resolve(&build, outcome, &MailerConfig::default());
            assert_eq!(
                recipients.to,
                BTreeSet::from(["lover@test.com".to_string()]),
                "for {outcome:?}"
            );
            assert!(recipients.cc.is_empty());
        }
    }

    #[test]
    fn category_selects_the_audience() {
        let build = build_with_users(vec![fail_only()]);

        let on_success = resolve(&build, Outcome::Success, &MailerConfig::default());
        assert!(on_success.to.is_empty());

        let on_no_tests = resolve(&build, Outcome::NoTests, &MailerConfig::default());
        assert!(on_no_tests.to.is_empty());

        for outcome in [Outcome::Failed, Outcome::TimedOut] {
            let recipients = resolve(&build, outcome, &MailerConfig::default());
            assert!(
                recipients.to.contains("failwatcher@test.com"),
                "for {outcome:?}"
            );
        }
    }

    #[test]
    fn ui_triggered_build_goes_only_to_its_starter() {
        let mut build = build_with_users(vec![lover(), hater()]);
        build.why = Some(BuildCause::Trigger);
        build.started_by = Some(User::new("Bob", "starter@test.com"));

        let recipients = resolve(&build, Outcome::Failed, &MailerConfig::default());
        assert_eq!(
            recipients.to,
            BTreeSet::from(["starter@test.com".to_string()])
        );
        assert!(recipients.cc.is_empty());
    }

    #[test]
    fn ui_trigger_overrides_the_engineering_cc() {
        let mut build = build_with_users(vec![lover()]);
        build.why = Some(BuildCause::Trigger);
        build.started_by = Some(User::new("Bob", "starter@test.com"));

        let recipients = resolve(
            &build,
            Outcome::InfrastructureFailure,
            &MailerConfig::default(),
        );
        assert!(recipients.cc.is_empty());
    }

    #[test]
    fn infrastructure_failures_cc_engineering() {
        let build = build_with_users(vec![hater()]);

        let recipients = resolve(
            &build,
            Outcome::InfrastructureFailure,
            &MailerConfig::default(),
        );
        assert!(recipients.to.is_empty());
        assert_eq!(
            recipients.cc,
            BTreeSet::from([MailerConfig::default().engineering_email])
        );
    }

    #[test]
    fn duplicate_addresses_collapse() {
        let build = build_with_users(vec![lover(), lover()]);

        let recipients = resolve(&build, Outcome::Success, &MailerConfig::default());
        assert_eq!(recipients.to.len(), 1);
    }
}
