use serde::Serialize;
use strum::{AsRefStr, EnumString};

use crate::models::{Build, PreferenceCategory};

/// The single classification of a build's result. Variants are listed in
/// classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    InfrastructureFailure,
    TimedOut,
    Failed,
    NoTests,
    Success,
}

impl Outcome {
    /// Classify a build. First match wins: a build can raise several raw
    /// flags at once (a timed-out build is also failed), so the order here is
    /// part of the contract.
    pub fn classify(build: &Build) -> Outcome {
        if build.infrastructure_fail {
            Outcome::InfrastructureFailure
        } else if build.timedout {
            Outcome::TimedOut
        } else if build.failed {
            Outcome::Failed
        } else if !build.has_test_commands() {
            Outcome::NoTests
        } else {
            Outcome::Success
        }
    }

    /// The subject-line prefix, without the trailing colon.
    pub fn subject_prefix(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failed => "Failed",
            Outcome::NoTests => "No tests",
            Outcome::InfrastructureFailure => "Circle bug",
            Outcome::TimedOut => "Timed out",
        }
    }

    /// Which preference category governs who hears about this outcome.
    /// Infrastructure failures and timeouts carry `failed == true`, so they
    /// dispatch on `on_fail`.
    pub fn category(self) -> PreferenceCategory {
        match self {
            Outcome::Success | Outcome::NoTests => PreferenceCategory::OnSuccess,
            Outcome::Failed | Outcome::TimedOut | Outcome::InfrastructureFailure => {
                PreferenceCategory::OnFail
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::models::{ActionLog, ActionType, Project};

    fn test_log() -> ActionLog {
        ActionLog {
            action_type: ActionType::Test,
            command: "true".to_string(),
            exit_code: Some(0),
            out: Vec::new(),
            infrastructure_fail: false,
            timedout: false,
            end_time: None,
        }
    }

    fn setup_log() -> ActionLog {
        ActionLog {
            action_type: ActionType::Setup,
            command: "touch setup".to_string(),
            exit_code: Some(0),
            out: Vec::new(),
            infrastructure_fail: false,
            timedout: false,
            end_time: None,
        }
    }

    fn build(failed: bool, infra: bool, timedout: bool, logs: Vec<ActionLog>) -> Build {
        Build {
            vcs_url: "https://github.com/owner/repo".to_string(),
            vcs_revision: "abcdef0123456789".to_string(),
            branch: "master".to_string(),
            subject: "a commit".to_string(),
            committer_email: "author@test.com".to_string(),
            build_num: 1,
            project: Project::new("https://github.com/owner/repo", Vec::new()),
            action_logs: logs,
            failed,
            infrastructure_fail: infra,
            timedout,
            started_by: None,
            why: None,
            start_time: None,
            stop_time: None,
        }
    }

    #[rstest]
    #[case(true, true, true, Outcome::InfrastructureFailure)]
    #[case(true, true, false, Outcome::InfrastructureFailure)]
    #[case(true, false, true, Outcome::TimedOut)]
    #[case(false, false, true, Outcome::TimedOut)]
    #[case(true, false, false, Outcome::Failed)]
    fn flag_priority(
        #[case] failed: bool,
        #[case] infra: bool,
        #[case] timedout: bool,
        #[case] expected: Outcome,
    ) {
        let b = build(failed, infra, timedout, vec![setup_log(), test_log()]);
        assert_eq!(Outcome::classify(&b), expected);
    }

    #[test]
    fn passing_build_with_tests_is_success() {
        let b = build(false, false, false, vec![setup_log(), test_log()]);
        assert_eq!(Outcome::classify(&b), Outcome::Success);
    }

    #[test]
    fn passing_build_without_test_commands_is_no_tests() {
        let b = build(false, false, false, vec![setup_log()]);
        assert_eq!(Outcome::classify(&b), Outcome::NoTests);

        let empty = build(false, false, false, Vec::new());
        assert_eq!(Outcome::classify(&empty), Outcome::NoTests);
    }

    #[test]
    fn failed_beats_no_tests() {
        // An aggregate failure with only setup logs is still Failed.
        let b = build(true, false, false, vec![setup_log()]);
        assert_eq!(Outcome::classify(&b), Outcome::Failed);
    }

    #[test]
    fn categories_follow_the_failed_flag() {
        assert_eq!(Outcome::Success.category(), PreferenceCategory::OnSuccess);
        assert_eq!(Outcome::NoTests.category(), PreferenceCategory::OnSuccess);
        assert_eq!(Outcome::Failed.category(), PreferenceCategory::OnFail);
        assert_eq!(Outcome::TimedOut.category(), PreferenceCategory::OnFail);
        assert_eq!(
            Outcome::InfrastructureFailure.category(),
            PreferenceCategory::OnFail
        );
    }
}
