use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Which phase of the build a command ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionType {
    Setup,
    Test,
    Deploy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Out,
    Err,
}

/// One captured chunk of command output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFragment {
    #[serde(rename = "type")]
    pub kind: OutputKind,
    pub time: Option<Timestamp>,
    pub message: String,
}

impl OutputFragment {
    pub fn out(message: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Out,
            time: None,
            message: message.into(),
        }
    }
}

/// The record of one executed command. A missing exit code means the command
/// did not finish or was never run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub command: String,
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub out: Vec<OutputFragment>,
    #[serde(default)]
    pub infrastructure_fail: bool,
    #[serde(default)]
    pub timedout: bool,
    pub end_time: Option<Timestamp>,
}

impl ActionLog {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Captured output as one string. Fragments are joined with no separator;
    /// any framing belongs to the fragments themselves.
    pub fn output(&self) -> String {
        self.out.iter().map(|f| f.message.as_str()).collect()
    }
}
