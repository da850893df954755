use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Deployment configuration for the notifier: sender identity, the
/// engineering address Cc'd on infrastructure failures, the host serving
/// build reports, and the SMTP relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    pub from: String,
    pub engineering_email: String,
    pub report_host: String,
    pub report_port: Option<u16>,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            from: "builds@circleci.com".to_string(),
            engineering_email: "engineering@circleci.com".to_string(),
            report_host: "circlehost".to_string(),
            report_port: Some(3000),
            smtp_host: "localhost".to_string(),
            smtp_port: 25,
        }
    }
}

impl MailerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// The web front-end URL for one build's report page.
    pub fn report_url(&self, project_name: &str, build_num: u32) -> String {
        match self.report_port {
            Some(port) => format!(
                "http://{}:{}/gh/{}/{}",
                self.report_host, port, project_name, build_num
            ),
            None => format!("http://{}/gh/{}/{}", self.report_host, project_name, build_num),
        }
    }
}
