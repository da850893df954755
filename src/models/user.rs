use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// The two notification categories a user can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum PreferenceCategory {
    OnSuccess,
    OnFail,
}

/// A scope tag restricting when a category applies. `All` is the only
/// meaningful scope today; narrower tags (per-branch rules) would be added
/// here and must not match until they carry real semantics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotifyScope {
    All,
}

/// Per-user opt-in state. The default (no explicit preferences) is opted out
/// of both categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPreferences {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub on_success: BTreeSet<NotifyScope>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub on_fail: BTreeSet<NotifyScope>,
}

impl EmailPreferences {
    /// Opted into both categories for every build.
    pub fn all() -> Self {
        Self {
            on_success: BTreeSet::from([NotifyScope::All]),
            on_fail: BTreeSet::from([NotifyScope::All]),
        }
    }

    /// Whether this user wants mail for the given category. Only the `all`
    /// scope matches unconditionally.
    pub fn wants(&self, category: PreferenceCategory) -> bool {
        let scopes = match category {
            PreferenceCategory::OnSuccess => &self.on_success,
            PreferenceCategory::OnFail => &self.on_fail,
        };
        scopes.contains(&NotifyScope::All)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_preferences: EmailPreferences,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            email_preferences: EmailPreferences::default(),
        }
    }

    pub fn with_preferences(mut self, preferences: EmailPreferences) -> Self {
        self.email_preferences = preferences;
        self
    }
}
