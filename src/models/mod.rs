mod action_log;
mod build;
mod project;
mod user;

pub use action_log::{ActionLog, ActionType, OutputFragment, OutputKind};
pub use build::{Build, BuildCause};
pub use project::Project;
pub use user::{EmailPreferences, NotifyScope, PreferenceCategory, User};
