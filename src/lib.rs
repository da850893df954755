#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod mailer;
pub mod models;
pub mod outcome;
pub mod payload;
pub mod recipients;
pub mod render;

pub use config::MailerConfig;
pub use error::NotifyError;
pub use mailer::{Email, Mailer, SmtpMailer};
pub use outcome::Outcome;
pub use payload::NotificationPayload;
pub use recipients::Recipients;

use models::Build;

/// Notify interested parties that a build finished.
///
/// Classifies the build, resolves recipients from the trigger source and
/// per-user preferences, assembles the payload, renders the HTML and
/// plain-text bodies, and hands exactly one message to the mailer. When
/// nobody resolves, no message is constructed at all.
pub fn notify(
    build: &Build,
    config: &MailerConfig,
    mailer: &dyn Mailer,
) -> Result<(), NotifyError> {
    let outcome = Outcome::classify(build);
    let recipients = recipients::resolve(build, outcome, config);

    if recipients.is_empty() {
        tracing::debug!(
            build_num = build.build_num,
            outcome = outcome.as_ref(),
            "no recipients opted in, skipping notification"
        );
        return Ok(());
    }

    let payload = payload::assemble(build, outcome, recipients, config).inspect_err(|err| {
        tracing::error!(build_num = build.build_num, %err, "refusing to notify for malformed build")
    })?;
    let body = render::render(&payload);

    let email = Email {
        from: config.from.clone(),
        to: payload.to.iter().cloned().collect(),
        cc: payload.cc.iter().cloned().collect(),
        subject: payload.subject.clone(),
        html: body.html,
        text: body.text,
    };
    mailer.deliver(&email)?;

    tracing::info!(
        build_num = build.build_num,
        outcome = outcome.as_ref(),
        to = email.to.len(),
        cc = email.cc.len(),
        "build notification sent"
    );
    Ok(())
}
