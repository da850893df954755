use lettre::message::{Mailbox, MultiPart};
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailerConfig;
use crate::error::NotifyError;

/// One outbound message: resolved addresses plus the two rendered body parts.
#[derive(Debug, Clone)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Delivery capability. Injected into [`notify`](crate::notify) so tests can
/// substitute a recording double without touching process-wide state.
pub trait Mailer {
    fn deliver(&self, email: &Email) -> Result<(), NotifyError>;
}

/// Production transport: one multipart/alternative message per call over
/// blocking SMTP.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &MailerConfig) -> Self {
        let transport = SmtpTransport::builder_dangerous(config.smtp_host.as_str())
            .port(config.smtp_port)
            .build();
        Self { transport }
    }
}

impl Mailer for SmtpMailer {
    fn deliver(&self, email: &Email) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .subject(email.subject.clone());
        for address in &email.to {
            builder = builder.to(address.parse()?);
        }
        for address in &email.cc {
            builder = builder.cc(address.parse()?);
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))?;

        self.transport.send(&message)?;
        Ok(())
    }
}
