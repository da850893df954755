use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The build record lacks data the notifier needs (VCS URL, revision, or
    /// a derivable project name). A precondition violation: no mail is sent.
    #[error("malformed build: {0}")]
    MalformedBuild(String),

    #[error("invalid recipient address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not construct message: {0}")]
    Message(#[from] lettre::error::Error),

    /// The transport rejected or failed to send. Not retried here; retry
    /// policy belongs to the transport collaborator.
    #[error("delivery failed: {0}")]
    Delivery(#[from] lettre::transport::smtp::Error),
}
