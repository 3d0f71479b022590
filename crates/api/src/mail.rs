//! Outgoing email for the contact form.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport. Configuration is
//! loaded from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and the contact route answers
//! with a delivery failure instead of sending.

use async_trait::async_trait;
use folio_core::contact::{ContactMessage, EmailContent};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No SMTP host or recipient is configured.
    #[error("Email delivery is not configured")]
    NotConfigured,
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@folio.local";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Where contact notifications are delivered (defaults to `from_address`).
    pub recipient: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable            | Required | Default               |
    /// |---------------------|----------|-----------------------|
    /// | `SMTP_HOST`         | yes      | none                  |
    /// | `SMTP_PORT`         | no       | `587`                 |
    /// | `SMTP_FROM`         | no       | `noreply@folio.local` |
    /// | `CONTACT_RECIPIENT` | no       | value of `SMTP_FROM`  |
    /// | `SMTP_USER`         | no       | none                  |
    /// | `SMTP_PASSWORD`     | no       | none                  |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let smtp_host = lookup("SMTP_HOST").filter(|h| !h.trim().is_empty())?;
        let from_address = lookup("SMTP_FROM").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string());
        Some(Self {
            smtp_host,
            smtp_port: lookup("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            recipient: lookup("CONTACT_RECIPIENT").unwrap_or_else(|| from_address.clone()),
            from_address,
            smtp_user: lookup("SMTP_USER"),
            smtp_password: lookup("SMTP_PASSWORD"),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends contact-form email. One attempt per message; no retry or queue.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver the owner notification, then the sender acknowledgement.
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// [`Mailer`] backed by an SMTP relay.
pub struct SmtpMailer {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the SMTP transport. Does not connect until the first send.
    pub fn new(config: EmailConfig) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }

    async fn send(
        &self,
        to: &str,
        reply_to: Option<&str>,
        content: EmailContent,
    ) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.config.from_address.parse::<Mailbox>()?)
            .to(to.parse::<Mailbox>()?)
            .subject(content.subject)
            .header(ContentType::TEXT_HTML);
        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(reply_to.parse::<Mailbox>()?);
        }
        let email = builder
            .body(content.html)
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        let sender = message.email.trim();

        self.send(&self.config.recipient, Some(sender), message.notification())
            .await?;
        self.send(sender, None, message.acknowledgement()).await?;

        tracing::info!(from = sender, "Contact emails sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
