//! Contact form messages and the emails rendered from them.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::error::CoreError;

/// A message submitted through the site's contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Subject and HTML body of one outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

impl ContactMessage {
    /// All four fields must be non-blank and `email` must be an address.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(CoreError::Validation("Missing required fields".into()));
        }
        if !self.email.trim().to_string().validate_email() {
            return Err(CoreError::Validation(format!(
                "Invalid email address '{}'",
                self.email
            )));
        }
        Ok(())
    }

    /// Email delivered to the site owner. Replies go to the sender.
    pub fn notification(&self) -> EmailContent {
        let message = escape_html(&self.message).replace('\n', "<br>");
        EmailContent {
            subject: format!("New Contact: {}", self.subject.trim()),
            html: format!(
                "<h2>New Message</h2>\n\
                 <p><strong>Name:</strong> {}</p>\n\
                 <p><strong>Email:</strong> {}</p>\n\
                 <p><strong>Subject:</strong> {}</p>\n\
                 <p><strong>Message:</strong></p>\n\
                 <p>{message}</p>\n",
                escape_html(&self.name),
                escape_html(&self.email),
                escape_html(&self.subject),
            ),
        }
    }

    /// Acknowledgement delivered back to the sender.
    pub fn acknowledgement(&self) -> EmailContent {
        EmailContent {
            subject: "We received your message".into(),
            html: format!(
                "<h2>Thank you for reaching out!</h2>\n\
                 <p>Hi {},</p>\n\
                 <p>I've received your message and will get back to you soon.</p>\n",
                escape_html(&self.name),
            ),
        }
    }
}

/// Escape text for inclusion in an HTML body.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
