use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::contact::application::ports::outgoing::EmailSender;

/// A validated contact-form submission - can be deserialized directly
/// from JSON, so handlers never see an unvalidated message.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactSubmissionError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Subject cannot be empty")]
    EmptySubject,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl ContactSubmission {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, ContactSubmissionError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ContactSubmissionError::EmptyName);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(ContactSubmissionError::InvalidEmailFormat);
        }

        let subject = subject.trim().to_string();
        if subject.is_empty() {
            return Err(ContactSubmissionError::EmptySubject);
        }

        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(ContactSubmissionError::EmptyMessage);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl<'de> Deserialize<'de> for ContactSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ContactSubmissionHelper {
            name: String,
            email: String,
            subject: String,
            message: String,
        }

        let helper = ContactSubmissionHelper::deserialize(deserializer)?;
        ContactSubmission::new(helper.name, helper.email, helper.subject, helper.message)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError>;
}

/// Relays a submission to the site owner. The visitor's address goes into
/// the body rather than the envelope, so replies are a manual copy-paste
/// and the relay works with any SMTP sender policy.
pub struct SubmitContactService {
    sender: Arc<dyn EmailSender>,
    recipient: String,
}

impl SubmitContactService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: String) -> Self {
        Self { sender, recipient }
    }

    fn compose_body(submission: &ContactSubmission) -> String {
        format!(
            "New contact form submission\n\n\
             From: {} <{}>\n\
             Subject: {}\n\n\
             {}\n",
            submission.name, submission.email, submission.subject, submission.message
        )
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        let subject = format!("[Portfolio] {}", submission.subject);
        let body = Self::compose_body(&submission);

        self.sender
            .send_email(&self.recipient, &subject, &body)
            .await
            .map_err(SubmitContactError::DeliveryFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::mock_sender::MockEmailSender;

    fn submission() -> ContactSubmission {
        ContactSubmission::new(
            "Ada".to_string(),
            "Ada@Example.com".to_string(),
            "Hiring".to_string(),
            "Are you available?".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn validation_rejects_missing_pieces() {
        assert!(matches!(
            ContactSubmission::new("".into(), "a@b.com".into(), "s".into(), "m".into()),
            Err(ContactSubmissionError::EmptyName)
        ));
        assert!(matches!(
            ContactSubmission::new("n".into(), "nope".into(), "s".into(), "m".into()),
            Err(ContactSubmissionError::InvalidEmailFormat)
        ));
        assert!(matches!(
            ContactSubmission::new("n".into(), "a@b.com".into(), " ".into(), "m".into()),
            Err(ContactSubmissionError::EmptySubject)
        ));
        assert!(matches!(
            ContactSubmission::new("n".into(), "a@b.com".into(), "s".into(), "".into()),
            Err(ContactSubmissionError::EmptyMessage)
        ));
    }

    #[test]
    fn visitor_email_is_normalized() {
        assert_eq!(submission().email(), "ada@example.com");
    }

    #[tokio::test]
    async fn relay_goes_to_the_configured_recipient() {
        let sender = Arc::new(MockEmailSender::new());
        let service = SubmitContactService::new(sender.clone(), "owner@example.com".to_string());

        service.execute(submission()).await.unwrap();

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "owner@example.com");
        assert_eq!(sent[0].1, "[Portfolio] Hiring");
        assert!(sent[0].2.contains("Ada <ada@example.com>"));
        assert!(sent[0].2.contains("Are you available?"));
    }

    #[tokio::test]
    async fn delivery_failure_is_surfaced() {
        struct FailingSender;

        #[async_trait]
        impl EmailSender for FailingSender {
            async fn send_email(&self, _: &str, _: &str, _: &str) -> Result<(), String> {
                Err("smtp 550".to_string())
            }
        }

        let service =
            SubmitContactService::new(Arc::new(FailingSender), "owner@example.com".to_string());

        assert!(matches!(
            service.execute(submission()).await,
            Err(SubmitContactError::DeliveryFailed(_))
        ));
    }
}
