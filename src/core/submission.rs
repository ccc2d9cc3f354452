//! Hand-off of validated orders to whoever fulfils them

use crate::core::order::ValidatedOrder;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A validated order plus when it was submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub order: ValidatedOrder,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(order: ValidatedOrder) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            submitted_at: Utc::now(),
        }
    }
}

/// Confirmation returned by a handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub submission_id: Uuid,
    pub title: String,
    pub description: String,
}

impl Acknowledgement {
    /// The standard "Form submitted / Created <time>" confirmation
    pub fn for_submission(submission: &Submission) -> Self {
        Self {
            submission_id: submission.id,
            title: "Form submitted".to_string(),
            description: format!("Created {}", submission.submitted_at.to_rfc2822()),
        }
    }
}

/// Receives validated orders
///
/// Implementations own persistence and notification. Returning `Err` tells
/// the form to keep its data so the user can retry.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn submit(&self, submission: Submission) -> Result<Acknowledgement>;
}

/// Logs each submission and acknowledges it
#[derive(Debug, Clone, Default)]
pub struct LoggingSubmissionHandler;

#[async_trait]
impl SubmissionHandler for LoggingSubmissionHandler {
    async fn submit(&self, submission: Submission) -> Result<Acknowledgement> {
        let payload = serde_json::to_string(&submission.order)?;
        tracing::info!(
            submission_id = %submission.id,
            submitted_at = %submission.submitted_at,
            order = %payload,
            "Order submitted"
        );
        Ok(Acknowledgement::for_submission(&submission))
    }
}

/// Keeps submissions in memory
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct RecordingSubmissionHandler {
    submissions: Arc<RwLock<Vec<Submission>>>,
    failure: Option<String>,
}

impl RecordingSubmissionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that rejects every submission with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            submissions: Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// Submissions accepted so far
    pub fn submissions(&self) -> Result<Vec<Submission>> {
        let submissions = self
            .submissions
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(submissions.clone())
    }
}

#[async_trait]
impl SubmissionHandler for RecordingSubmissionHandler {
    async fn submit(&self, submission: Submission) -> Result<Acknowledgement> {
        if let Some(message) = &self.failure {
            return Err(anyhow!("{}", message));
        }

        let mut submissions = self
            .submissions
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let ack = Acknowledgement::for_submission(&submission);
        submissions.push(submission);

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::OrderType;

    fn order() -> ValidatedOrder {
        ValidatedOrder {
            barcode: Some(12345678),
            item: None,
            first_name: "Maria".to_string(),
            last_name: "Petrova".to_string(),
            phone_number: "+359888123456".to_string(),
            address: "12 Vitosha Blvd".to_string(),
            width: None,
            height: None,
            quantity: Some(2),
            orientation: None,
            price: Some(9.9),
            unit: None,
            description: "Two shelves, white".to_string(),
            drill_holes: 4,
            hinges: 0,
            express: OrderType::Regular,
        }
    }

    #[tokio::test]
    async fn test_recording_handler_keeps_submissions() {
        let handler = RecordingSubmissionHandler::new();
        let submission = Submission::new(order());
        let id = submission.id;

        let ack = handler.submit(submission).await.unwrap();
        assert_eq!(ack.submission_id, id);
        assert_eq!(ack.title, "Form submitted");

        let stored = handler.submissions().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].order.first_name, "Maria");
    }

    #[tokio::test]
    async fn test_failing_handler_stores_nothing() {
        let handler = RecordingSubmissionHandler::failing("mail server down");
        let err = handler.submit(Submission::new(order())).await.unwrap_err();
        assert_eq!(err.to_string(), "mail server down");
        assert!(handler.submissions().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logging_handler_acknowledges() {
        let submission = Submission::new(order());
        let ack = LoggingSubmissionHandler.submit(submission.clone()).await.unwrap();
        assert_eq!(ack.submission_id, submission.id);
        assert!(ack.description.starts_with("Created "));
    }
}
