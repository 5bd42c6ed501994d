//! Submission port definition.

use async_trait::async_trait;

use crate::domain::entities::{SubmissionPayload, SubmissionReceipt};
use crate::domain::errors::SubmissionError;

/// Port for delivering an application to the external collector.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Sends the payload once. No retry is attempted.
    async fn submit(&self, payload: &SubmissionPayload)
    -> Result<SubmissionReceipt, SubmissionError>;
}
