//! Submit application use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{
    ApplicationDraft, DraftField, SubmissionPayload, SubmissionReceipt,
};
use crate::domain::errors::SubmissionError;
use crate::domain::ports::SubmissionPort;

/// Delivers a completed draft to the form collector.
#[derive(Clone)]
pub struct SubmitApplicationUseCase {
    submission_port: Arc<dyn SubmissionPort>,
}

impl SubmitApplicationUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub const fn new(submission_port: Arc<dyn SubmissionPort>) -> Self {
        Self { submission_port }
    }

    /// Packages the draft and sends it once.
    ///
    /// # Errors
    /// Returns error if the draft is incomplete or the request fails.
    pub async fn execute(
        &self,
        draft: ApplicationDraft,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if let Some(field) = draft.first_missing() {
            warn!(field = %field, "Refusing to submit incomplete application");
            return Err(SubmissionError::incomplete(format!("missing {field}")));
        }

        if !draft.is_motivation_sufficient() {
            warn!(
                motivation_chars = draft.motivation_chars(),
                "Refusing to submit short motivation"
            );
            return Err(SubmissionError::incomplete("motivation is too short"));
        }

        let payload = SubmissionPayload::from_draft(&draft);
        debug!(entries = payload.len(), "Submitting application");

        let receipt = self.submission_port.submit(&payload).await.map_err(|e| {
            warn!(error = %e, "Application submission failed");
            e
        })?;

        if receipt.is_success_status() {
            info!(
                status = receipt.status(),
                academic_year = %draft.get(DraftField::AcademicYear),
                field_of_study = %draft.get(DraftField::FieldOfStudy),
                "Application submitted"
            );
        } else {
            warn!(
                status = receipt.status(),
                "Form collector answered with a non-success status"
            );
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSubmissionPort;

    fn complete_draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft::new();
        draft.set(DraftField::FullName, "Amine Berrada");
        draft.set(DraftField::Email, "amine@universite.ma");
        draft.set(DraftField::Telephone, "0611223344");
        draft.set(DraftField::AcademicYear, "deuxieme-annee");
        draft.set(DraftField::FieldOfStudy, "RCIA");
        draft.set(DraftField::Motivation, "a".repeat(64));
        draft
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let port = Arc::new(MockSubmissionPort::new(true));
        let use_case = SubmitApplicationUseCase::new(port.clone());

        let receipt = use_case.execute(complete_draft()).await.unwrap();
        assert_eq!(receipt.status(), 200);

        let received = port.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].get("entry.865298508"), Some("Amine Berrada"));
        assert_eq!(received[0].get("entry.1290918550"), Some("deuxieme-annee"));
    }

    #[tokio::test]
    async fn test_incomplete_draft_is_not_sent() {
        let port = Arc::new(MockSubmissionPort::new(true));
        let use_case = SubmitApplicationUseCase::new(port.clone());

        let mut draft = complete_draft();
        draft.set(DraftField::Email, "");

        let result = use_case.execute(draft).await;
        assert!(matches!(result, Err(SubmissionError::Incomplete { .. })));
        assert!(port.received().await.is_empty());
    }

    #[tokio::test]
    async fn test_short_motivation_is_not_sent() {
        let port = Arc::new(MockSubmissionPort::new(true));
        let use_case = SubmitApplicationUseCase::new(port.clone());

        let mut draft = complete_draft();
        draft.set(DraftField::Motivation, "trop court");

        let result = use_case.execute(draft).await;
        assert!(matches!(result, Err(SubmissionError::Incomplete { .. })));
        assert!(port.received().await.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_is_propagated() {
        let port = Arc::new(MockSubmissionPort::new(false));
        let use_case = SubmitApplicationUseCase::new(port.clone());

        let result = use_case.execute(complete_draft()).await;
        assert!(matches!(result, Err(SubmissionError::Connection { .. })));
        assert_eq!(port.received().await.len(), 1);
    }
}
