//! Navigation and draft state for one applicant session.

use tracing::{debug, info, warn};

use crate::domain::entities::{ApplicationDraft, DraftField, SubmissionReceipt};
use crate::domain::errors::SubmissionError;

/// Screen the session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen with the call-to-action.
    #[default]
    Landing,
    /// Personal information step.
    Step1,
    /// Motivation step.
    Step2,
}

impl View {
    /// Step number shown in the progress indicator.
    #[must_use]
    pub const fn step_number(self) -> Option<u8> {
        match self {
            Self::Landing => None,
            Self::Step1 => Some(1),
            Self::Step2 => Some(2),
        }
    }
}

/// Owns the draft and the current view, and guards every transition.
#[derive(Debug, Default)]
pub struct FormSession {
    draft: ApplicationDraft,
    view: View,
    in_flight: bool,
}

impl FormSession {
    /// Creates session on the landing screen with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Returns the draft.
    #[must_use]
    pub const fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Returns a field value.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        self.draft.get(field)
    }

    /// Writes a field value without validation.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Whether the "Continuer" control is enabled.
    #[must_use]
    pub fn is_step1_valid(&self) -> bool {
        self.draft.is_step_one_complete()
    }

    /// Whether the "Envoyer ma candidature" control is enabled.
    #[must_use]
    pub fn is_step2_valid(&self) -> bool {
        self.draft.is_motivation_sufficient()
    }

    /// Whether a submission is waiting for the network.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Leaves the landing screen for the first step.
    pub fn join(&mut self) -> bool {
        if self.view != View::Landing {
            return false;
        }
        debug!("Applicant joined, opening step 1");
        self.view = View::Step1;
        true
    }

    /// Advances to the motivation step when step 1 is complete.
    pub fn next_step(&mut self) -> bool {
        if self.view != View::Step1 || self.in_flight {
            return false;
        }
        if let Some(field) = self.draft.first_missing() {
            debug!(field = %field, "Step 1 incomplete, staying");
            return false;
        }
        self.view = View::Step2;
        true
    }

    /// Returns from the motivation step to step 1.
    pub fn previous_step(&mut self) -> bool {
        if self.view != View::Step2 || self.in_flight {
            return false;
        }
        self.view = View::Step1;
        true
    }

    /// Marks the session in flight and hands out a snapshot of the draft.
    ///
    /// # Errors
    /// Returns error when not on step 2, when the draft is incomplete, or
    /// when a submission is already pending.
    pub fn begin_submission(&mut self) -> Result<ApplicationDraft, SubmissionError> {
        if self.in_flight {
            return Err(SubmissionError::AlreadyInFlight);
        }
        if self.view != View::Step2 {
            return Err(SubmissionError::incomplete("motivation step not reached"));
        }
        if !self.draft.is_complete() {
            return Err(SubmissionError::incomplete("motivation is too short"));
        }
        self.in_flight = true;
        Ok(self.draft.clone())
    }

    /// Applies the outcome of the pending submission.
    ///
    /// Success clears the draft and returns to the landing screen; failure
    /// keeps everything in place for another attempt.
    pub fn complete_submission(&mut self, outcome: &Result<SubmissionReceipt, SubmissionError>) {
        if !self.in_flight {
            warn!("Submission outcome received with nothing in flight");
            return;
        }
        self.in_flight = false;

        match outcome {
            Ok(receipt) => {
                info!(status = receipt.status(), "Submission delivered, resetting session");
                self.draft.clear();
                self.view = View::Landing;
            }
            Err(e) => {
                warn!(error = %e, "Submission failed, keeping draft");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::use_cases::SubmitApplicationUseCase;
    use crate::domain::ports::mocks::MockSubmissionPort;

    fn fill_step1(session: &mut FormSession) {
        session.set_field(DraftField::FullName, "Nora El Amrani");
        session.set_field(DraftField::Email, "nora@universite.ma");
        session.set_field(DraftField::Telephone, "+212 612 345 678");
        session.set_field(DraftField::AcademicYear, "licence-professionnelle");
        session.set_field(DraftField::FieldOfStudy, "GPVA");
    }

    fn session_on_step2() -> FormSession {
        let mut session = FormSession::new();
        session.join();
        fill_step1(&mut session);
        assert!(session.next_step());
        session.set_field(DraftField::Motivation, "x".repeat(50));
        session
    }

    fn use_case(succeed: bool) -> (Arc<MockSubmissionPort>, SubmitApplicationUseCase) {
        let port = Arc::new(MockSubmissionPort::new(succeed));
        let use_case = SubmitApplicationUseCase::new(port.clone());
        (port, use_case)
    }

    /// Same begin, execute, complete sequence the app runs across its task.
    async fn send(
        session: &mut FormSession,
        use_case: &SubmitApplicationUseCase,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let draft = session.begin_submission()?;
        let outcome = use_case.execute(draft).await;
        session.complete_submission(&outcome);
        outcome
    }

    #[test]
    fn test_starts_on_landing() {
        let session = FormSession::new();
        assert_eq!(session.view(), View::Landing);
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_join_is_one_way() {
        let mut session = FormSession::new();
        assert!(session.join());
        assert_eq!(session.view(), View::Step1);
        assert!(!session.join());
        assert!(!session.previous_step());
        assert_eq!(session.view(), View::Step1);
    }

    #[test]
    fn test_step1_valid_only_when_all_fields_filled() {
        let mut session = FormSession::new();
        session.join();
        assert!(!session.is_step1_valid());
        assert!(!session.next_step());

        for field in DraftField::STEP_ONE {
            assert!(!session.is_step1_valid());
            session.set_field(field, "v");
        }
        assert!(session.is_step1_valid());
        assert!(session.next_step());
        assert_eq!(session.view(), View::Step2);
    }

    #[test]
    fn test_refused_advance_stays_on_step1() {
        let mut session = FormSession::new();
        session.join();
        fill_step1(&mut session);
        session.set_field(DraftField::Telephone, "");

        assert!(!session.next_step());
        assert_eq!(session.view(), View::Step1);
    }

    #[test]
    fn test_step2_enabled_at_exactly_fifty_chars() {
        let mut session = session_on_step2();
        session.set_field(DraftField::Motivation, "x".repeat(49));
        assert!(!session.is_step2_valid());

        session.set_field(DraftField::Motivation, "x".repeat(50));
        assert!(session.is_step2_valid());
    }

    #[test]
    fn test_back_and_forth_preserves_values() {
        let mut session = session_on_step2();
        let before = session.draft().clone();

        assert!(session.previous_step());
        assert_eq!(session.view(), View::Step1);
        assert!(session.next_step());
        assert_eq!(session.view(), View::Step2);

        assert_eq!(session.draft(), &before);
        assert_eq!(session.field(DraftField::Motivation), "x".repeat(50));
    }

    #[test]
    fn test_begin_submission_requires_step2() {
        let mut session = FormSession::new();
        session.join();
        fill_step1(&mut session);
        session.set_field(DraftField::Motivation, "x".repeat(60));

        assert!(matches!(
            session.begin_submission(),
            Err(SubmissionError::Incomplete { .. })
        ));
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut session = session_on_step2();
        assert!(session.begin_submission().is_ok());
        assert!(session.is_submitting());

        assert!(matches!(
            session.begin_submission(),
            Err(SubmissionError::AlreadyInFlight)
        ));
        assert!(!session.previous_step());
    }

    #[test]
    fn test_stray_outcome_is_ignored() {
        let mut session = session_on_step2();
        session.complete_submission(&Ok(SubmissionReceipt::new(200)));
        assert_eq!(session.view(), View::Step2);
        assert!(!session.draft().is_empty());
    }

    #[tokio::test]
    async fn test_successful_submission_resets_to_landing() {
        let (port, use_case) = use_case(true);
        let mut session = session_on_step2();

        let result = send(&mut session, &use_case).await;

        assert!(result.is_ok());
        assert_eq!(session.view(), View::Landing);
        assert!(session.draft().is_empty());
        assert!(!session.is_submitting());
        assert_eq!(port.received().await.len(), 1);

        assert!(session.join());
        assert_eq!(session.view(), View::Step1);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft_on_step2() {
        let (port, use_case) = use_case(false);
        let mut session = session_on_step2();
        let before = session.draft().clone();

        let result = send(&mut session, &use_case).await;

        assert!(result.is_err());
        assert_eq!(session.view(), View::Step2);
        assert_eq!(session.draft(), &before);
        assert!(!session.is_submitting());

        port.set_should_succeed(true);
        assert!(send(&mut session, &use_case).await.is_ok());
        assert_eq!(port.received().await.len(), 2);
    }
}
