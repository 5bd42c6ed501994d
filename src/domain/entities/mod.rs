//! Domain entity definitions.

mod application_draft;
mod choices;
mod submission;

pub use application_draft::{ApplicationDraft, DraftField, MIN_MOTIVATION_CHARS};
pub use choices::{ACADEMIC_YEARS, Choice, FIELDS_OF_STUDY};
pub use submission::{SubmissionPayload, SubmissionReceipt, entry_key};
