//! Domain layer with core entities and port definitions.

/// Slide rotation schedule.
pub mod carousel;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// User-facing notices.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use carousel::Carousel;
pub use entities::{ApplicationDraft, DraftField, SubmissionPayload, SubmissionReceipt};
pub use errors::SubmissionError;
pub use notification::{Notification, NotificationLevel};
pub use ports::SubmissionPort;
