//! Application layer with the form session and use cases.

/// Session and notification services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{FormSession, NotificationManager, View};
pub use use_cases::SubmitApplicationUseCase;
