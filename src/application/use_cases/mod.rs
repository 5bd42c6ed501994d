//! Use case implementations.

mod submit_application_use_case;

pub use submit_application_use_case::SubmitApplicationUseCase;
