pub mod form_session;
pub mod notification_manager;

pub use form_session::{FormSession, View};
pub use notification_manager::NotificationManager;
