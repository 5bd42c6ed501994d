use std::collections::VecDeque;

use crate::domain::{Notification, NotificationLevel};

/// Queue of blocking notices; the front one is shown until dismissed.
#[derive(Debug, Default)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
}

impl NotificationManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.queue
            .push_back(Notification::new(level, title, message));
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Removes the notice currently on screen.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Whether input should go to the notice instead of the form.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.queue.is_empty()
    }
}
