use tokio::time::Instant;
use tracing::debug;

use crate::domain::Carousel;

/// Drives a [`Carousel`] from the event loop's clock.
///
/// Only runs between `start` and `stop`; the loop sleeps until
/// [`CarouselTimer::deadline`] and then calls [`CarouselTimer::on_fire`].
#[derive(Debug)]
pub struct CarouselTimer {
    carousel: Carousel,
    deadline: Option<Instant>,
}

impl CarouselTimer {
    #[must_use]
    pub const fn new(carousel: Carousel) -> Self {
        Self {
            carousel,
            deadline: None,
        }
    }

    /// Rewinds to the first slide and arms the long initial hold.
    pub fn start(&mut self, now: Instant) {
        self.carousel.reset();
        self.deadline = self.carousel.next_delay().map(|delay| now + delay);
        debug!(slides = self.carousel.len(), "Carousel started");
    }

    pub fn stop(&mut self) {
        if self.deadline.take().is_some() {
            debug!(index = self.carousel.index(), "Carousel stopped");
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.carousel.index()
    }

    /// Advances one slide and schedules the next one.
    ///
    /// Returns the new index, or `None` when the timer is stopped.
    pub fn on_fire(&mut self, now: Instant) -> Option<usize> {
        self.deadline?;
        let index = self.carousel.advance();
        self.deadline = self.carousel.next_delay().map(|delay| now + delay);
        Some(index)
    }
}
