//! Background slide rotation schedule.

use std::time::Duration;

/// Index cycle over a fixed number of slides.
///
/// The first slide is shown once, for `initial_delay`. After that the
/// cycle runs over slides `1..len` every `interval`, never returning to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    initial_delay: Duration,
    interval: Duration,
}

impl Carousel {
    /// Creates carousel positioned on the first slide.
    #[must_use]
    pub const fn new(len: usize, initial_delay: Duration, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            initial_delay,
            interval,
        }
    }

    /// Returns the current slide index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How long the current slide stays before the next advance.
    ///
    /// `None` when there is nothing to rotate to.
    #[must_use]
    pub const fn next_delay(&self) -> Option<Duration> {
        if self.len <= 1 {
            None
        } else if self.index == 0 {
            Some(self.initial_delay)
        } else {
            Some(self.interval)
        }
    }

    /// Moves to the next slide and returns its index.
    pub fn advance(&mut self) -> usize {
        if self.len > 1 {
            self.index = if self.index + 1 >= self.len {
                1
            } else {
                self.index + 1
            };
        }
        self.index
    }

    /// Rewinds to the first slide.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_secs(7);

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, HOLD, Duration::from_secs(4))
    }

    #[test]
    fn test_sequence_never_returns_to_first() {
        let mut carousel = carousel(5);
        assert_eq!(carousel.index(), 0);

        let sequence: Vec<usize> = (0..10).map(|_| carousel.advance()).collect();
        assert_eq!(sequence, vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2]);
    }

    #[test]
    fn test_first_slide_holds_longer() {
        let mut carousel = Carousel::new(5, Duration::from_secs(7), Duration::from_secs(4));
        assert_eq!(carousel.next_delay(), Some(Duration::from_secs(7)));

        carousel.advance();
        assert_eq!(carousel.next_delay(), Some(Duration::from_secs(4)));

        for _ in 0..4 {
            carousel.advance();
            assert_eq!(carousel.next_delay(), Some(Duration::from_secs(4)));
        }
    }

    #[test]
    fn test_single_slide_does_not_rotate() {
        let mut carousel = carousel(1);
        assert_eq!(carousel.next_delay(), None);
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = carousel(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next_delay(), None);
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn test_two_slides_settle_on_second() {
        let mut carousel = carousel(2);
        assert_eq!(carousel.advance(), 1);
        assert_eq!(carousel.advance(), 1);
    }

    #[test]
    fn test_reset_restarts_initial_hold() {
        let mut carousel = carousel(3);
        carousel.advance();
        carousel.advance();
        carousel.reset();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.next_delay(), Some(HOLD));
    }
}
