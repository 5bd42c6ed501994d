//! Carousel image loading.

mod backdrop_loader;

pub use backdrop_loader::{BackdropError, BackdropLoadedEvent, BackdropLoader};
