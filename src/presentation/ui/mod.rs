//! UI screens.

mod app;
mod carousel_timer;
mod form_screen;
mod landing_screen;
mod notification_popup;

pub use app::App;
pub use carousel_timer::CarouselTimer;
pub use form_screen::{FormAction, FormFocus, FormScreen, FormScreenView};
pub use landing_screen::{LandingAction, LandingScreen};
pub use notification_popup::NotificationPopup;
