//! Subscriptions for the carousel widget
//!
//! Slide transitions are tweened in [`CarouselState`]; they only advance when
//! the application feeds it [`CarouselMessage::Tick`]s. Return [`animation`]
//! from your application's `subscription` so frames are requested while a
//! slide is moving and not otherwise.
//!
//! # Usage
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     glide_widgets::subscription::animation(&self.carousel).map(Message::Carousel)
//! }
//! ```

use std::time::Duration;

use iced::{time, Subscription};

use crate::message::CarouselMessage;
use crate::state::CarouselState;

/// Interval between animation frames (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Frame ticks while any slide is still moving
pub fn animation(state: &CarouselState) -> Subscription<CarouselMessage> {
    if state.is_animating() {
        time::every(FRAME_INTERVAL).map(CarouselMessage::Tick)
    } else {
        Subscription::none()
    }
}
