//! Messages produced by the carousel widget

use std::time::Instant;

use glide_core::InputEvent;

/// Carousel widget message
///
/// Wrap it in your application's message type with the closure passed to
/// [`crate::carousel`], then hand it back to [`crate::CarouselState::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMessage {
    /// Keyboard, pointer or indicator input
    Input(InputEvent),
    /// Animation frame
    Tick(Instant),
}

impl From<InputEvent> for CarouselMessage {
    fn from(event: InputEvent) -> Self {
        CarouselMessage::Input(event)
    }
}
