//! Carousel widget for iced applications
//!
//! This crate renders the headless model from `glide-core` as an iced widget
//! with drag, touch-swipe, keyboard and indicator navigation.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State struct**: `CarouselState` owns the model and the animated offsets
//! - **View function**: `carousel` takes state + a message wrapper, returns `Element<Message>`
//! - **Custom widget**: `SlideStrip` handles layout, clipping and event-to-message
//!   translation, including arrow keys while it is mounted
//! - **Subscriptions**: animation frames, active only while a slide is moving
//!
//! ## Usage
//!
//! ```ignore
//! // update
//! Message::Carousel(msg) => {
//!     self.carousel.update(msg, Instant::now());
//! }
//!
//! // view
//! glide_widgets::carousel(&self.carousel, slides, 320.0, Message::Carousel)
//! ```

pub mod message;
pub mod state;
pub mod strip;
pub mod subscription;
pub mod theme;
pub mod view;

pub use message::CarouselMessage;
pub use state::CarouselState;
pub use strip::{arrow_key, SlideStrip};
pub use theme::{IndicatorStyle, STRIP_HEIGHT};
pub use view::carousel;
