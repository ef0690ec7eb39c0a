//! Glide Core - headless carousel model
//!
//! Everything the carousel widget decides, without any GUI dependency:
//!
//! - **Slide sequence** (`sequence`): item count and clamped active index
//! - **Gesture tracker** (`gesture`): drag/swipe state machine and commit decision
//! - **Offset renderer** (`layout`): per-item translation with boundary correction
//! - **Input router** (`input`): keyboard and pointer events to navigation
//! - **Carousel** (`carousel`): the above composed behind one `handle` entry point
//! - **Transitions** (`animation`): eased offset tweens driven by explicit time

pub mod animation;
pub mod carousel;
pub mod config;
pub mod direction;
pub mod error;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod sequence;

pub use animation::OffsetTransition;
pub use carousel::{Carousel, Indicator};
pub use config::{CarouselConfig, ThresholdConfig, TransitionConfig};
pub use direction::Direction;
pub use error::{CarouselError, CarouselResult};
pub use gesture::{GestureOutcome, GestureState, GestureTracker, PointerKind};
pub use input::{route_key, ArrowKey, InputEvent, Navigation};
pub use layout::{ItemOffset, SPAN_WIDTH};
pub use sequence::SlideSequence;
