//! Widget state: the headless carousel plus animated offsets
//!
//! The core [`Carousel`] decides where every item *should* be. This state
//! keeps one [`OffsetTransition`] per item so the view can show where it
//! currently *is* while it eases towards that target.

use std::time::{Duration, Instant};

use glide_core::{Carousel, CarouselConfig, CarouselResult, Direction, Navigation, OffsetTransition};

use crate::message::CarouselMessage;

/// State for one carousel widget
#[derive(Debug, Clone)]
pub struct CarouselState {
    carousel: Carousel,
    transitions: Vec<OffsetTransition>,
    /// Time of the last update, used to sample the transitions
    now: Instant,
}

impl CarouselState {
    /// Create state for `len` items, settled on the first one
    pub fn new(config: CarouselConfig, len: usize) -> CarouselResult<Self> {
        Self::new_at(config, len, Instant::now())
    }

    /// Like [`CarouselState::new`] with an explicit clock reading
    pub fn new_at(config: CarouselConfig, len: usize, now: Instant) -> CarouselResult<Self> {
        let carousel = Carousel::new(config, len)?;
        let transitions = settled_transitions(&carousel, now);
        Ok(Self {
            carousel,
            transitions,
            now,
        })
    }

    /// The headless model
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn active(&self) -> usize {
        self.carousel.active()
    }

    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    /// Handle a widget message
    ///
    /// Returns the navigation the message committed, if any.
    pub fn update(&mut self, message: CarouselMessage, now: Instant) -> Option<Navigation> {
        self.now = now;
        match message {
            CarouselMessage::Tick(_) => None,
            CarouselMessage::Input(event) => {
                let navigation = self.carousel.handle(event);
                self.retarget(now);
                navigation
            }
        }
    }

    /// Navigate programmatically (e.g. from previous/next buttons)
    pub fn navigate(&mut self, navigation: Navigation, now: Instant) -> bool {
        self.now = now;
        let changed = self.carousel.navigate(navigation);
        self.retarget(now);
        changed
    }

    /// Follow a new item count supplied by the application
    ///
    /// New items appear at their target offset without animating.
    pub fn sync_len(&mut self, len: usize, now: Instant) -> CarouselResult<()> {
        if len == self.carousel.len() {
            return Ok(());
        }
        self.carousel.set_len(len)?;
        self.now = now;
        let layout = self.carousel.layout();
        self.transitions.truncate(len);
        for item in layout.iter().skip(self.transitions.len()) {
            self.transitions.push(OffsetTransition::settled(item.offset, now));
        }
        self.retarget(now);
        Ok(())
    }

    /// Switch reading direction; the strip is re-laid out without animation
    pub fn set_direction(&mut self, direction: Direction, now: Instant) {
        if self.carousel.direction() == direction {
            return;
        }
        self.carousel.set_direction(direction);
        self.now = now;
        self.transitions = settled_transitions(&self.carousel, now);
    }

    /// Offsets to draw, sampled at the last update
    pub fn displayed_offsets(&self) -> Vec<f32> {
        self.transitions
            .iter()
            .map(|transition| transition.value_at(self.now))
            .collect()
    }

    /// Whether any item is still moving towards its target
    pub fn is_animating(&self) -> bool {
        self.transitions
            .iter()
            .any(|transition| transition.is_running(self.now))
    }

    fn retarget(&mut self, now: Instant) {
        let timing = self.carousel.config().transition;
        for (transition, item) in self.transitions.iter_mut().zip(self.carousel.layout()) {
            let millis = if item.fast { timing.fast_ms } else { timing.normal_ms };
            transition.retarget(item.offset, Duration::from_millis(millis), now);
        }
    }
}

fn settled_transitions(carousel: &Carousel, now: Instant) -> Vec<OffsetTransition> {
    carousel
        .layout()
        .iter()
        .map(|item| OffsetTransition::settled(item.offset, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::{ArrowKey, InputEvent, PointerKind};

    fn state(len: usize, visible: usize, now: Instant) -> CarouselState {
        CarouselState::new_at(CarouselConfig::new(visible, Direction::LeftToRight), len, now).unwrap()
    }

    fn key(key: ArrowKey) -> CarouselMessage {
        CarouselMessage::Input(InputEvent::Key(key))
    }

    #[test]
    fn test_starts_settled() {
        let now = Instant::now();
        let state = state(3, 1, now);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_offsets(), vec![0.0; 3]);
    }

    #[test]
    fn test_navigation_animates_then_settles() {
        let start = Instant::now();
        let mut state = state(3, 1, start);
        assert_eq!(state.update(key(ArrowKey::Right), start), Some(Navigation::Next));
        assert!(state.is_animating());
        assert_eq!(state.displayed_offsets(), vec![0.0; 3]);

        let mid = start + Duration::from_millis(100);
        state.update(CarouselMessage::Tick(mid), mid);
        let shown = state.displayed_offsets()[0];
        assert!(shown < 0.0 && shown > -100.0);

        let end = start + Duration::from_millis(1000);
        state.update(CarouselMessage::Tick(end), end);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_offsets(), vec![-100.0; 3]);
    }

    #[test]
    fn test_drag_uses_fast_transition() {
        let start = Instant::now();
        let mut state = state(3, 1, start);
        state.update(
            CarouselMessage::Input(InputEvent::PointerPressed { kind: PointerKind::Mouse, x: 200.0 }),
            start,
        );
        state.update(
            CarouselMessage::Input(InputEvent::PointerMoved {
                kind: PointerKind::Mouse,
                x: 100.0,
                frame_width: 400.0,
            }),
            start,
        );
        let fast = Duration::from_millis(glide_core::config::DEFAULT_FAST_TRANSITION_MS);
        let later = start + fast;
        state.update(CarouselMessage::Tick(later), later);
        assert_eq!(state.displayed_offsets(), vec![-25.0; 3]);
    }

    #[test]
    fn test_repeated_render_is_stable() {
        let start = Instant::now();
        let mut state = state(4, 2, start);
        state.navigate(Navigation::JumpTo(2), start);
        let end = start + Duration::from_secs(1);
        state.update(CarouselMessage::Tick(end), end);
        let first = state.displayed_offsets();
        state.navigate(Navigation::JumpTo(2), end);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_offsets(), first);
    }

    #[test]
    fn test_sync_len() {
        let now = Instant::now();
        let mut state = state(5, 1, now);
        state.navigate(Navigation::JumpTo(4), now);
        state.sync_len(2, now).unwrap();
        assert_eq!(state.active(), 1);
        assert_eq!(state.displayed_offsets().len(), 2);

        state.sync_len(6, now).unwrap();
        assert_eq!(state.len(), 6);
        assert_eq!(state.displayed_offsets().len(), 6);
        assert!(state.sync_len(0, now).is_err());
    }

    #[test]
    fn test_set_direction_relayouts() {
        let now = Instant::now();
        let mut state = state(3, 1, now);
        state.navigate(Navigation::Next, now);
        state.set_direction(Direction::RightToLeft, now);
        assert!(!state.is_animating());
        assert_eq!(state.displayed_offsets(), vec![100.0; 3]);
    }
}
