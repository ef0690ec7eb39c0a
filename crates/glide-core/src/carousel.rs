//! Carousel: sequence store, gesture tracker and offset renderer in one
//!
//! This is the headless model behind the widget. Feed it [`InputEvent`]s and
//! read back [`Carousel::layout`] after each one; nothing here knows about
//! pixels on screen except the frame width carried by pointer moves.

use std::ops::Range;

use crate::config::CarouselConfig;
use crate::direction::Direction;
use crate::error::CarouselResult;
use crate::gesture::{GestureOutcome, GestureTracker, PointerKind};
use crate::input::{route_key, InputEvent, Navigation};
use crate::layout::{self, ItemOffset};
use crate::sequence::SlideSequence;

/// One position indicator below the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Headless carousel model
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    sequence: SlideSequence,
    gesture: GestureTracker,
    /// Uncommitted drag offset, percent; `None` when settled
    live_offset: Option<f32>,
    /// Items using the fast transition while a pointer is held
    fast: Option<Range<usize>>,
}

impl Carousel {
    /// Build a carousel over `len` items
    ///
    /// Rejects an empty sequence and configs that fail
    /// [`CarouselConfig::check`].
    pub fn new(config: CarouselConfig, len: usize) -> CarouselResult<Self> {
        config.check()?;
        let sequence = SlideSequence::new(len)?;
        Ok(Self {
            config,
            sequence,
            gesture: GestureTracker::new(),
            live_offset: None,
            fast: None,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    pub fn visible_count(&self) -> usize {
        self.config.visible_count
    }

    pub fn active(&self) -> usize {
        self.sequence.active()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether a pointer is currently held on the strip
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn live_offset(&self) -> Option<f32> {
        self.live_offset
    }

    /// Change the reading direction, settling any drag in progress
    pub fn set_direction(&mut self, direction: Direction) {
        if self.config.direction != direction {
            log::debug!("set_direction: {} -> {}", self.config.direction, direction);
            self.config.direction = direction;
            self.cancel_gesture();
        }
    }

    /// Resize for a new item sequence
    ///
    /// A drag in progress is cancelled since its live offset refers to the
    /// old layout.
    pub fn set_len(&mut self, len: usize) -> CarouselResult<()> {
        if len == self.sequence.len() {
            return Ok(());
        }
        self.sequence.set_len(len)?;
        log::debug!("set_len: {} items, active {}", len, self.sequence.active());
        self.cancel_gesture();
        Ok(())
    }

    pub fn go_to_previous(&mut self) -> bool {
        self.navigate(Navigation::Previous)
    }

    pub fn go_to_next(&mut self) -> bool {
        self.navigate(Navigation::Next)
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.navigate(Navigation::JumpTo(index))
    }

    /// Apply a navigation and drop any partial offset
    ///
    /// Returns true if the active index changed.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        self.live_offset = None;
        let changed = match navigation {
            Navigation::Previous => self.sequence.go_to_previous(),
            Navigation::Next => self.sequence.go_to_next(),
            Navigation::JumpTo(index) => self.sequence.jump_to(index),
        };
        if changed {
            log::debug!("navigate: {:?} -> active {}", navigation, self.sequence.active());
        }
        changed
    }

    /// Route one input event
    ///
    /// Returns the navigation it committed, if any. Arrow keys always return
    /// one (they are consumed even at the ends of the sequence).
    pub fn handle(&mut self, event: InputEvent) -> Option<Navigation> {
        match event {
            InputEvent::Key(key) => {
                let navigation = route_key(key, self.config.direction);
                self.navigate(navigation);
                Some(navigation)
            }
            InputEvent::PointerPressed { kind, x } => {
                self.gesture.begin(kind, x);
                self.live_offset = None;
                self.fast = Some(layout::fast_window(self.sequence.active(), self.sequence.len()));
                None
            }
            InputEvent::PointerMoved { kind, x, frame_width } => {
                if let Some(live) = self.gesture.update(kind, x, frame_width) {
                    log::trace!("pointer moved: x {:.1}, live offset {:.2}%", x, live);
                    self.live_offset = Some(live);
                }
                None
            }
            InputEvent::PointerReleased { kind } => self.finish_gesture(kind),
            InputEvent::PointerLeft => self.finish_gesture(PointerKind::Mouse),
            InputEvent::IndicatorClicked(index) => {
                let navigation = Navigation::JumpTo(index);
                self.navigate(navigation);
                Some(navigation)
            }
        }
    }

    fn finish_gesture(&mut self, kind: PointerKind) -> Option<Navigation> {
        if self.gesture.state().map(|state| state.kind) != Some(kind) {
            return None;
        }
        let outcome = self
            .gesture
            .release(kind, self.config.direction, &self.config.thresholds);
        self.fast = None;
        self.live_offset = None;

        let navigation = match outcome? {
            GestureOutcome::Next => Navigation::Next,
            GestureOutcome::Previous => Navigation::Previous,
            GestureOutcome::SnapBack => Navigation::JumpTo(self.sequence.active()),
        };
        log::debug!("{} gesture released: {:?}", kind, navigation);
        self.navigate(navigation);
        Some(navigation)
    }

    fn cancel_gesture(&mut self) {
        self.gesture.cancel();
        self.live_offset = None;
        self.fast = None;
    }

    /// Translation currently applied to every item, percent of an item width
    pub fn current_offset(&self) -> f32 {
        let active = self.sequence.active();
        let len = self.sequence.len();
        let visible = self.config.visible_count;
        let direction = self.config.direction;
        match self.live_offset {
            Some(live) => layout::partial_offset(active, len, visible, direction, live),
            None => layout::full_offset(active, len, visible, direction),
        }
    }

    /// Placement of every item for the current state
    pub fn layout(&self) -> Vec<ItemOffset> {
        layout::item_offsets(
            self.current_offset(),
            self.sequence.len(),
            self.config.direction,
            self.fast.as_ref(),
        )
    }

    /// One indicator per item, the active one flagged
    pub fn indicators(&self) -> Vec<Indicator> {
        let active = self.sequence.active();
        (0..self.sequence.len())
            .map(|index| Indicator {
                index,
                active: index == active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarouselError;
    use crate::input::ArrowKey;

    fn carousel(len: usize, visible: usize, direction: Direction) -> Carousel {
        Carousel::new(CarouselConfig::new(visible, direction), len).unwrap()
    }

    fn offsets(carousel: &Carousel) -> Vec<f32> {
        carousel.layout().iter().map(|item| item.offset).collect()
    }

    fn drag(carousel: &mut Carousel, kind: PointerKind, from: f32, to: f32) -> Option<Navigation> {
        carousel.handle(InputEvent::PointerPressed { kind, x: from });
        carousel.handle(InputEvent::PointerMoved { kind, x: to, frame_width: 400.0 });
        carousel.handle(InputEvent::PointerReleased { kind })
    }

    #[test]
    fn test_rejects_invalid_construction() {
        let err = Carousel::new(CarouselConfig::default(), 0).unwrap_err();
        assert_eq!(err, CarouselError::NoItems);

        let err = Carousel::new(CarouselConfig::new(0, Direction::LeftToRight), 3).unwrap_err();
        assert_eq!(err, CarouselError::InvalidVisibleCount { visible_count: 0 });
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        assert_eq!(c.handle(InputEvent::Key(ArrowKey::Right)), Some(Navigation::Next));
        assert_eq!(c.active(), 1);
        c.handle(InputEvent::Key(ArrowKey::Left));
        c.handle(InputEvent::Key(ArrowKey::Left));
        assert_eq!(c.active(), 0);

        let mut c = carousel(3, 1, Direction::RightToLeft);
        c.handle(InputEvent::Key(ArrowKey::Left));
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn test_jump_equals_direct_render() {
        let mut jumped = carousel(6, 2, Direction::LeftToRight);
        jumped.handle(InputEvent::IndicatorClicked(4));

        let mut stepped = carousel(6, 2, Direction::LeftToRight);
        for _ in 0..4 {
            stepped.go_to_next();
        }
        assert_eq!(jumped.active(), 4);
        assert_eq!(jumped.layout(), stepped.layout());
    }

    #[test]
    fn test_out_of_range_indicator_clamps() {
        let mut c = carousel(4, 1, Direction::LeftToRight);
        c.handle(InputEvent::IndicatorClicked(10));
        assert_eq!(c.active(), 3);
    }

    #[test]
    fn test_swipe_commits_next() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        assert_eq!(drag(&mut c, PointerKind::Touch, 300.0, 200.0), Some(Navigation::Next));
        assert_eq!(c.active(), 1);
        assert_eq!(c.live_offset(), None);
        assert_eq!(offsets(&c), vec![-100.0; 3]);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        c.jump_to(1);
        assert_eq!(drag(&mut c, PointerKind::Mouse, 300.0, 220.0), Some(Navigation::JumpTo(1)));
        assert_eq!(c.active(), 1);
        assert_eq!(offsets(&c), vec![-100.0; 3]);
    }

    #[test]
    fn test_live_offset_during_drag() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        c.handle(InputEvent::PointerPressed { kind: PointerKind::Mouse, x: 200.0 });
        assert!(c.is_dragging());
        c.handle(InputEvent::PointerMoved {
            kind: PointerKind::Mouse,
            x: 100.0,
            frame_width: 400.0,
        });
        assert_eq!(c.live_offset(), Some(-25.0));
        assert_eq!(offsets(&c), vec![-25.0; 3]);

        // Fast window marks items 0..3 while held
        assert!(c.layout().iter().all(|item| item.fast));

        c.handle(InputEvent::PointerLeft);
        assert!(!c.is_dragging());
        assert!(c.layout().iter().all(|item| !item.fast));
        assert_eq!(offsets(&c), vec![0.0; 3]);
    }

    #[test]
    fn test_click_leaves_state_untouched() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        c.handle(InputEvent::PointerPressed { kind: PointerKind::Touch, x: 10.0 });
        assert_eq!(c.handle(InputEvent::PointerReleased { kind: PointerKind::Touch }), None);
        assert_eq!(c.active(), 0);
        assert!(!c.is_dragging());
        assert!(c.layout().iter().all(|item| !item.fast));
    }

    #[test]
    fn test_move_without_press_ignored() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        c.handle(InputEvent::PointerMoved {
            kind: PointerKind::Touch,
            x: 100.0,
            frame_width: 400.0,
        });
        assert_eq!(c.live_offset(), None);
        assert_eq!(c.handle(InputEvent::PointerReleased { kind: PointerKind::Touch }), None);
    }

    #[test]
    fn test_rtl_swipe_inverted() {
        let mut c = carousel(3, 1, Direction::RightToLeft);
        assert_eq!(drag(&mut c, PointerKind::Touch, 100.0, 300.0), Some(Navigation::Next));
        assert_eq!(c.active(), 1);
        assert_eq!(offsets(&c), vec![100.0; 3]);
    }

    #[test]
    fn test_boundary_layout() {
        let mut c = carousel(5, 3, Direction::LeftToRight);
        c.jump_to(4);
        let positions: Vec<f32> = c.layout().iter().map(|item| item.position).collect();
        assert_eq!(positions, vec![-200.0, -100.0, 0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_layout_idempotent() {
        let mut c = carousel(4, 2, Direction::RightToLeft);
        c.go_to_next();
        assert_eq!(c.layout(), c.layout());
        c.jump_to(c.active());
        let before = c.layout();
        c.jump_to(c.active());
        assert_eq!(before, c.layout());
    }

    #[test]
    fn test_indicators() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        c.go_to_next();
        let active: Vec<bool> = c.indicators().iter().map(|i| i.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn test_set_len_cancels_drag() {
        let mut c = carousel(5, 1, Direction::LeftToRight);
        c.jump_to(4);
        c.handle(InputEvent::PointerPressed { kind: PointerKind::Mouse, x: 0.0 });
        c.set_len(2).unwrap();
        assert_eq!(c.active(), 1);
        assert!(!c.is_dragging());
        assert!(c.set_len(0).is_err());
    }

    #[test]
    fn test_set_direction() {
        let mut c = carousel(3, 1, Direction::LeftToRight);
        c.go_to_next();
        c.set_direction(Direction::RightToLeft);
        assert_eq!(c.current_offset(), 100.0);
    }
}
