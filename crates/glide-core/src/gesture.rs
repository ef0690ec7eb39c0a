//! Gesture tracker for drag and swipe navigation
//!
//! ```text
//! Idle ──press──▶ Tracking ──release──▶ Commit(Next | Previous) ──▶ Idle
//!                    │  ▲                 SnapBack ───────────────▶ Idle
//!                    └──┘ move (live offset)
//! ```
//!
//! A release only navigates when the pointer moved while held, so a plain
//! click or tap never changes the slide.

use crate::config::ThresholdConfig;
use crate::direction::Direction;

/// Input device driving a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Touch,
    Mouse,
}

impl std::fmt::Display for PointerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerKind::Touch => write!(f, "touch"),
            PointerKind::Mouse => write!(f, "mouse"),
        }
    }
}

/// Decision taken when a moved gesture is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Advance one item
    Next,
    /// Go back one item
    Previous,
    /// Distance below threshold: return to the current item
    SnapBack,
}

/// Per-interaction record, alive between press and release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub kind: PointerKind,
    /// Horizontal pointer position at press
    pub start: f32,
    /// Latest horizontal pointer position
    pub current: f32,
    /// Set on the first move; unmoved gestures never navigate
    pub moved: bool,
}

/// Tracks at most one gesture at a time
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: Option<GestureState>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is being tracked
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Start tracking at `x`, superseding any gesture in progress
    pub fn begin(&mut self, kind: PointerKind, x: f32) {
        self.state = Some(GestureState {
            kind,
            start: x,
            current: x,
            moved: false,
        });
    }

    /// Record a move and return the live offset in percent
    ///
    /// Returns `None` when no gesture of this kind is active, or when the
    /// frame width is unusable (the position is still recorded then).
    pub fn update(&mut self, kind: PointerKind, x: f32, frame_width: f32) -> Option<f32> {
        let state = self.state.as_mut().filter(|state| state.kind == kind)?;
        state.current = x;
        state.moved = true;
        live_offset_percent(state.start, state.current, frame_width)
    }

    /// End the gesture and decide what it commits to
    ///
    /// Returns `None` for a gesture that never moved (or when no gesture of
    /// this kind is active). The tracker is idle afterwards whenever the kind
    /// matched, whatever the outcome.
    pub fn release(
        &mut self,
        kind: PointerKind,
        direction: Direction,
        thresholds: &ThresholdConfig,
    ) -> Option<GestureOutcome> {
        if self.state.map(|state| state.kind) != Some(kind) {
            return None;
        }
        let state = self.state.take()?;
        if !state.moved {
            return None;
        }
        let diff = state.start - state.current;
        Some(decide(diff, direction, thresholds.for_kind(kind)))
    }

    /// Drop the gesture without deciding anything
    pub fn cancel(&mut self) {
        self.state = None;
    }
}

/// Live drag distance as a percentage of the frame width
pub fn live_offset_percent(start: f32, current: f32, frame_width: f32) -> Option<f32> {
    if frame_width > 0.0 && frame_width.is_finite() {
        Some((current - start) / frame_width * 100.0)
    } else {
        None
    }
}

/// Compare a release distance (`start - end`) against a threshold
pub fn decide(diff: f32, direction: Direction, threshold: f32) -> GestureOutcome {
    let signed = direction.coefficient() * diff;
    if signed > threshold {
        GestureOutcome::Next
    } else if signed < -threshold {
        GestureOutcome::Previous
    } else {
        GestureOutcome::SnapBack
    }
}
