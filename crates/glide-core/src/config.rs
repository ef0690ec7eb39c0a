//! Carousel configuration
//!
//! Serializable settings shared by the widget and any application embedding
//! it. Every field has a default so partial YAML files load cleanly.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{CarouselError, CarouselResult};
use crate::gesture::PointerKind;

/// Default swipe distance (pixels) a touch gesture must exceed to navigate
pub const DEFAULT_TOUCH_THRESHOLD: f32 = 75.0;
/// Default drag distance (pixels) a mouse gesture must exceed to navigate
pub const DEFAULT_MOUSE_THRESHOLD: f32 = 100.0;
/// Default duration of a slide transition
pub const DEFAULT_TRANSITION_MS: u64 = 350;
/// Default duration used while a pointer is held down
pub const DEFAULT_FAST_TRANSITION_MS: u64 = 40;

/// Root carousel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Number of items shown per page (at least 1)
    pub visible_count: usize,
    /// Reading direction
    pub direction: Direction,
    /// Gesture commit thresholds
    pub thresholds: ThresholdConfig,
    /// Transition timings
    pub transition: TransitionConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: 1,
            direction: Direction::LeftToRight,
            thresholds: ThresholdConfig::default(),
            transition: TransitionConfig::default(),
        }
    }
}

impl CarouselConfig {
    /// Config with the given page size and direction, defaults elsewhere
    pub fn new(visible_count: usize, direction: Direction) -> Self {
        Self {
            visible_count,
            direction,
            ..Self::default()
        }
    }

    /// Clamp a loaded config into its valid range
    ///
    /// Each corrected field is logged. Use this on configs coming from disk;
    /// [`CarouselConfig::check`] is the strict counterpart.
    pub fn validate(&mut self) {
        if self.visible_count == 0 {
            log::warn!("validate: visible_count 0 is invalid, using 1");
            self.visible_count = 1;
        }
        self.thresholds.validate();
        if self.transition.fast_ms > self.transition.normal_ms {
            log::warn!(
                "validate: fast_ms {} exceeds normal_ms {}, clamping",
                self.transition.fast_ms,
                self.transition.normal_ms
            );
            self.transition.fast_ms = self.transition.normal_ms;
        }
    }

    /// Reject a config that cannot drive a carousel
    pub fn check(&self) -> CarouselResult<()> {
        if self.visible_count == 0 {
            return Err(CarouselError::InvalidVisibleCount {
                visible_count: self.visible_count,
            });
        }
        for kind in [PointerKind::Touch, PointerKind::Mouse] {
            let value = self.thresholds.for_kind(kind);
            if !ThresholdConfig::is_valid(value) {
                return Err(CarouselError::InvalidThreshold { kind, value });
            }
        }
        Ok(())
    }
}

/// Gesture commit thresholds in pixels
///
/// Touch is more sensitive than mouse drag. Both values are tuned defaults,
/// not derived from anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub touch: f32,
    pub mouse: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            touch: DEFAULT_TOUCH_THRESHOLD,
            mouse: DEFAULT_MOUSE_THRESHOLD,
        }
    }
}

impl ThresholdConfig {
    pub fn for_kind(&self, kind: PointerKind) -> f32 {
        match kind {
            PointerKind::Touch => self.touch,
            PointerKind::Mouse => self.mouse,
        }
    }

    fn is_valid(value: f32) -> bool {
        value.is_finite() && value >= 0.0
    }

    fn validate(&mut self) {
        if !Self::is_valid(self.touch) {
            log::warn!("validate: touch threshold {} is invalid, using default", self.touch);
            self.touch = DEFAULT_TOUCH_THRESHOLD;
        }
        if !Self::is_valid(self.mouse) {
            log::warn!("validate: mouse threshold {} is invalid, using default", self.mouse);
            self.mouse = DEFAULT_MOUSE_THRESHOLD;
        }
    }
}

/// Transition durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration of snap and page transitions
    pub normal_ms: u64,
    /// Reduced duration for items near the active one while dragging
    pub fast_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            normal_ms: DEFAULT_TRANSITION_MS,
            fast_ms: DEFAULT_FAST_TRANSITION_MS,
        }
    }
}
