//! Slide sequence store
//!
//! Holds the item count and the active index. The index is always inside
//! `0..len`; every operation clamps or no-ops instead of failing.

use crate::error::{CarouselError, CarouselResult};

/// Ordered slide sequence with an active index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSequence {
    len: usize,
    active: usize,
}

impl SlideSequence {
    /// Create a sequence of `len` items positioned on the first one
    pub fn new(len: usize) -> CarouselResult<Self> {
        if len == 0 {
            return Err(CarouselError::NoItems);
        }
        Ok(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 == self.len
    }

    /// Move one item back. Returns true if the index changed.
    pub fn go_to_previous(&mut self) -> bool {
        if self.active > 0 {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// Move one item forward. Returns true if the index changed.
    pub fn go_to_next(&mut self) -> bool {
        if self.active + 1 < self.len {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Jump directly to `index`, clamped to the last item
    ///
    /// Returns true if the index changed. Jumping to the current index is
    /// how an inconclusive gesture snaps back.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let target = if index >= self.len {
            log::warn!(
                "jump_to: index {} out of range for {} items, clamping",
                index,
                self.len
            );
            self.len - 1
        } else {
            index
        };
        let changed = target != self.active;
        self.active = target;
        changed
    }

    /// Replace the item count for a new render pass
    ///
    /// The active index is clamped into the new range.
    pub fn set_len(&mut self, len: usize) -> CarouselResult<()> {
        if len == 0 {
            return Err(CarouselError::NoItems);
        }
        self.len = len;
        if self.active >= len {
            log::debug!("set_len: active index {} clamped to {}", self.active, len - 1);
            self.active = len - 1;
        }
        Ok(())
    }
}
