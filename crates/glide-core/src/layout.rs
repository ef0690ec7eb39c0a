//! Offset renderer
//!
//! Turns the active index (and an optional live drag offset) into the
//! horizontal translation applied to every item. Offsets are expressed in
//! percent of one item width, the same unit as [`SPAN_WIDTH`].
//!
//! ## Boundary correction
//!
//! With `visible_count` items per page, scrolling all the way to the last
//! item would leave empty space after it. Once
//! `shift = visible_count - len + active` is non-negative, the strip is
//! pulled back by `shift` items so the last page sits flush against the
//! trailing edge of the frame:
//!
//! ```text
//! len = 5, visible = 3, active = 4
//!
//! uncorrected:  [4][ ][ ]        offset -400
//! corrected:    [2][3][4]        offset -400 + 2 * 100
//! ```

use std::ops::Range;

use crate::direction::Direction;

/// Width of one item in offset units (percent)
pub const SPAN_WIDTH: f32 = 100.0;

/// How many items before the active one use the fast transition while dragging
pub const FAST_WINDOW_BEFORE: usize = 2;
/// How many items from the active one onwards use the fast transition
pub const FAST_WINDOW_AFTER: usize = 3;

/// Rendered placement of a single item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemOffset {
    /// Position of the item in the sequence
    pub index: usize,
    /// Translation applied to the item, percent of an item width
    pub offset: f32,
    /// Resulting distance of the item from the frame's leading edge, percent
    /// of an item width (0 is the first visible slot)
    pub position: f32,
    /// Whether the item is in the fast-transition window
    pub fast: bool,
}

/// Items the strip is pulled back by near the end of the sequence
pub fn boundary_shift(visible_count: usize, len: usize, active: usize) -> Option<usize> {
    (visible_count + active).checked_sub(len)
}

/// Translation for a settled layout at `active`
pub fn full_offset(active: usize, len: usize, visible_count: usize, direction: Direction) -> f32 {
    let c = direction.coefficient();
    corrected(-c * SPAN_WIDTH * active as f32, active, len, visible_count, direction)
}

/// Translation while dragging: the settled layout plus the live drag offset
pub fn partial_offset(
    active: usize,
    len: usize,
    visible_count: usize,
    direction: Direction,
    live: f32,
) -> f32 {
    let c = direction.coefficient();
    corrected(-c * active as f32 * SPAN_WIDTH + live, active, len, visible_count, direction)
}

fn corrected(base: f32, active: usize, len: usize, visible_count: usize, direction: Direction) -> f32 {
    match boundary_shift(visible_count, len, active) {
        Some(shift) => base + direction.coefficient() * shift as f32 * SPAN_WIDTH,
        None => base,
    }
}

/// Items near `active` that animate quickly while a pointer is held
pub fn fast_window(active: usize, len: usize) -> Range<usize> {
    let start = active.saturating_sub(FAST_WINDOW_BEFORE);
    let end = len.min(active + FAST_WINDOW_AFTER).max(1);
    start..end
}

/// Width of one item in pixels
pub fn item_width(frame_width: f32, visible_count: usize) -> f32 {
    frame_width / visible_count.max(1) as f32
}

/// Apply one translation to every item
pub fn item_offsets(
    offset: f32,
    len: usize,
    direction: Direction,
    fast: Option<&Range<usize>>,
) -> Vec<ItemOffset> {
    let c = direction.coefficient();
    (0..len)
        .map(|index| ItemOffset {
            index,
            offset,
            position: index as f32 * SPAN_WIDTH + c * offset,
            fast: fast.is_some_and(|range| range.contains(&index)),
        })
        .collect()
}
