//! Input router
//!
//! Raw UI input in, semantic navigation out. The keyboard mapping depends on
//! the reading direction: the arrow pointing "forward" in the text direction
//! always advances.

use crate::direction::Direction;
use crate::gesture::PointerKind;

/// Arrow keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Everything a carousel consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Arrow key pressed (global while the carousel is mounted)
    Key(ArrowKey),
    /// Mouse button or finger went down inside the frame
    PointerPressed { kind: PointerKind, x: f32 },
    /// Pointer moved while held; `frame_width` is the current frame size in pixels
    PointerMoved { kind: PointerKind, x: f32, frame_width: f32 },
    /// Mouse button or finger released
    PointerReleased { kind: PointerKind },
    /// Mouse cursor left the frame, ends a mouse drag like a release
    PointerLeft,
    /// Position indicator clicked
    IndicatorClicked(usize),
}

/// Semantic navigation request or result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    /// Jump to an index (indicator click or gesture snap back)
    JumpTo(usize),
}

/// Map an arrow key to previous/next for the given direction
pub fn route_key(key: ArrowKey, direction: Direction) -> Navigation {
    match (key, direction) {
        (ArrowKey::Left, Direction::LeftToRight) | (ArrowKey::Right, Direction::RightToLeft) => {
            Navigation::Previous
        }
        (ArrowKey::Right, Direction::LeftToRight) | (ArrowKey::Left, Direction::RightToLeft) => {
            Navigation::Next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_keys() {
        assert_eq!(route_key(ArrowKey::Left, Direction::LeftToRight), Navigation::Previous);
        assert_eq!(route_key(ArrowKey::Right, Direction::LeftToRight), Navigation::Next);
    }

    #[test]
    fn test_rtl_keys_inverted() {
        assert_eq!(route_key(ArrowKey::Left, Direction::RightToLeft), Navigation::Next);
        assert_eq!(route_key(ArrowKey::Right, Direction::RightToLeft), Navigation::Previous);
    }
}
