//! Reading direction of the carousel

use serde::{Deserialize, Serialize};

/// Reading direction
///
/// Flips the sign of every offset, the meaning of the arrow keys and the
/// order in which items and indicators are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl Direction {
    /// Sign applied to offsets and gesture distances (+1 for ltr, -1 for rtl)
    pub fn coefficient(self) -> f32 {
        match self {
            Direction::LeftToRight => 1.0,
            Direction::RightToLeft => -1.0,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::RightToLeft
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::LeftToRight => write!(f, "ltr"),
            Direction::RightToLeft => write!(f, "rtl"),
        }
    }
}
