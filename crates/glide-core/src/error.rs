//! Error types for carousel construction
//!
//! Navigation itself never fails (out-of-range input is clamped or ignored),
//! so these errors only surface when a carousel is built or resized with
//! input it cannot represent.

use thiserror::Error;

use crate::gesture::PointerKind;

/// Errors that can occur when building or resizing a carousel
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// The item sequence is empty
    #[error("Carousel needs at least one item")]
    NoItems,

    /// Zero items per page
    #[error("Visible count must be at least 1 (got {visible_count})")]
    InvalidVisibleCount { visible_count: usize },

    /// Commit threshold is negative or not a number
    #[error("Invalid {kind} commit threshold: {value}")]
    InvalidThreshold { kind: PointerKind, value: f32 },
}

/// Result type for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CarouselError::InvalidVisibleCount { visible_count: 0 };
        assert!(err.to_string().contains("0"));

        let err = CarouselError::InvalidThreshold {
            kind: PointerKind::Touch,
            value: -3.0,
        };
        assert!(err.to_string().contains("touch"));
        assert!(err.to_string().contains("-3"));
    }
}
