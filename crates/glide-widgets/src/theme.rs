//! Shared theme constants for the carousel
//!
//! Colors and sizes for the slide frame and the position indicator row.

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color};

/// Default strip height in pixels
pub const STRIP_HEIGHT: f32 = 320.0;

/// Item width used when neither the frame nor the items have a bounded width
pub const FALLBACK_ITEM_WIDTH: f32 = 480.0;

/// Diameter of one position indicator
pub const INDICATOR_SIZE: f32 = 12.0;

/// Gap between indicators
pub const INDICATOR_SPACING: f32 = 8.0;

/// Gap between the strip and the indicator row
pub const INDICATOR_ROW_GAP: f32 = 12.0;

/// Frame background behind the slides
pub const FRAME_BG: Color = Color::from_rgb(0.12, 0.12, 0.14);

/// Frame border
pub const FRAME_BORDER: Color = Color::from_rgb(0.3, 0.3, 0.35);

/// Inactive indicator
pub const INDICATOR_BG: Color = Color::from_rgb(0.35, 0.35, 0.38);

/// Indicator of the active slide
pub const INDICATOR_ACTIVE_BG: Color = Color::from_rgb(0.3, 0.6, 0.9);

/// Lighten a color by a fixed amount (0.0-1.0)
pub fn lighten(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        (color.r + amount).min(1.0),
        (color.g + amount).min(1.0),
        (color.b + amount).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
pub fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

/// Style for a position indicator dot
#[derive(Debug, Clone, Copy)]
pub struct IndicatorStyle {
    pub active: bool,
}

impl IndicatorStyle {
    pub fn appearance(&self, status: Status) -> Style {
        let bg = if self.active {
            INDICATOR_ACTIVE_BG
        } else {
            INDICATOR_BG
        };

        let bg = match status {
            Status::Hovered => lighten(bg, 0.15),
            Status::Pressed => darken(bg, 0.1),
            _ => bg,
        };

        Style {
            background: Some(Background::Color(bg)),
            text_color: Color::WHITE,
            border: Border {
                color: darken(bg, 0.3),
                width: 1.0,
                radius: (INDICATOR_SIZE / 2.0).into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_indicator_distinct() {
        let active = IndicatorStyle { active: true }.appearance(Status::Active);
        let inactive = IndicatorStyle { active: false }.appearance(Status::Active);
        assert_ne!(active.background, inactive.background);
    }

    #[test]
    fn test_hover_lightens() {
        let style = IndicatorStyle { active: false };
        let hovered = style.appearance(Status::Hovered);
        assert_eq!(hovered.background, Some(Background::Color(lighten(INDICATOR_BG, 0.15))));
    }
}
