//! View function for the carousel widget
//!
//! ## Layout
//!
//! ```text
//! ┌────────────────────────────┐
//! │  [slide] [slide] [slide]   │   <- SlideStrip (drag / swipe)
//! └────────────────────────────┘
//!          ●  ○  ○  ○  ○            <- position indicators (click to jump)
//! ```

use iced::widget::{button, column, container, Row, Space};
use iced::{Border, Element, Length};

use glide_core::{Indicator, InputEvent};

use crate::message::CarouselMessage;
use crate::state::CarouselState;
use crate::strip::SlideStrip;
use crate::theme::{
    IndicatorStyle, FRAME_BG, FRAME_BORDER, INDICATOR_ROW_GAP, INDICATOR_SIZE, INDICATOR_SPACING,
};

/// Create a carousel element
///
/// # Arguments
/// * `state` - The carousel state; must have been synced to `items.len()`
/// * `items` - Slide contents, one element per item
/// * `height` - Height of the slide strip
/// * `on_message` - Wraps carousel messages into the application message
pub fn carousel<'a, Message: Clone + 'a>(
    state: &'a CarouselState,
    items: Vec<Element<'a, Message>>,
    height: impl Into<Length>,
    on_message: impl Fn(CarouselMessage) -> Message + 'a + Clone,
) -> Element<'a, Message> {
    if items.len() != state.len() {
        log::warn!(
            "carousel: {} items supplied but state holds {}",
            items.len(),
            state.len()
        );
    }

    let model = state.carousel();
    let on_input = on_message.clone();
    let strip = SlideStrip::new(items, state.displayed_offsets(), move |event| {
        on_input(CarouselMessage::Input(event))
    })
    .visible_count(model.visible_count())
    .direction(model.direction())
    .height(height);

    let frame = container(strip)
        .width(Length::Fill)
        .clip(true)
        .style(|_| container::Style {
            background: Some(FRAME_BG.into()),
            border: Border {
                color: FRAME_BORDER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

    let indicators = build_indicators(state, on_message);

    column![frame, indicators]
        .spacing(INDICATOR_ROW_GAP)
        .width(Length::Fill)
        .into()
}

/// Build the indicator row (one dot per item, reversed for right-to-left)
fn build_indicators<'a, Message: Clone + 'a>(
    state: &'a CarouselState,
    on_message: impl Fn(CarouselMessage) -> Message + 'a + Clone,
) -> Element<'a, Message> {
    let model = state.carousel();
    let mut indicators: Vec<Indicator> = model.indicators();
    if model.direction().is_rtl() {
        indicators.reverse();
    }

    let dots: Vec<Element<'a, Message>> = indicators
        .into_iter()
        .map(|indicator| {
            let style = IndicatorStyle {
                active: indicator.active,
            };
            button(Space::new())
                .width(Length::Fixed(INDICATOR_SIZE))
                .height(Length::Fixed(INDICATOR_SIZE))
                .padding(0)
                .style(move |_theme, status| style.appearance(status))
                .on_press(on_message(CarouselMessage::Input(
                    InputEvent::IndicatorClicked(indicator.index),
                )))
                .into()
        })
        .collect();

    container(Row::from_vec(dots).spacing(INDICATOR_SPACING))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
