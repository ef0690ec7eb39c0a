//! Slide strip widget
//!
//! A clipped horizontal strip that places each item at its natural slot plus
//! a translation given in percent of an item width, and turns mouse and touch
//! input on the frame into [`InputEvent`]s.
//!
//! ```text
//!            frame (clipped)
//!         ┌──────────────────┐
//!  [ 0 ]  │ [ 1 ] [ 2 ] [ 3 ]│ [ 4 ]      offset -100%, 3 visible
//!         └──────────────────┘
//! ```
//!
//! Items get events before the strip, so buttons inside a slide keep
//! working; a press they capture does not start a drag.
//!
//! Arrow keys are handled here as well. iced hands keyboard events to every
//! widget in the tree, so the strip hears them wherever focus is for as long
//! as it is mounted, and captures them so nothing after it reacts.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Tree, Widget};
use iced::advanced::{Clipboard, Renderer as _, Shell};
use iced::keyboard::{self, key::Named, Key};
use iced::{mouse, touch, Element, Event, Length, Point, Rectangle, Size, Theme};

use glide_core::layout::item_width;
use glide_core::{ArrowKey, Direction, InputEvent, PointerKind, SPAN_WIDTH};

use crate::theme::FALLBACK_ITEM_WIDTH;

/// Pointer currently holding the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Default)]
struct State {
    held: Option<Held>,
}

/// Horizontal strip of translated items
pub struct SlideStrip<'a, Message> {
    items: Vec<Element<'a, Message>>,
    offsets: Vec<f32>,
    visible_count: usize,
    direction: Direction,
    height: Length,
    on_input: Box<dyn Fn(InputEvent) -> Message + 'a>,
}

impl<'a, Message> SlideStrip<'a, Message> {
    /// Create a strip; `offsets[i]` is the translation of `items[i]`
    pub fn new(
        items: Vec<Element<'a, Message>>,
        offsets: Vec<f32>,
        on_input: impl Fn(InputEvent) -> Message + 'a,
    ) -> Self {
        Self {
            items,
            offsets,
            visible_count: 1,
            direction: Direction::LeftToRight,
            height: Length::Shrink,
            on_input: Box::new(on_input),
        }
    }

    /// Items per page (each item is `1 / visible_count` of the frame wide)
    pub fn visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count.max(1);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Left edge of item `index` relative to the frame, in pixels
    fn item_x(&self, index: usize, frame_width: f32, width: f32) -> f32 {
        let natural = if self.direction.is_rtl() {
            frame_width - (index + 1) as f32 * width
        } else {
            index as f32 * width
        };
        let offset = self.offsets.get(index).copied().unwrap_or(0.0);
        natural + offset / SPAN_WIDTH * width
    }
}

impl<'a, Message> Widget<Message, Theme, iced::Renderer> for SlideStrip<'a, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, self.height)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.items.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.items);
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(Length::Fill).height(self.height);
        let max = limits.max();

        let (frame_width, width) = frame_and_item_width(max.width, self.visible_count, || {
            let natural = layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, max.height));
            self.items
                .iter_mut()
                .zip(tree.children.iter_mut())
                .map(|(item, state)| {
                    item.as_widget_mut()
                        .layout(state, renderer, &natural)
                        .size()
                        .width
                })
                .fold(0.0, f32::max)
        });

        let item_limits = layout::Limits::new(Size::new(width, 0.0), Size::new(width, max.height));
        let nodes: Vec<layout::Node> = self
            .items
            .iter_mut()
            .zip(tree.children.iter_mut())
            .map(|(item, state)| item.as_widget_mut().layout(state, renderer, &item_limits))
            .collect();

        let content_height = nodes
            .iter()
            .map(|node| node.size().height)
            .fold(0.0, f32::max);
        let height = limits
            .resolve(Length::Fill, self.height, Size::new(frame_width, content_height))
            .height;
        let size = Size::new(frame_width, height);

        let children = nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| node.move_to(Point::new(self.item_x(index, size.width, width), 0.0)))
            .collect();

        layout::Node::with_children(size, children)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &iced::Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        for ((item, state), child) in self
            .items
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
        {
            item.as_widget_mut()
                .update(state, event, child, cursor, renderer, clipboard, shell, viewport);
        }

        let state = tree.state.downcast_mut::<State>();
        let input = strip_input(
            event,
            shell.is_event_captured(),
            &mut state.held,
            layout.bounds(),
            cursor,
        );

        if let Some(input) = input {
            shell.publish((self.on_input)(input));
            shell.capture_event();
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            for ((item, state), child) in self.items.iter().zip(&tree.children).zip(layout.children()) {
                // Off-frame items are skipped entirely
                if child.bounds().intersects(&clip) {
                    item.as_widget()
                        .draw(state, renderer, theme, style, child, cursor, &clip);
                }
            }
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if tree.state.downcast_ref::<State>().held == Some(Held::Mouse) {
            return mouse::Interaction::Grabbing;
        }

        let interaction = self
            .items
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((item, state), child)| {
                item.as_widget()
                    .mouse_interaction(state, child, cursor, viewport, renderer)
            })
            .max()
            .unwrap_or_default();

        if interaction == mouse::Interaction::default() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            interaction
        }
    }
}

/// Frame width and item width for the given horizontal limit
///
/// A bounded frame is split evenly between the visible items. An unbounded
/// one (e.g. inside a horizontal scrollable) is sized from the widest item,
/// or [`FALLBACK_ITEM_WIDTH`] when the items have no natural width either.
fn frame_and_item_width(
    max_width: f32,
    visible_count: usize,
    widest_item: impl FnOnce() -> f32,
) -> (f32, f32) {
    let visible_count = visible_count.max(1);
    if max_width.is_finite() {
        return (max_width, item_width(max_width, visible_count));
    }

    let widest = widest_item();
    let width = if widest.is_finite() && widest > 0.0 {
        widest
    } else {
        FALLBACK_ITEM_WIDTH
    };
    (width * visible_count as f32, width)
}

/// Translate an iced event into carousel input, tracking the held pointer
///
/// `captured` is true when a child already handled the event: it may not
/// start a drag or navigate by key, but it still ends a drag in progress.
fn strip_input(
    event: &Event,
    captured: bool,
    held: &mut Option<Held>,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<InputEvent> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if !captured => {
            arrow_key(key).map(InputEvent::Key)
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if !captured && held.is_none() =>
        {
            cursor.position_over(bounds).map(|position| {
                *held = Some(Held::Mouse);
                InputEvent::PointerPressed {
                    kind: PointerKind::Mouse,
                    x: position.x - bounds.x,
                }
            })
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if *held == Some(Held::Mouse) => {
            if bounds.contains(*position) {
                Some(InputEvent::PointerMoved {
                    kind: PointerKind::Mouse,
                    x: position.x - bounds.x,
                    frame_width: bounds.width,
                })
            } else {
                *held = None;
                Some(InputEvent::PointerLeft)
            }
        }
        Event::Mouse(mouse::Event::CursorLeft) if *held == Some(Held::Mouse) => {
            *held = None;
            Some(InputEvent::PointerLeft)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            if *held == Some(Held::Mouse) =>
        {
            *held = None;
            Some(InputEvent::PointerReleased {
                kind: PointerKind::Mouse,
            })
        }
        Event::Touch(touch::Event::FingerPressed { id, position })
            if !captured && held.is_none() && bounds.contains(*position) =>
        {
            *held = Some(Held::Finger(*id));
            Some(InputEvent::PointerPressed {
                kind: PointerKind::Touch,
                x: position.x - bounds.x,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position })
            if *held == Some(Held::Finger(*id)) =>
        {
            Some(InputEvent::PointerMoved {
                kind: PointerKind::Touch,
                x: position.x - bounds.x,
                frame_width: bounds.width,
            })
        }
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) if *held == Some(Held::Finger(*id)) => {
            *held = None;
            Some(InputEvent::PointerReleased {
                kind: PointerKind::Touch,
            })
        }
        _ => None,
    }
}

/// Map an iced key to a carousel arrow key
pub fn arrow_key(key: &Key) -> Option<ArrowKey> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(ArrowKey::Left),
        Key::Named(Named::ArrowRight) => Some(ArrowKey::Right),
        _ => None,
    }
}

impl<'a, Message: 'a> From<SlideStrip<'a, Message>> for Element<'a, Message> {
    fn from(strip: SlideStrip<'a, Message>) -> Self {
        Element::new(strip)
    }
}
