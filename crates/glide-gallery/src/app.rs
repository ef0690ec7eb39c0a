//! Gallery application state, update and view

use std::path::PathBuf;
use std::time::Instant;

use iced::widget::{button, center, column, container, row, text, Space};
use iced::{Alignment, Color, Element, Length, Subscription, Task, Theme};

use glide_core::{CarouselResult, Navigation};
use glide_widgets::{subscription, CarouselMessage, CarouselState};

use crate::config::{save_config, GalleryConfig, SlideConfig};

#[derive(Debug, Clone)]
pub enum Message {
    /// Input from the carousel widget
    Carousel(CarouselMessage),
    Previous,
    Next,
    /// Flip between left-to-right and right-to-left
    ToggleDirection,
    /// Mount or unmount the carousel
    ToggleShown,
    SaveConfig,
}

/// Gallery application
pub struct GalleryApp {
    config: GalleryConfig,
    config_path: PathBuf,
    carousel: CarouselState,
    /// Whether the carousel is mounted (it only hears arrow keys while mounted)
    shown: bool,
    status: String,
}

impl GalleryApp {
    pub fn new(config: GalleryConfig, config_path: PathBuf) -> CarouselResult<Self> {
        let carousel = CarouselState::new(config.carousel.clone(), config.slides.len())?;
        Ok(Self {
            config,
            config_path,
            carousel,
            shown: true,
            status: String::new(),
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Carousel(msg) => {
                if let Some(navigation) = self.carousel.update(msg, now) {
                    log::debug!("carousel: {:?}, showing slide {}", navigation, self.carousel.active());
                }
            }
            Message::Previous => {
                self.carousel.navigate(Navigation::Previous, now);
            }
            Message::Next => {
                self.carousel.navigate(Navigation::Next, now);
            }
            Message::ToggleDirection => {
                let direction = self.carousel.carousel().direction().flipped();
                self.carousel.set_direction(direction, now);
                self.config.carousel.direction = direction;
                self.status = format!("Direction: {}", direction);
            }
            Message::ToggleShown => {
                self.shown = !self.shown;
                log::info!("carousel {}", if self.shown { "mounted" } else { "unmounted" });
            }
            Message::SaveConfig => {
                self.status = match save_config(&self.config, &self.config_path) {
                    Ok(()) => format!("Saved to {}", self.config_path.display()),
                    Err(e) => {
                        log::error!("Failed to save config: {:#}", e);
                        format!("Save failed: {}", e)
                    }
                };
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("glide gallery").size(24),
            Space::new().width(Length::Fill),
            button(text("◀")).on_press(Message::Previous),
            button(text("▶")).on_press(Message::Next),
            button(text(self.carousel.carousel().direction().to_string()))
                .on_press(Message::ToggleDirection)
                .style(button::secondary),
            button(text(if self.shown { "Hide" } else { "Show" }))
                .on_press(Message::ToggleShown)
                .style(button::secondary),
            button(text("Save")).on_press(Message::SaveConfig).style(button::secondary),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let body: Element<'_, Message> = if self.shown {
            let slides = self
                .config
                .slides
                .iter()
                .enumerate()
                .map(|(index, slide)| slide_view(index, self.config.slides.len(), slide))
                .collect();
            glide_widgets::carousel(
                &self.carousel,
                slides,
                self.config.strip_height,
                Message::Carousel,
            )
        } else {
            center(text("Carousel hidden: arrow keys are not captured").size(14))
                .height(Length::Fixed(self.config.strip_height))
                .into()
        };

        let footer = text(format!(
            "Slide {} of {}   {}",
            self.carousel.active() + 1,
            self.carousel.len(),
            self.status
        ))
        .size(12);

        column![header, body, footer].spacing(16).padding(20).into()
    }

    /// Animation frames, only while the carousel is mounted
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.shown {
            return Subscription::none();
        }
        subscription::animation(&self.carousel).map(Message::Carousel)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A single slide: title and position on a colored panel
fn slide_view<'a>(index: usize, count: usize, slide: &'a SlideConfig) -> Element<'a, Message> {
    let [r, g, b] = slide.color;
    let background = Color::from_rgb(r, g, b);

    container(
        column![
            text(&slide.title).size(32).color(Color::WHITE),
            text(format!("{} / {}", index + 1, count))
                .size(14)
                .color(Color::from_rgba(1.0, 1.0, 1.0, 0.7)),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(8)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(move |_| container::Style {
        background: Some(background.into()),
        border: iced::Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::{ArrowKey, Direction, InputEvent};

    fn app() -> GalleryApp {
        GalleryApp::new(GalleryConfig::default(), PathBuf::from("unused.yaml")).unwrap()
    }

    #[test]
    fn test_buttons_navigate() {
        let mut app = app();
        let _ = app.update(Message::Next);
        let _ = app.update(Message::Next);
        assert_eq!(app.carousel.active(), 2);
        let _ = app.update(Message::Previous);
        assert_eq!(app.carousel.active(), 1);
    }

    #[test]
    fn test_keyboard_message() {
        let mut app = app();
        let _ = app.update(Message::Carousel(CarouselMessage::Input(InputEvent::Key(
            ArrowKey::Right,
        ))));
        assert_eq!(app.carousel.active(), 1);
    }

    #[test]
    fn test_toggle_direction_updates_config() {
        let mut app = app();
        let _ = app.update(Message::ToggleDirection);
        assert_eq!(app.config.carousel.direction, Direction::RightToLeft);
        assert_eq!(app.carousel.carousel().direction(), Direction::RightToLeft);
    }

    #[test]
    fn test_toggle_shown() {
        let mut app = app();
        assert!(app.shown);
        let _ = app.update(Message::ToggleShown);
        assert!(!app.shown);
    }

    #[test]
    fn test_save_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.yaml");
        let mut app = GalleryApp::new(GalleryConfig::default(), path.clone()).unwrap();
        let _ = app.update(Message::SaveConfig);
        assert!(path.exists());
        assert_eq!(crate::config::load_config(&path), GalleryConfig::default());
    }
}
