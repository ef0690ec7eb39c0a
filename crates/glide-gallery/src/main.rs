//! Glide Gallery - demo application for the carousel widget
//!
//! Loads the gallery config, applies command line overrides and runs the
//! iced application.
//!
//! ## Command line flags
//!
//! - `--rtl`: Lay the carousel out right-to-left
//! - `--visible N`: Show N slides per page
//! - `--config PATH`: Use a config file other than the default
//! - `--write-default-config`: Write the default config to the config path and exit

mod app;
mod config;

use std::path::PathBuf;

use iced::Size;

use app::{GalleryApp, Message};
use glide_core::Direction;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("glide-gallery starting up");

    let config_path = flag_value(&args, "--config")
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    if args.iter().any(|arg| arg == "--write-default-config") {
        config::save_config(&config::GalleryConfig::default(), &config_path)?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let mut config = config::load_config(&config_path);
    if args.iter().any(|arg| arg == "--rtl") {
        config.carousel.direction = Direction::RightToLeft;
    }
    if let Some(value) = flag_value(&args, "--visible") {
        match value.parse::<usize>() {
            Ok(visible) => config.carousel.visible_count = visible,
            Err(e) => log::warn!("Ignoring --visible {:?}: {}", value, e),
        }
    }
    config.validate();

    log::info!(
        "Carousel: {} slides, {} visible, {}",
        config.slides.len(),
        config.carousel.visible_count,
        config.carousel.direction
    );

    let app = GalleryApp::new(config, config_path)?;

    // Wrap the app in a cell so the boot closure can be Fn (required by iced)
    let app_cell = std::cell::RefCell::new(Some(app));

    iced::application(
        move || {
            // Boot is only called once; take ownership from the cell
            let app = app_cell
                .borrow_mut()
                .take()
                .expect("gallery app already taken");
            (app, iced::Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Glide Gallery")
    .window_size(Size::new(960.0, 560.0))
    .run()?;

    log::info!("glide-gallery stopped");
    Ok(())
}

/// Value following `flag` on the command line
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}

fn update(app: &mut GalleryApp, message: Message) -> iced::Task<Message> {
    app.update(message)
}

fn view(app: &GalleryApp) -> iced::Element<'_, Message> {
    app.view()
}

fn subscription(app: &GalleryApp) -> iced::Subscription<Message> {
    app.subscription()
}

fn theme(app: &GalleryApp) -> iced::Theme {
    app.theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_value() {
        let args: Vec<String> = ["glide-gallery", "--visible", "3", "--rtl"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(flag_value(&args, "--visible"), Some("3"));
        assert_eq!(flag_value(&args, "--rtl"), None);
        assert_eq!(flag_value(&args, "--config"), None);
    }
}
