//! Fracture Risk Studio - Desktop GUI Application
//!
//! A desktop questionnaire estimating 10-year probabilities of major
//! osteoporotic and hip fracture from demographics, anthropometrics, an
//! optional bone-density T-score, and seven binary clinical risk factors.
//! The calculation is a placeholder heuristic, not the licensed FRAX
//! algorithm.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use frs_gui::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Fracture Risk Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(980.0, 760.0),
            min_size: Some(Size::new(760.0, 600.0)),
            ..Default::default()
        })
        .run()
}
