//! Main application module for Fracture Risk Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state lives in the [`frs_model::Model`]; the view reads it through
//! `snapshot()` and never caches input values of its own. Each message maps
//! onto exactly one model command.

use iced::{Element, Task, Theme};

use frs_model::{Model, NumericField};

use crate::message::Message;
use crate::util::summary_line;
use crate::view::view_calculator;

/// Main application struct.
pub struct App {
    /// The calculator model - the single owner of form state.
    model: Model,
}

impl App {
    /// Create a new application instance with questionnaire defaults.
    pub fn new() -> (Self, Task<Message>) {
        (Self { model: Model::new() }, Task::none())
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Fracture Risk Studio".to_owned()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        crate::theme::studio_theme()
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen
    /// here, by forwarding to the model. Clipboard access is fire-and-forget:
    /// a failed write leaves the clipboard unchanged and is otherwise ignored.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AgeChanged(raw) => {
                self.model.set_field(NumericField::Age, &raw);
                Task::none()
            }
            Message::WeightChanged(raw) => {
                self.model.set_field(NumericField::Weight, &raw);
                Task::none()
            }
            Message::HeightChanged(raw) => {
                self.model.set_field(NumericField::Height, &raw);
                Task::none()
            }
            Message::TScoreChanged(raw) => {
                self.model.set_field(NumericField::TScore, &raw);
                Task::none()
            }
            Message::SexSelected(sex) => {
                self.model.set_sex(sex);
                Task::none()
            }
            Message::FlagToggled(factor) => {
                self.model.toggle_flag(factor);
                Task::none()
            }
            Message::Calculate => {
                self.model.compute();
                Task::none()
            }
            Message::Reset => {
                self.model.reset();
                Task::none()
            }
            Message::CopySummary => iced::clipboard::write(summary_line(&self.model.snapshot())),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_calculator(&self.model.snapshot())
    }
}
