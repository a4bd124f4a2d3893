//! Message types for Fracture Risk Studio.
//!
//! All user interactions flow through [`Message`]; the `update` function
//! maps each variant onto exactly one model command.

use frs_model::{RiskFactor, Sex};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Age field edited (raw text; the model coerces)
    AgeChanged(String),

    /// Weight field edited (raw text)
    WeightChanged(String),

    /// Height field edited (raw text)
    HeightChanged(String),

    /// T-score field edited (raw text; empty means "no BMD")
    TScoreChanged(String),

    /// Sex radio selected
    SexSelected(Sex),

    /// One risk-factor checkbox toggled
    FlagToggled(RiskFactor),

    /// Calculate / Recalculate pressed
    Calculate,

    /// Reset pressed - back to questionnaire defaults
    Reset,

    /// Copy summary pressed - write the one-line summary to the clipboard
    CopySummary,
}
