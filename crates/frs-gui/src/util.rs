//! Presentation formatting helpers.

use frs_model::Snapshot;

/// Placeholder shown for an unset result (em-dash). Also the literal used
/// in the clipboard summary - a user-facing contract, do not change.
pub const UNSET: &str = "\u{2014}";

/// Formats a one-decimal value compactly: `19.0` renders as `19`, `2.1`
/// stays `2.1`. Matches how the results and summary have always rendered.
pub fn fmt_compact(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x:.1}")
    }
}

/// Formats a result readout: `—` when unset, otherwise `value%`.
pub fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", fmt_compact(v)),
        None => UNSET.to_owned(),
    }
}

/// Formats the T-score for the input field: empty when no BMD is available.
pub fn fmt_t_score(t_score: Option<f64>) -> String {
    match t_score {
        Some(t) => t.to_string(),
        None => String::new(),
    }
}

/// Serializes the one-line clipboard summary:
/// `Age:{age},BMI:{bmi},Major:{major|—},Hip:{hip|—}`.
pub fn summary_line(snapshot: &Snapshot) -> String {
    let (major, hip) = match snapshot.result {
        Some(estimate) => (fmt_compact(estimate.major), fmt_compact(estimate.hip)),
        None => (UNSET.to_owned(), UNSET.to_owned()),
    };
    format!(
        "Age:{},BMI:{},Major:{},Hip:{}",
        snapshot.age,
        fmt_compact(snapshot.bmi),
        major,
        hip
    )
}
