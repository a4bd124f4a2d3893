//! Tests for the presentation formatting contract.

use frs_gui::util::{fmt_compact, fmt_percent, fmt_t_score, summary_line};
use frs_model::{Model, NumericField, RiskFactor};

#[test]
fn fmt_compact_drops_trailing_zero() {
    assert_eq!(fmt_compact(19.0), "19");
    assert_eq!(fmt_compact(2.1), "2.1");
    assert_eq!(fmt_compact(0.0), "0");
    assert_eq!(fmt_compact(-2.3), "-2.3");
}

#[test]
fn fmt_percent_uses_em_dash_when_unset() {
    assert_eq!(fmt_percent(None), "\u{2014}");
    assert_eq!(fmt_percent(Some(2.1)), "2.1%");
    assert_eq!(fmt_percent(Some(1.0)), "1%");
}

#[test]
fn t_score_field_renders_empty_when_absent() {
    assert_eq!(fmt_t_score(None), "");
    assert_eq!(fmt_t_score(Some(-2.74)), "-2.74");
}

/// The clipboard summary before any computation: em-dashes for both results.
#[test]
fn summary_line_unset() {
    let model = Model::new();
    assert_eq!(
        summary_line(&model.snapshot()),
        "Age:65,BMI:19,Major:\u{2014},Hip:\u{2014}"
    );
}

/// After computing on the defaults, the summary carries the numbers.
#[test]
fn summary_line_computed() {
    let mut model = Model::new();
    model.compute();
    assert_eq!(
        summary_line(&model.snapshot()),
        "Age:65,BMI:19,Major:2.1,Hip:1"
    );
}

/// Editing an input clears the result, and the summary reflects that
/// immediately.
#[test]
fn summary_line_tracks_invalidation() {
    let mut model = Model::new();
    model.compute();
    model.set_field(NumericField::Age, "70");
    model.toggle_flag(RiskFactor::PreviousFracture);

    assert_eq!(
        summary_line(&model.snapshot()),
        "Age:70,BMI:19,Major:\u{2014},Hip:\u{2014}"
    );
}
