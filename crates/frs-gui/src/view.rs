//! Questionnaire and results views.
//!
//! Two-card layout: the questionnaire form on the left, the results panel on
//! the right, a notes card underneath. Every control forwards exactly one
//! message; all values render straight from the model snapshot.

use iced::widget::{Column, Row, Space, button, column, container, radio, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use frs_model::{RiskFactor, Sex, Snapshot};

use crate::component::{checkbox_row, labeled_input, labeled_input_with_hint};
use crate::message::Message;
use crate::theme::{
    ACCENT, GRAY_500, GRAY_700, GRAY_900, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_ghost, button_primary, card,
};
use crate::util::{UNSET, fmt_compact, fmt_percent, fmt_t_score};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Width of the results panel.
const RESULTS_WIDTH: f32 = 340.0;

/// Maximum page width.
const PAGE_WIDTH: f32 = 980.0;

/// Non-English caption, preserved verbatim from the original questionnaire.
const CAPTION: &str = "輸入下列參數以估算 10 年主要骨折與髖部骨折機率（模擬公式）";

// =============================================================================
// MAIN VIEW FUNCTION
// =============================================================================

/// Render the calculator page.
pub fn view_calculator(snapshot: &Snapshot) -> Element<'static, Message> {
    let header = column![
        text("FRAX-like Risk Calculator (Prototype)")
            .size(26)
            .color(GRAY_900),
        text(CAPTION).size(13).color(GRAY_500),
    ]
    .spacing(SPACING_XS);

    let content = row![
        container(view_questionnaire(snapshot))
            .style(card)
            .padding(SPACING_MD)
            .width(Length::Fill),
        container(view_results(snapshot))
            .style(card)
            .padding(SPACING_MD)
            .width(RESULTS_WIDTH),
    ]
    .spacing(SPACING_LG);

    let page = column![header, content, view_notes()]
        .spacing(SPACING_MD)
        .padding(SPACING_LG)
        .max_width(PAGE_WIDTH);

    scrollable(container(page).width(Length::Fill).center_x(Length::Fill)).into()
}

// =============================================================================
// QUESTIONNAIRE CARD
// =============================================================================

fn view_questionnaire(snapshot: &Snapshot) -> Element<'static, Message> {
    let age = labeled_input(
        "Age (40-90)",
        &snapshot.age.to_string(),
        "",
        Message::AgeChanged,
    );

    let sex = column![
        text("Sex").size(13).color(GRAY_700),
        row![
            radio(
                Sex::Female.label(),
                Sex::Female,
                Some(snapshot.sex),
                Message::SexSelected
            ),
            radio(
                Sex::Male.label(),
                Sex::Male,
                Some(snapshot.sex),
                Message::SexSelected
            ),
        ]
        .spacing(SPACING_MD),
    ]
    .spacing(SPACING_XS);

    let body = row![
        container(labeled_input(
            "Weight (kg)",
            &snapshot.weight.to_string(),
            "",
            Message::WeightChanged,
        ))
        .width(Length::FillPortion(1)),
        container(labeled_input(
            "Height (cm)",
            &snapshot.height.to_string(),
            "",
            Message::HeightChanged,
        ))
        .width(Length::FillPortion(1)),
    ]
    .spacing(SPACING_SM);

    let t_score = labeled_input_with_hint(
        "T-score (optional)",
        &fmt_t_score(snapshot.t_score),
        "",
        "Example: -2.74 (leave empty for no BMD)",
        Message::TScoreChanged,
    );

    let flags = column![
        text("Risk factors").size(13).color(GRAY_700),
        view_flag_grid(snapshot),
    ]
    .spacing(SPACING_XS);

    let calculate = button(text("Calculate"))
        .on_press(Message::Calculate)
        .style(button_primary)
        .padding([SPACING_SM, SPACING_MD]);

    let reset = button(text("Reset"))
        .on_press(Message::Reset)
        .style(button_ghost)
        .padding([SPACING_SM, SPACING_MD]);

    let bmi_readout = text(format!("BMI: {}", fmt_compact(snapshot.bmi)))
        .size(13)
        .color(GRAY_500);

    let actions = row![
        calculate,
        Space::new().width(SPACING_SM),
        reset,
        Space::new().width(Length::Fill),
        bmi_readout,
    ]
    .align_y(Alignment::Center);

    column![age, sex, body, t_score, flags, actions]
        .spacing(SPACING_MD)
        .into()
}

/// Two-column checkbox grid over the seven risk factors.
fn view_flag_grid(snapshot: &Snapshot) -> Element<'static, Message> {
    let mut grid = Column::new().spacing(SPACING_XS);

    for pair in RiskFactor::ALL.chunks(2) {
        let mut line = Row::new().spacing(SPACING_MD);
        for factor in pair {
            let factor = *factor;
            line = line.push(
                container(checkbox_row(
                    factor.label(),
                    snapshot.flags.get(factor),
                    move |_| Message::FlagToggled(factor),
                ))
                .width(Length::FillPortion(1)),
            );
        }
        grid = grid.push(line);
    }

    grid.into()
}

// =============================================================================
// RESULTS CARD
// =============================================================================

fn view_results(snapshot: &Snapshot) -> Element<'static, Message> {
    let context = column![
        text(format!(
            "Age: {}    BMI: {}",
            snapshot.age,
            fmt_compact(snapshot.bmi)
        ))
        .size(13)
        .color(GRAY_500),
        text(format!(
            "T-score: {}",
            match snapshot.t_score {
                Some(t) => t.to_string(),
                None => UNSET.to_owned(),
            }
        ))
        .size(13)
        .color(GRAY_500),
    ]
    .spacing(SPACING_XS);

    let readouts = column![
        text("Estimated 10-year probability")
            .size(13)
            .color(GRAY_500),
        Space::new().height(SPACING_SM),
        text("Major osteoporotic").size(13).color(GRAY_500),
        text(fmt_percent(snapshot.result.map(|r| r.major)))
            .size(28)
            .color(ACCENT),
        Space::new().height(SPACING_SM),
        text("Hip fracture").size(13).color(GRAY_500),
        text(fmt_percent(snapshot.result.map(|r| r.hip)))
            .size(28)
            .color(ACCENT),
    ]
    .align_x(Alignment::End)
    .width(Length::Fill);

    let selected = text(format!("Risk factors selected: {}", snapshot.risk_count))
        .size(13)
        .color(GRAY_500);

    let recalculate = button(text("Recalculate"))
        .on_press(Message::Calculate)
        .style(button_primary)
        .padding([SPACING_SM, SPACING_MD]);

    let copy = button(
        row![
            lucide::clipboard().size(14),
            Space::new().width(SPACING_XS),
            text("Copy summary"),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::CopySummary)
    .style(button_ghost)
    .padding([SPACING_SM, SPACING_MD]);

    let actions = row![recalculate, Space::new().width(SPACING_SM), copy].align_y(Alignment::Center);

    column![
        context,
        readouts,
        rule::horizontal(1),
        selected,
        actions,
    ]
    .spacing(SPACING_MD)
    .into()
}

// =============================================================================
// NOTES CARD
// =============================================================================

fn view_notes() -> Element<'static, Message> {
    let body = text(
        "This is a front-end prototype. The calculation is a simplified \
         simulation for demo purposes; the official FRAX calculation requires \
         the licensed algorithm tables and coefficients.",
    )
    .size(13)
    .color(GRAY_500);

    container(column![text("Notes").size(14).color(GRAY_900), body].spacing(SPACING_XS))
        .style(card)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .into()
}
