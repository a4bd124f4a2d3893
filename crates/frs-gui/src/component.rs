//! Form field components.
//!
//! Small labeled-input helpers shared by the questionnaire view.

use iced::widget::{Space, checkbox, column, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::theme::{GRAY_500, GRAY_700, GRAY_900, SPACING_XS, text_input_default};

/// Creates a labeled input field.
///
/// The value is always the formatted model value; the field never keeps
/// text of its own.
pub fn labeled_input<'a, M: Clone + 'a>(
    label: &'a str,
    value: &str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let label_text = text(label).size(13).color(GRAY_700);

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(text_input_default);

    column![label_text, input].spacing(SPACING_XS).into()
}

/// Creates a labeled input with a muted hint line underneath.
pub fn labeled_input_with_hint<'a, M: Clone + 'a>(
    label: &'a str,
    value: &str,
    placeholder: &'a str,
    hint: &'a str,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let field = labeled_input(label, value, placeholder, on_change);
    let hint_text = text(hint).size(12).color(GRAY_500);

    column![field, hint_text].spacing(SPACING_XS).into()
}

/// Creates a checkbox with a trailing label.
pub fn checkbox_row<'a, M: Clone + 'a>(
    label: &'a str,
    checked: bool,
    on_toggle: impl Fn(bool) -> M + 'a,
) -> Element<'a, M> {
    row![
        checkbox(checked).on_toggle(on_toggle),
        Space::new().width(SPACING_XS),
        text(label).size(14).color(GRAY_900),
    ]
    .align_y(Alignment::Center)
    .into()
}
