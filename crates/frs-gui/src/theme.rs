//! Theme for Fracture Risk Studio.
//!
//! Spacing constants, the color set, and widget style functions. The accent
//! is the warm clinical orange of the questionnaire design (`#c85c36`).

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Large radius - cards
pub const BORDER_RADIUS_LG: f32 = 10.0;

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;

/// Warm clinical accent, #c85c36.
pub const ACCENT: Color = Color {
    r: 0.78,
    g: 0.36,
    b: 0.21,
    a: 1.0,
};

/// Accent hover shade.
pub const ACCENT_HOVER: Color = Color {
    r: 0.70,
    g: 0.31,
    b: 0.17,
    a: 1.0,
};

/// Accent pressed shade.
pub const ACCENT_PRESSED: Color = Color {
    r: 0.62,
    g: 0.27,
    b: 0.14,
    a: 1.0,
};

/// Pale accent tint for ghost-button hover.
pub const ACCENT_TINT: Color = Color {
    r: 0.98,
    g: 0.93,
    b: 0.90,
    a: 1.0,
};

/// Page background, #f8fafc.
pub const PAGE: Color = Color {
    r: 0.97,
    g: 0.98,
    b: 0.99,
    a: 1.0,
};

/// Card border, #e6e9ee.
pub const BORDER: Color = Color {
    r: 0.90,
    g: 0.91,
    b: 0.93,
    a: 1.0,
};

/// Muted text, #6b7280.
pub const GRAY_500: Color = Color {
    r: 0.42,
    g: 0.45,
    b: 0.50,
    a: 1.0,
};

/// Secondary text.
pub const GRAY_700: Color = Color {
    r: 0.30,
    g: 0.30,
    b: 0.35,
    a: 1.0,
};

/// Primary text.
pub const GRAY_900: Color = Color {
    r: 0.10,
    g: 0.10,
    b: 0.12,
    a: 1.0,
};

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the application theme.
pub fn studio_theme() -> Theme {
    Theme::custom(
        "Clinical Light".to_owned(),
        Palette {
            background: PAGE,
            text: GRAY_900,
            primary: ACCENT,
            success: Color {
                r: 0.20,
                g: 0.70,
                b: 0.40,
                a: 1.0,
            },
            warning: Color {
                r: 0.95,
                g: 0.65,
                b: 0.05,
                a: 1.0,
            },
            danger: Color {
                r: 0.85,
                g: 0.25,
                b: 0.25,
                a: 1.0,
            },
        },
    )
}

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => ACCENT,
        button::Status::Hovered => ACCENT_HOVER,
        button::Status::Pressed => ACCENT_PRESSED,
        button::Status::Disabled => BORDER,
    };

    button::Style {
        background: Some(background.into()),
        text_color: WHITE,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color {
                a: 0.08,
                ..GRAY_900
            },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Ghost button style - minimal visual weight.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(ACCENT_TINT.into()),
        button::Status::Pressed => Some(BORDER.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: GRAY_700,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Default text input style.
pub fn text_input_default(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 2.0,
            color: ACCENT,
        },
        _ => Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: BORDER,
        },
    };

    text_input::Style {
        background: WHITE.into(),
        border,
        icon: GRAY_500,
        placeholder: GRAY_500,
        value: GRAY_900,
        selection: ACCENT_TINT,
    }
}

/// Card container style - white panel with a subtle border.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: BORDER,
        },
        ..Default::default()
    }
}
