// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Primary action button (submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Destructive action button (clear all).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ERROR_500,
        _ => palette::ERROR_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ERROR_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Low-emphasis button (navbar, details toggle).
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => Some(Background::Color(extended.background.weak.color)),
        _ => None,
    };
    button::Style {
        background,
        text_color: theme.palette().text,
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Bordered panel on the theme's weak background.
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

/// Monospace-looking code block background for example snippets.
pub fn code_block(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}
