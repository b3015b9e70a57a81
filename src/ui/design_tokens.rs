// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, and type scale.
//!
//! Tokens are shared across every view module so the form, preview, and
//! help screens stay visually consistent.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand
    pub const PRIMARY_500: Color = Color::from_rgb(0.20, 0.45, 0.80);
    pub const PRIMARY_400: Color = Color::from_rgb(0.30, 0.55, 0.88);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.35, 0.65);

    // Semantic
    pub const SUCCESS_500: Color = Color::from_rgb(0.25, 0.65, 0.35);
    pub const INFO_500: Color = Color::from_rgb(0.25, 0.55, 0.85);
    pub const WARNING_500: Color = Color::from_rgb(0.90, 0.60, 0.15);
    pub const ERROR_500: Color = Color::from_rgb(0.85, 0.25, 0.25);
    pub const ERROR_600: Color = Color::from_rgb(0.70, 0.18, 0.18);
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Component sizes.
pub mod sizing {
    /// Height of the TikZ source editors.
    pub const EDITOR_HEIGHT: f32 = 120.0;
    /// Height of the shared styles editor.
    pub const STYLES_EDITOR_HEIGHT: f32 = 90.0;
    /// Width of the preview playback surface.
    pub const PREVIEW_WIDTH: f32 = 480.0;
}

/// Font size scale.
pub mod typography {
    pub const TITLE: f32 = 24.0;
    pub const HEADING: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const LABEL: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

/// Border radii.
pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}
