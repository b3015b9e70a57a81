// SPDX-License-Identifier: MPL-2.0
//! UI building blocks shared by the application screens.

pub mod design_tokens;
pub mod error_panel;
pub mod help;
pub mod navbar;
pub mod notifications;
pub mod styles;
