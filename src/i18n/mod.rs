// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation catalogs are embedded at
//! compile time and the active locale is resolved from the CLI, the config
//! file, or the operating system, in that order.

pub mod fluent;
