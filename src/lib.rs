// SPDX-License-Identifier: MPL-2.0
//! `tikzmotion` is a desktop front end for a TikZ animation rendering
//! service, built with the Iced GUI framework.
//!
//! Users enter shared TikZ styles and a sequence of diagrams, submit them to
//! the backend, and preview or save the rendered MP4 animation. The crate
//! demonstrates internationalization with Fluent, a small config layer, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/tikzmotion/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod preview;
pub mod submission;
pub mod ui;
