// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::form;
use crate::preview::{DecodedAnimation, PreviewError};
use crate::submission::SubmissionError;
use crate::ui::{help, notifications};
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Command-line flags resolved by `main.rs` and consumed once at boot.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (`--lang`), takes precedence over the config file.
    pub language: Option<String>,
    /// Backend base URL override (`--endpoint`).
    pub endpoint: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    SwitchScreen(Screen),
    Help(help::Message),
    Notification(notifications::Message),
    /// Submit the current form state to the backend.
    Submit,
    /// A submission finished. `seq` identifies which submission; completions
    /// for anything but the most recently issued one are discarded.
    SubmissionCompleted {
        seq: u64,
        result: Result<Vec<u8>, SubmissionError>,
    },
    /// Frame decoding of the rendered animation finished.
    PreviewDecoded {
        seq: u64,
        result: Result<DecodedAnimation, PreviewError>,
    },
    ToggleErrorDetails,
    /// Open the save dialog for the rendered animation.
    Download,
    SaveDialogResult(Option<PathBuf>),
    TogglePlayback,
    /// Playback timer tick.
    FrameTick(Instant),
    /// Notification auto-dismiss tick.
    NotificationTick(Instant),
    /// Startup reachability probe finished.
    HealthChecked(bool),
}
