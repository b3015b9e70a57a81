// SPDX-License-Identifier: MPL-2.0
//! Rendered-animation state: the downloaded bytes, their scratch file, and
//! in-app playback.
//!
//! The scratch file is the desktop analog of the browser object URL. It is
//! owned by [`RenderedAnimation`] and deleted when the animation is replaced
//! or the application exits, so results never accumulate on disk.

pub mod decoder;

pub use decoder::{DecodedAnimation, PreviewError};

use iced::widget::image;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Default file name offered by the save dialog.
pub const DOWNLOAD_FILE_NAME: &str = "animation.mp4";

/// A successfully downloaded animation.
#[derive(Debug)]
pub struct RenderedAnimation {
    bytes: Vec<u8>,
    file: NamedTempFile,
}

impl RenderedAnimation {
    /// Stores the downloaded bytes and mirrors them into a scratch file for
    /// the frame decoder.
    pub fn new(bytes: Vec<u8>) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("tikzmotion-")
            .suffix(".mp4")
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(Self { bytes, file })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Path of the scratch file backing this animation.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Writes the exact downloaded bytes to a user-chosen location.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, &self.bytes)
    }
}

/// Preview panel state: the animation plus decoded frames and playback.
#[derive(Debug)]
pub struct Preview {
    animation: RenderedAnimation,
    frames: Option<DecodedAnimation>,
    current_frame: usize,
    playing: bool,
    decode_failed: bool,
}

impl Preview {
    pub fn new(animation: RenderedAnimation) -> Self {
        Self {
            animation,
            frames: None,
            current_frame: 0,
            playing: false,
            decode_failed: false,
        }
    }

    pub fn animation(&self) -> &RenderedAnimation {
        &self.animation
    }

    /// Installs decoded frames and starts playback from the beginning.
    pub fn set_frames(&mut self, frames: DecodedAnimation) {
        self.current_frame = 0;
        self.playing = frames.frames.len() > 1;
        self.frames = Some(frames);
        self.decode_failed = false;
    }

    /// Frame decoding is best effort; the download stays available.
    pub fn mark_decode_failed(&mut self) {
        self.frames = None;
        self.playing = false;
        self.decode_failed = true;
    }

    pub fn decode_failed(&self) -> bool {
        self.decode_failed
    }

    pub fn is_decoding(&self) -> bool {
        self.frames.is_none() && !self.decode_failed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle_playback(&mut self) {
        if self.frames.is_some() {
            self.playing = !self.playing;
        }
    }

    /// The handle to display for the current playback position.
    pub fn current_handle(&self) -> Option<&image::Handle> {
        self.frames
            .as_ref()
            .and_then(|decoded| decoded.frames.get(self.current_frame))
    }

    /// Advances playback by one frame, wrapping at the end.
    pub fn advance_frame(&mut self) {
        if let Some(decoded) = &self.frames {
            if !decoded.frames.is_empty() {
                self.current_frame = (self.current_frame + 1) % decoded.frames.len();
            }
        }
    }

    /// Time between frames while playing, `None` when playback is idle.
    pub fn frame_interval(&self) -> Option<Duration> {
        if !self.playing {
            return None;
        }
        self.frames
            .as_ref()
            .map(|decoded| Duration::from_secs_f64(1.0 / f64::from(decoded.frame_rate.max(1.0))))
    }
}
