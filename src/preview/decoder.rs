// SPDX-License-Identifier: MPL-2.0
//! One-shot decoding of the rendered MP4 into RGBA frames for playback.
//!
//! The backend renders short, low-resolution animations, so decoding the
//! whole clip into memory up front is cheap and keeps playback trivial.
//! The frame count is still capped to bound memory on unexpected input.

use ffmpeg_next as ffmpeg;
use iced::widget::image;
use std::fmt;
use std::path::Path;

/// Upper bound on frames held in memory (one minute at the backend's 15 fps).
pub const MAX_PREVIEW_FRAMES: usize = 900;

/// Frame rate assumed when the container does not declare one.
const FALLBACK_FPS: f32 = 15.0;

/// A fully decoded animation, ready for timed display.
#[derive(Debug, Clone)]
pub struct DecodedAnimation {
    pub frames: Vec<image::Handle>,
    pub frame_rate: f32,
    pub width: u32,
    pub height: u32,
}

/// Reasons the preview decode can fail. Decoding is best effort: these are
/// reported as a notification, never as the submission error panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The payload contains no video stream.
    NoVideoStream,
    /// The payload could not be read or decoded.
    Decode(String),
}

impl PreviewError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PreviewError::NoVideoStream => "notification-preview-no-stream",
            PreviewError::Decode(_) => "notification-preview-decode-error",
        }
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::NoVideoStream => write!(f, "no video stream in payload"),
            PreviewError::Decode(msg) => write!(f, "decoding failed: {}", msg),
        }
    }
}

impl std::error::Error for PreviewError {}

fn decode_error(err: ffmpeg::Error) -> PreviewError {
    PreviewError::Decode(err.to_string())
}

/// Decodes the animation at `path` into RGBA frames.
pub fn decode(path: &Path) -> Result<DecodedAnimation, PreviewError> {
    ffmpeg::init().map_err(decode_error)?;

    let mut input = ffmpeg::format::input(&path).map_err(decode_error)?;

    let (stream_index, declared_rate, parameters) = {
        let stream = input
            .streams()
            .best(ffmpeg::media::Type::Video)
            .ok_or(PreviewError::NoVideoStream)?;
        (stream.index(), stream.avg_frame_rate(), stream.parameters())
    };

    let frame_rate = if declared_rate.numerator() > 0 && declared_rate.denominator() > 0 {
        declared_rate.numerator() as f32 / declared_rate.denominator() as f32
    } else {
        FALLBACK_FPS
    };

    let context =
        ffmpeg::codec::context::Context::from_parameters(parameters).map_err(decode_error)?;
    let mut decoder = context.decoder().video().map_err(decode_error)?;

    let mut scaler = ffmpeg::software::scaling::Context::get(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        ffmpeg::format::Pixel::RGBA,
        decoder.width(),
        decoder.height(),
        ffmpeg::software::scaling::Flags::BILINEAR,
    )
    .map_err(decode_error)?;

    let mut frames = Vec::new();

    for (stream, packet) in input.packets() {
        if stream.index() != stream_index {
            continue;
        }
        decoder.send_packet(&packet).map_err(decode_error)?;
        receive_frames(&mut decoder, &mut scaler, &mut frames)?;
        if frames.len() >= MAX_PREVIEW_FRAMES {
            break;
        }
    }

    if frames.len() < MAX_PREVIEW_FRAMES {
        decoder.send_eof().map_err(decode_error)?;
        receive_frames(&mut decoder, &mut scaler, &mut frames)?;
    }

    if frames.is_empty() {
        return Err(PreviewError::Decode("no frames decoded".to_string()));
    }

    let width = decoder.width();
    let height = decoder.height();

    tracing::info!(
        frames = frames.len(),
        width,
        height,
        frame_rate,
        "decoded animation preview"
    );

    Ok(DecodedAnimation {
        frames,
        frame_rate,
        width,
        height,
    })
}

fn receive_frames(
    decoder: &mut ffmpeg::decoder::Video,
    scaler: &mut ffmpeg::software::scaling::Context,
    frames: &mut Vec<image::Handle>,
) -> Result<(), PreviewError> {
    let mut decoded = ffmpeg::util::frame::Video::empty();
    while decoder.receive_frame(&mut decoded).is_ok() {
        if frames.len() >= MAX_PREVIEW_FRAMES {
            return Ok(());
        }
        let mut rgba = ffmpeg::util::frame::Video::empty();
        scaler.run(&decoded, &mut rgba).map_err(decode_error)?;
        frames.push(frame_to_handle(&rgba));
    }
    Ok(())
}

/// Copies a scaled RGBA frame into a tightly packed image handle.
///
/// FFmpeg rows carry padding (the stride), so rows are copied individually.
fn frame_to_handle(frame: &ffmpeg::util::frame::Video) -> image::Handle {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let stride = frame.stride(0);
    let data = frame.data(0);

    let row_bytes = width * 4;
    let mut pixels = Vec::with_capacity(row_bytes * height);
    for row in 0..height {
        let start = row * stride;
        pixels.extend_from_slice(&data[start..start + row_bytes]);
    }

    image::Handle::from_rgba(frame.width(), frame.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let mut file = tempfile::Builder::new()
            .suffix(".mp4")
            .tempfile()
            .expect("temp file");
        file.write_all(&[0x13_u8; 32]).expect("write");
        file.flush().expect("flush");

        let result = decode(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_fails_to_decode() {
        let result = decode(Path::new("/nonexistent/animation.mp4"));
        assert!(matches!(result, Err(PreviewError::Decode(_))));
    }
}
