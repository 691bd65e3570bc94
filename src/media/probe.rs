// SPDX-License-Identifier: MPL-2.0
//! Media metadata and poster-frame probe.
//!
//! The session controller does not decode video; it only needs the
//! duration (the "metadata loaded" event of a media element) and, when
//! available, a poster frame for the player surface. Both come from one
//! FFmpeg pass over the source. FFmpeg's protocol layer handles local
//! paths and http(s) URLs alike.
//!
//! Failures are mapped onto the [`MediaError`] taxonomy so the UI can show
//! a specific message per sub-kind.

use crate::error::MediaError;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times thanks to `std::sync::Once`. The log level
/// is set to ERROR to suppress noisy container warnings.
fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result: Result<(), MediaError> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::from_message(&format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// First decoded frame of the source, converted to RGBA for display.
#[derive(Debug, Clone)]
pub struct PosterFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Everything the session needs to know about a source before playing it.
#[derive(Debug, Clone)]
pub struct MediaIntake {
    /// Duration in seconds; 0 when the container does not report one.
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
    pub has_audio: bool,
    /// Poster frame, when the first frame could be decoded.
    pub poster: Option<PosterFrame>,
}

/// Probes a media source for metadata and a poster frame.
///
/// # Errors
///
/// Returns a [`MediaError`] categorizing what went wrong (network,
/// unsupported, decode, aborted). Poster extraction failures are not
/// errors; the intake simply carries no poster.
pub fn load(url: &str) -> Result<MediaIntake, MediaError> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&url)
        .map_err(|e| MediaError::from_message(&e.to_string()))?;

    let (video_stream_index, duration_secs, width, height) = {
        let video_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| MediaError::Unsupported("No video stream found".to_string()))?;

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
                .map_err(|e| MediaError::from_message(&e.to_string()))?;
        let decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| MediaError::from_message(&e.to_string()))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(MediaError::Unsupported(format!(
                "Invalid video dimensions: {width}x{height}"
            )));
        }

        // Stream duration first, container duration as fallback
        let duration_secs = if video_stream.duration() > 0 {
            let time_base = video_stream.time_base();
            video_stream.duration() as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator())
        } else if ictx.duration() > 0 {
            ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            0.0
        };

        (video_stream.index(), duration_secs, width, height)
    };

    let has_audio = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .is_some();

    let poster = extract_poster(&mut ictx, video_stream_index).ok();

    Ok(MediaIntake {
        duration_secs,
        width,
        height,
        has_audio,
        poster,
    })
}

/// Decodes the first frame of the video stream as an RGBA poster.
fn extract_poster(
    ictx: &mut ffmpeg_next::format::context::Input,
    video_stream_index: usize,
) -> Result<PosterFrame, MediaError> {
    let parameters = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| MediaError::Unsupported("No video stream found".to_string()))?
        .parameters();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(parameters)
        .map_err(|e| MediaError::from_message(&e.to_string()))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| MediaError::from_message(&e.to_string()))?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| MediaError::from_message(&e.to_string()))?;

    let mut rgb_frame = ffmpeg_next::frame::Video::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() == video_stream_index {
            decoder
                .send_packet(&packet)
                .map_err(|e| MediaError::from_message(&e.to_string()))?;

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded).is_ok() {
                scaler
                    .run(&decoded, &mut rgb_frame)
                    .map_err(|e| MediaError::from_message(&e.to_string()))?;
                break;
            }
        }
    }

    if rgb_frame.data(0).is_empty() {
        return Err(MediaError::Decode("Could not decode first frame".to_string()));
    }

    let width = rgb_frame.width();
    let height = rgb_frame.height();
    let data = rgb_frame.data(0);
    let stride = rgb_frame.stride(0);

    // Copy frame data row by row (the stride may exceed the row width)
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = (y as usize) * stride;
        let row_end = row_start + (width * 4) as usize;
        rgba.extend_from_slice(&data[row_start..row_end]);
    }

    Ok(PosterFrame {
        width,
        height,
        rgba,
    })
}
