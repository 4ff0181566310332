//! Frame encoding and export.
//!
//! Canvases are encoded through a [`FrameEncoder`](encoder::FrameEncoder) and written as a
//! numbered sequence; a finished sequence can optionally be assembled into an MP4.

/// Encoder trait and built-in encoders.
pub mod encoder;
/// Numbered still-image export.
pub mod export;
/// `ffmpeg`-based MP4 assembly (system `ffmpeg` binary).
pub mod ffmpeg;
