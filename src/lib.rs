//! framereel renders step-by-step puzzle visualizations into numbered image sequences.
//!
//! - Implement [`Visualizer`] for the state you want to show
//! - Draw with the clipping primitives on [`Canvas`] (rects, lines, circles, bitmap text)
//! - Hand it to a [`VisualizationDriver`], which annotates and exports every frame through a
//!   [`FrameEncoder`], and optionally assemble the sequence into an MP4
#![forbid(unsafe_code)]

mod foundation;
mod raster;

/// Run configuration loaded from JSON.
pub mod config;
/// Built-in demo visualizers.
pub mod demos;
pub mod encode;
pub mod visualize;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Point, Point2D, Rect, Size};
pub use crate::foundation::error::{VisError, VisResult};
pub use crate::raster::canvas::Canvas;
pub use crate::raster::font::{Font, FontMetrics, Glyph};
pub use crate::raster::frame::Frame;

pub use crate::config::RunConfig;
pub use crate::encode::encoder::{
    CapturedFrame, CapturingEncoder, FrameEncoder, PngCompression, PngEncoder,
};
pub use crate::encode::export::{
    FrameExporter, export_frame, frame_file_name, reset_output_dir, upscale_nearest,
};
pub use crate::encode::ffmpeg::{Mp4Opts, assemble_mp4, is_ffmpeg_on_path};
pub use crate::visualize::driver::{DriverOpts, RunStats, VisualizationDriver, visualize_to_png};
pub use crate::visualize::visualizer::Visualizer;
