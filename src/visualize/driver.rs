use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    encode::{
        encoder::{FrameEncoder, PngEncoder},
        export::FrameExporter,
    },
    foundation::{
        color::Color,
        core::Size,
        error::{VisError, VisResult},
    },
    raster::{canvas::Canvas, font::Font},
    visualize::visualizer::Visualizer,
};

/// Where and how the driver overlays text on each frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DriverOpts {
    /// Title row, measured from the top.
    pub title_y: i32,
    /// Caption row, measured up from the bottom edge.
    pub caption_bottom_offset: i32,
    pub text_color: Color,
    /// Abort with an error once this many frames have been written and the visualizer still
    /// reports work left.
    pub frame_limit: Option<u64>,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self {
            title_y: 4,
            caption_bottom_offset: 10,
            text_color: Color::WHITE,
            frame_limit: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub dimensions: Size,
    pub output_dir: PathBuf,
}

/// Runs a [`Visualizer`] to completion: render, annotate, export, repeat.
#[derive(Debug)]
pub struct VisualizationDriver<E> {
    exporter: FrameExporter<E>,
    font: Arc<Font>,
    opts: DriverOpts,
}

impl<E: FrameEncoder> VisualizationDriver<E> {
    pub fn new(exporter: FrameExporter<E>, font: Arc<Font>, opts: DriverOpts) -> Self {
        Self {
            exporter,
            font,
            opts,
        }
    }

    pub fn opts(&self) -> &DriverOpts {
        &self.opts
    }

    pub fn exporter(&self) -> &FrameExporter<E> {
        &self.exporter
    }

    pub fn into_exporter(self) -> FrameExporter<E> {
        self.exporter
    }

    /// Reset the output directory and export one file per frame until the visualizer reports
    /// completion. A visualizer that is already complete produces no frames.
    #[tracing::instrument(
        skip_all,
        fields(title = %visualizer.title(), dir = %self.exporter.output_dir().display())
    )]
    pub fn run<V: Visualizer + ?Sized>(&mut self, visualizer: &mut V) -> VisResult<RunStats> {
        self.exporter.begin()?;

        let dimensions = visualizer.dimensions();
        let mut canvas = Canvas::new(dimensions, Arc::clone(&self.font));

        while !visualizer.is_completed() {
            if let Some(limit) = self.opts.frame_limit
                && self.exporter.frames_written() >= limit
            {
                return Err(VisError::validation(format!(
                    "visualizer did not complete within {limit} frames"
                )));
            }

            visualizer.render_frame(&mut canvas);
            annotate(&mut canvas, visualizer, &self.opts);
            let path = self.exporter.export(&canvas)?;
            tracing::debug!(
                frame = self.exporter.frames_written() - 1,
                path = %path.display(),
                "exported frame"
            );
        }

        let frames = self.exporter.frames_written();
        tracing::info!(frames, "visualization complete");
        Ok(RunStats {
            frames,
            dimensions,
            output_dir: self.exporter.output_dir().to_path_buf(),
        })
    }
}

/// Title near the top, caption (if any) near the bottom, both centered.
fn annotate<V: Visualizer + ?Sized>(canvas: &mut Canvas, visualizer: &V, opts: &DriverOpts) {
    canvas.draw_centered_text(&visualizer.title(), opts.title_y, opts.text_color);

    if let Some(caption) = visualizer.frame_description() {
        let height = i32::try_from(canvas.dimensions().height).unwrap_or(i32::MAX);
        let y = height.saturating_sub(opts.caption_bottom_offset);
        canvas.draw_centered_text(&caption, y, opts.text_color);
    }
}

/// Run `visualizer` into `output_dir` as PNGs using the bundled font and default overlay.
pub fn visualize_to_png<V: Visualizer + ?Sized>(
    visualizer: &mut V,
    output_dir: &Path,
    scale: u32,
) -> VisResult<RunStats> {
    let font = Arc::new(Font::builtin()?);
    let exporter = FrameExporter::new(output_dir, scale, PngEncoder::default())?;
    VisualizationDriver::new(exporter, font, DriverOpts::default()).run(visualizer)
}

#[cfg(test)]
#[path = "../../tests/unit/visualize/driver.rs"]
mod tests;
