use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    encode::encoder::FrameEncoder,
    foundation::{
        color::Color,
        core::Size,
        error::{VisError, VisResult},
    },
    raster::canvas::Canvas,
};

/// Remove `dir` with everything in it, then create it again.
///
/// A missing directory is fine; any other removal failure is an error so that stale frames can
/// never survive into a new run.
pub fn reset_output_dir(dir: &Path) -> VisResult<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => tracing::debug!(dir = %dir.display(), "removed previous output directory"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("remove output directory '{}'", dir.display()))
                .into());
        }
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory '{}'", dir.display()))?;
    Ok(())
}

/// `0007.png` style name; indices past 9999 simply grow wider.
pub fn frame_file_name(index: u64, extension: &str) -> String {
    format!("{index:04}.{extension}")
}

/// Nearest-neighbour upscale: every source pixel becomes a `scale x scale` block.
pub fn upscale_nearest(pixels: &[Color], size: Size, scale: u32) -> VisResult<(Vec<Color>, Size)> {
    if scale == 0 {
        return Err(VisError::validation("export scale must be >= 1"));
    }
    if pixels.len() != size.area() {
        return Err(VisError::validation(format!(
            "pixel buffer has {} entries, expected {}x{}",
            pixels.len(),
            size.width,
            size.height
        )));
    }
    let scaled = match (
        size.width.checked_mul(scale),
        size.height.checked_mul(scale),
    ) {
        (Some(w), Some(h)) => Size::new(w, h),
        _ => {
            return Err(VisError::validation(format!(
                "{}x{} at scale {scale} overflows",
                size.width, size.height
            )));
        }
    };
    if scale == 1 {
        return Ok((pixels.to_vec(), size));
    }

    let scale = scale as usize;
    let mut out = Vec::with_capacity(scaled.area());
    let mut row = Vec::with_capacity(scaled.width as usize);
    for src_row in pixels.chunks(size.width.max(1) as usize) {
        row.clear();
        for &px in src_row {
            row.extend(std::iter::repeat_n(px, scale));
        }
        for _ in 0..scale {
            out.extend_from_slice(&row);
        }
    }
    Ok((out, scaled))
}

/// Encode the canvas (upscaled when `scale > 1`) and write it to
/// `output_dir/<frame_index>.<ext>`. Returns the written path.
#[tracing::instrument(level = "debug", skip(canvas, encoder), fields(ext = encoder.extension()))]
pub fn export_frame<E: FrameEncoder + ?Sized>(
    canvas: &Canvas,
    output_dir: &Path,
    frame_index: u64,
    scale: u32,
    encoder: &mut E,
) -> VisResult<PathBuf> {
    let size = canvas.dimensions();
    let (pixels, size) = if scale == 1 {
        (Cow::Borrowed(canvas.raw_pixel_data()), size)
    } else {
        let (scaled, size) = upscale_nearest(canvas.raw_pixel_data(), size, scale)?;
        (Cow::Owned(scaled), size)
    };

    let bytes = encoder.encode(&pixels, size.width, size.height)?;
    let path = output_dir.join(frame_file_name(frame_index, encoder.extension()));
    std::fs::write(&path, &bytes).with_context(|| format!("write frame '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "frame written");
    Ok(path)
}

/// Sequential exporter bound to one output directory, scale and encoder.
#[derive(Debug)]
pub struct FrameExporter<E> {
    output_dir: PathBuf,
    scale: u32,
    encoder: E,
    next_index: u64,
}

impl<E: FrameEncoder> FrameExporter<E> {
    pub fn new(output_dir: impl Into<PathBuf>, scale: u32, encoder: E) -> VisResult<Self> {
        if scale == 0 {
            return Err(VisError::validation("export scale must be >= 1"));
        }
        Ok(Self {
            output_dir: output_dir.into(),
            scale,
            encoder,
            next_index: 0,
        })
    }

    /// Reset the output directory and restart numbering at zero.
    pub fn begin(&mut self) -> VisResult<()> {
        reset_output_dir(&self.output_dir)?;
        self.next_index = 0;
        Ok(())
    }

    /// Export under the next sequence number.
    pub fn export(&mut self, canvas: &Canvas) -> VisResult<PathBuf> {
        let path = export_frame(
            canvas,
            &self.output_dir,
            self.next_index,
            self.scale,
            &mut self.encoder,
        )?;
        self.next_index += 1;
        Ok(path)
    }

    pub fn frames_written(&self) -> u64 {
        self.next_index
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn extension(&self) -> &str {
        self.encoder.extension()
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn into_encoder(self) -> E {
        self.encoder
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/export.rs"]
mod tests;
