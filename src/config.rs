use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    encode::{encoder::PngCompression, ffmpeg::Mp4Opts},
    foundation::{
        color::Color,
        error::{VisError, VisResult},
    },
    raster::font::{Font, FontMetrics},
    visualize::driver::DriverOpts,
};

/// File-level run configuration.
///
/// Every field has a default, so `{}` is a valid config. Command-line flags are applied on top of
/// whatever the file provides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Frames for a demo go to `<output_root>/<demo name>`.
    pub output_root: PathBuf,
    pub scale: u32,
    /// Glyph table to use instead of the bundled one.
    pub font_path: Option<PathBuf>,
    pub font_metrics: FontMetrics,
    pub frame_limit: Option<u64>,
    pub text_color: Color,
    pub png_compression: PngCompression,
    /// Assemble an MP4 next to the frame directory when set.
    pub mp4: Option<Mp4Opts>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("frames"),
            scale: 1,
            font_path: None,
            font_metrics: FontMetrics::default(),
            frame_limit: None,
            text_color: Color::WHITE,
            png_compression: PngCompression::default(),
            mp4: None,
        }
    }
}

impl RunConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> VisResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| VisError::serde(format!("parse run config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> VisResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VisError::validation(format!("open run config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(path = %path.display(), "loaded run config");
        Ok(cfg)
    }

    pub fn validate(&self) -> VisResult<()> {
        if self.scale == 0 {
            return Err(VisError::validation("scale must be >= 1"));
        }
        if let Some(mp4) = &self.mp4 {
            mp4.validate()?;
        }
        Ok(())
    }

    /// Bundled font unless `font_path` points elsewhere.
    pub fn load_font(&self) -> VisResult<Arc<Font>> {
        let font = match &self.font_path {
            Some(path) => Font::from_path(path, self.font_metrics)?,
            None => Font::builtin_with_metrics(self.font_metrics)?,
        };
        Ok(Arc::new(font))
    }

    pub fn driver_opts(&self) -> DriverOpts {
        DriverOpts {
            text_color: self.text_color,
            frame_limit: self.frame_limit,
            ..DriverOpts::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
