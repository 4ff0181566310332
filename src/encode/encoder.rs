use image::{
    ExtendedColorType, ImageEncoder as _,
    codecs::png::{CompressionType, FilterType, PngEncoder as ImagePngEncoder},
};

use crate::foundation::{
    color::Color,
    error::{VisError, VisResult},
};

/// Opaque image codec: a flat pixel buffer plus dimensions in, encoded file bytes out.
pub trait FrameEncoder {
    /// File extension (without the dot) for files holding this encoder's output.
    fn extension(&self) -> &str;

    /// Encode `width * height` row-major pixels.
    fn encode(&mut self, pixels: &[Color], width: u32, height: u32) -> VisResult<Vec<u8>>;
}

impl<E: FrameEncoder + ?Sized> FrameEncoder for Box<E> {
    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn encode(&mut self, pixels: &[Color], width: u32, height: u32) -> VisResult<Vec<u8>> {
        (**self).encode(pixels, width, height)
    }
}

fn check_buffer(pixels: &[Color], width: u32, height: u32) -> VisResult<()> {
    if width == 0 || height == 0 {
        return Err(VisError::encode(format!(
            "cannot encode an empty {width}x{height} frame"
        )));
    }
    if pixels.len() != width as usize * height as usize {
        return Err(VisError::validation(format!(
            "pixel buffer has {} entries, expected {width}x{height}",
            pixels.len()
        )));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<PngCompression> for CompressionType {
    fn from(value: PngCompression) -> Self {
        match value {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

/// PNG output through the `image` crate.
///
/// Frames are written as 8-bit RGB: the alpha byte of `0xAARRGGBB` is dropped and the
/// remaining channels are emitted in R, G, B order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder {
    compression: PngCompression,
}

impl PngEncoder {
    pub fn new(compression: PngCompression) -> Self {
        Self { compression }
    }
}

impl FrameEncoder for PngEncoder {
    fn extension(&self) -> &str {
        "png"
    }

    fn encode(&mut self, pixels: &[Color], width: u32, height: u32) -> VisResult<Vec<u8>> {
        check_buffer(pixels, width, height)?;

        let rgb: Vec<u8> = pixels.iter().flat_map(|c| c.to_rgb8()).collect();
        let mut out = Vec::new();
        ImagePngEncoder::new_with_quality(&mut out, self.compression.into(), FilterType::Adaptive)
            .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| VisError::encode(format!("png: {e}")))?;
        Ok(out)
    }
}

/// One frame as handed to a [`CapturingEncoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

/// Records every encoder input and emits raw RGBA8 bytes. Meant for tests and debugging.
#[derive(Debug, Default)]
pub struct CapturingEncoder {
    frames: Vec<CapturedFrame>,
}

impl CapturingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }
}

impl FrameEncoder for CapturingEncoder {
    fn extension(&self) -> &str {
        "rgba"
    }

    fn encode(&mut self, pixels: &[Color], width: u32, height: u32) -> VisResult<Vec<u8>> {
        check_buffer(pixels, width, height)?;
        self.frames.push(CapturedFrame {
            width,
            height,
            pixels: pixels.to_vec(),
        });
        Ok(pixels.iter().flat_map(|c| c.to_rgba8()).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/encoder.rs"]
mod tests;
