//! Bitmap font loaded from a declarative JSON glyph table.
//!
//! The table maps a character key to `character_height` integers, one per row. Bit 0 of each
//! row is the leftmost column; the low `character_width` bits are the only ones allowed.

use std::{collections::BTreeMap, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{VisError, VisResult};

const BUILTIN_TABLE: &str = include_str!("../../assets/monogram-bitmap.json");

/// Cell geometry shared by every glyph in a [`Font`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontMetrics {
    pub character_width: u32,
    pub character_height: u32,
    /// Added to the text origin's y before blitting; negative values lift the glyph cell so
    /// cap tops land on the requested row.
    pub vertical_offset: i32,
    /// Blank columns between two glyph cells.
    pub spacing: u32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            character_width: 5,
            character_height: 12,
            vertical_offset: -3,
            spacing: 1,
        }
    }
}

impl FontMetrics {
    /// Horizontal cursor advance per character.
    pub fn advance(self) -> u32 {
        self.character_width + self.spacing
    }

    /// Rendered width of `chars` characters: cells plus the gaps between them.
    pub fn text_width(self, chars: usize) -> u64 {
        if chars == 0 {
            return 0;
        }
        let n = chars as u64;
        u64::from(self.character_width) * n + u64::from(self.spacing) * (n - 1)
    }

    fn validate(self) -> VisResult<()> {
        if self.character_width == 0 || self.character_height == 0 {
            return Err(VisError::font("character width/height must be non-zero"));
        }
        if self.character_width > 32 {
            return Err(VisError::font("character width must be <= 32 bits"));
        }
        Ok(())
    }
}

/// Fixed-size boolean mask, row-major, `true` = foreground.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    mask: Vec<bool>,
}

impl Glyph {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mask: vec![false; width as usize * height as usize],
        }
    }

    fn from_rows(metrics: FontMetrics, rows: &[u32]) -> Self {
        let mut glyph = Self::empty(metrics.character_width, metrics.character_height);
        for (y, &bits) in rows.iter().enumerate() {
            for x in 0..metrics.character_width as usize {
                glyph.mask[y * metrics.character_width as usize + x] = (bits >> x) & 1 == 1;
            }
        }
        glyph
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.mask[(y * self.width + x) as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.mask.chunks(self.width.max(1) as usize)
    }

    pub fn is_blank(&self) -> bool {
        !self.mask.iter().any(|&b| b)
    }
}

/// Immutable glyph table. Share between canvases through `Arc<Font>`.
#[derive(Clone, Debug)]
pub struct Font {
    metrics: FontMetrics,
    glyphs: BTreeMap<String, Glyph>,
    empty: Glyph,
}

impl Font {
    /// The bundled printable-ASCII table with default metrics.
    pub fn builtin() -> VisResult<Self> {
        Self::builtin_with_metrics(FontMetrics::default())
    }

    /// Bundled glyph table laid out with custom metrics.
    pub fn builtin_with_metrics(metrics: FontMetrics) -> VisResult<Self> {
        Self::from_json_str(BUILTIN_TABLE, metrics)
    }

    pub fn from_path(path: &Path, metrics: FontMetrics) -> VisResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read font table '{}'", path.display()))?;
        Self::from_json_str(&raw, metrics).map_err(|e| match e {
            VisError::Font(msg) => VisError::font(format!("'{}': {msg}", path.display())),
            other => other,
        })
    }

    pub fn from_json_str(raw: &str, metrics: FontMetrics) -> VisResult<Self> {
        metrics.validate()?;

        let table: BTreeMap<String, Vec<i64>> = serde_json::from_str(raw)
            .map_err(|e| VisError::font(format!("parse glyph table: {e}")))?;

        let limit = 1i64 << metrics.character_width;
        let mut glyphs = BTreeMap::new();
        for (key, rows) in table {
            if key.is_empty() {
                return Err(VisError::font("glyph key must not be empty"));
            }
            if rows.len() != metrics.character_height as usize {
                return Err(VisError::font(format!(
                    "glyph {key:?} has {} rows, expected {}",
                    rows.len(),
                    metrics.character_height
                )));
            }
            let mut bits = Vec::with_capacity(rows.len());
            for (y, &row) in rows.iter().enumerate() {
                if !(0..limit).contains(&row) {
                    return Err(VisError::font(format!(
                        "glyph {key:?} row {y} value {row} exceeds {} bits",
                        metrics.character_width
                    )));
                }
                bits.push(row as u32);
            }
            glyphs.insert(key, Glyph::from_rows(metrics, &bits));
        }

        tracing::debug!(glyphs = glyphs.len(), "font table loaded");

        Ok(Self {
            metrics,
            glyphs,
            empty: Glyph::empty(metrics.character_width, metrics.character_height),
        })
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Glyph for `key`, or the blank glyph when the table has no entry for it.
    pub fn glyph_for(&self, key: &str) -> &Glyph {
        self.glyphs.get(key).unwrap_or(&self.empty)
    }

    pub fn glyph_for_char(&self, ch: char) -> &Glyph {
        let mut buf = [0u8; 4];
        self.glyph_for(ch.encode_utf8(&mut buf))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.glyphs.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/font.rs"]
mod tests;
