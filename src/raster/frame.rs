use crate::foundation::{
    color::Color,
    core::{Point2D, Rect, Size},
};

/// Fixed-size row-major pixel buffer.
///
/// `pixels.len() == width * height` for the lifetime of the value. Reads outside the frame
/// return the background color and writes outside it are dropped, so callers never need to
/// branch on edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    size: Size,
    pixels: Vec<Color>,
}

impl Frame {
    pub fn new(size: Size) -> Self {
        Self::filled(size, Color::default())
    }

    pub fn filled(size: Size, color: Color) -> Self {
        Self {
            size,
            pixels: vec![color; size.area()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Point2D::ZERO, self.size)
    }

    /// Buffer index of `(x, y)`, or `None` when it lies outside the frame.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.size.width as usize || y >= self.size.height as usize {
            return None;
        }
        Some(y * self.size.width as usize + x)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Color {
        self.index_of(x, y)
            .map(|idx| self.pixels[idx])
            .unwrap_or_default()
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Overwrite one row span `[x0, x1)` of row `y`. The span must already be clipped.
    pub(crate) fn fill_span(&mut self, y: usize, x0: usize, x1: usize, color: Color) {
        let row = y * self.size.width as usize;
        self.pixels[row + x0..row + x1].fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// A new frame `border` pixels larger on every side, with this frame's pixels copied into
    /// the middle and the border painted `fill`.
    pub fn grown(&self, border: u32, fill: Color) -> Frame {
        let extra = border.saturating_mul(2);
        let size = Size::new(
            self.size.width.saturating_add(extra),
            self.size.height.saturating_add(extra),
        );
        let mut out = Frame::filled(size, fill);
        let offset = border as i32;
        for y in 0..self.size.height as i32 {
            for x in 0..self.size.width as i32 {
                out.set(x + offset, y + offset, self.get(x, y));
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
