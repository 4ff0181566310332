use std::sync::Arc;

use crate::{
    foundation::{
        color::Color,
        core::{Point, Point2D, Rect, Size},
        error::VisResult,
    },
    raster::{font::Font, frame::Frame},
};

/// Drawing surface for one visualization run.
///
/// Owns its [`Frame`] for its whole lifetime; dimensions never change. Every primitive clips
/// against the frame, so no geometry (negative, huge, degenerate) is an error.
#[derive(Clone, Debug)]
pub struct Canvas {
    frame: Frame,
    font: Arc<Font>,
}

impl Canvas {
    pub fn new(dimensions: Size, font: Arc<Font>) -> Self {
        Self {
            frame: Frame::new(dimensions),
            font,
        }
    }

    /// Canvas using the bundled bitmap font.
    pub fn with_builtin_font(dimensions: Size) -> VisResult<Self> {
        Ok(Self::new(dimensions, Arc::new(Font::builtin()?)))
    }

    pub fn dimensions(&self) -> Size {
        self.frame.size()
    }

    pub fn frame_rect(&self) -> Rect {
        self.frame.rect()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Full buffer, row-major `0xAARRGGBB`. Reading has no side effects.
    pub fn raw_pixel_data(&self) -> &[Color] {
        self.frame.pixels()
    }

    /// Swap in a fresh background frame when `clear` is set; otherwise keep drawing over the
    /// previous contents.
    pub fn start_new_frame(&mut self, clear: bool) {
        if clear {
            self.frame = Frame::new(self.frame.size());
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.frame.fill(color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.frame.get(x, y)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.frame.set(x, y, color);
    }

    /// Blend `color` over the existing pixel with `coverage` in `[0, 1]`.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f64) {
        if self.frame.index_of(x, y).is_none() {
            return;
        }
        let bg = self.frame.get(x, y);
        self.frame.set(x, y, bg.blend(color, coverage));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (right, bottom) = rect.bottom_right_i64();
        self.fill_box(
            i64::from(rect.origin.x),
            i64::from(rect.origin.y),
            right,
            bottom,
            color,
        );
    }

    /// Stroke the inside of `rect` with four `stroke_width` bands. Corners are painted twice.
    pub fn draw_rect(&mut self, rect: Rect, stroke_width: i32, color: Color) {
        if stroke_width <= 0 {
            return;
        }
        let sw = i64::from(stroke_width);
        let x0 = i64::from(rect.origin.x);
        let y0 = i64::from(rect.origin.y);
        let (x1, y1) = rect.bottom_right_i64();

        self.fill_box(x0, y0, x1, y0 + sw, color);
        self.fill_box(x0, y1 - sw, x1, y1, color);
        self.fill_box(x0, y0, x0 + sw, y1, color);
        self.fill_box(x1 - sw, y0, x1, y1, color);
    }

    /// Fill `[x0, x1) x [y0, y1)` after clipping to the frame.
    fn fill_box(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let w = i64::from(self.frame.width());
        let h = i64::from(self.frame.height());
        let (x0, x1) = (x0.clamp(0, w), x1.clamp(0, w));
        let (y0, y1) = (y0.clamp(0, h), y1.clamp(0, h));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for y in y0..y1 {
            self.frame
                .fill_span(y as usize, x0 as usize, x1 as usize, color);
        }
    }

    /// Bresenham line, both endpoints inclusive.
    ///
    /// The line is always traced from the lexicographically smaller endpoint, so
    /// `draw_line(a, b)` and `draw_line(b, a)` paint the same pixels. Step `k` along the major
    /// axis sits `round(k * minor / major)` off the start on the minor axis (halves round away
    /// from the start), and only steps that land on the frame are visited.
    pub fn draw_line(&mut self, from: Point2D, to: Point2D, color: Color) {
        let (a, b) = if from <= to { (from, to) } else { (to, from) };
        let (dx, dy) = (i64::from(b.x) - i64::from(a.x), i64::from(b.y) - i64::from(a.y));
        let x_major = dx.abs() >= dy.abs();

        // Work in (major, minor) coordinates.
        let (major0, minor0, major_span, minor_span, major_len) = if x_major {
            (i64::from(a.x), i64::from(a.y), dx, dy, self.frame.width())
        } else {
            (i64::from(a.y), i64::from(a.x), dy, dx, self.frame.height())
        };
        let Some((k0, k1)) = visible_steps(major0, major_span, i64::from(major_len)) else {
            return;
        };

        let n = i128::from(major_span.abs());
        let m = i128::from(minor_span.abs());
        let (sm, sn) = (major_span.signum(), minor_span.signum());
        for k in k0..=k1 {
            let offset = if n == 0 {
                0
            } else {
                ((2 * i128::from(k) * m + n) / (2 * n)) as i64
            };
            let major = major0 + sm * k;
            let minor = minor0 + sn * offset;
            let (x, y) = if x_major { (major, minor) } else { (minor, major) };
            self.plot(x, y, color);
        }
    }

    /// Anti-aliased line between sub-pixel positions.
    ///
    /// For every integer step on the dominant axis, the two pixels straddling the exact
    /// minor-axis position receive coverage `1 - frac` and `frac`. Steps run from the floor of
    /// the start to the floor of the end, inclusive, so whole-pixel axis-aligned segments match
    /// [`Canvas::draw_line`].
    pub fn draw_aa_line(&mut self, from: Point, to: Point, color: Color) {
        if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
            return;
        }

        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let x_major = dx.abs() >= dy.abs();

        // Work in (major, minor) coordinates.
        let (p0, p1) = if x_major {
            ((from.x, from.y), (to.x, to.y))
        } else {
            ((from.y, from.x), (to.y, to.x))
        };
        let (start, end) = if p0.0 <= p1.0 { (p0, p1) } else { (p1, p0) };
        let span = end.0 - start.0;
        let gradient = if span == 0.0 {
            0.0
        } else {
            (end.1 - start.1) / span
        };

        let (major_len, minor_len) = if x_major {
            (self.frame.width(), self.frame.height())
        } else {
            (self.frame.height(), self.frame.width())
        };
        let minor_len = f64::from(minor_len);
        // Steps outside the frame on the major axis only ever produce clipped pixels.
        let first = start.0.floor().max(0.0);
        let last = end.0.floor().min(f64::from(major_len) - 1.0);
        if first > last {
            return;
        }

        let mut m = first as i64;
        let last = last as i64;
        while m <= last {
            let minor = start.1 + gradient * (m as f64 - start.0);
            // Both straddling pixels are off the frame outside this range.
            if !(-1.0..=minor_len).contains(&minor) {
                m += 1;
                continue;
            }
            let base = minor.floor();
            let frac = minor - base;
            let base = base as i64;

            for (n, coverage) in [(base, 1.0 - frac), (base + 1, frac)] {
                if coverage <= 0.0 {
                    continue;
                }
                let (px, py) = if x_major { (m, n) } else { (n, m) };
                if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
            m += 1;
        }
    }

    /// Midpoint circle outline. `radius == 0` plots the center; negative radii draw nothing.
    pub fn draw_circle(&mut self, center: Point2D, radius: i32, color: Color) {
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        // A step plots columns `cx ± x` and rows `cy ± x`; if neither is on the frame, none of
        // its eight points are.
        let windows = [
            offsets_on_axis(cx, i64::from(self.frame.width())),
            offsets_on_axis(cy, i64::from(self.frame.height())),
        ];
        let octant = Octant::new(radius);
        octant.walk(&windows, |x, y| {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.plot(px, py, color);
            }
        });
    }

    /// Filled midpoint circle: every row is painted between its symmetric perimeter points.
    pub fn fill_circle(&mut self, center: Point2D, radius: i32, color: Color) {
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let octant = Octant::new(radius);
        // Spans sit on rows `cy ± y` and `cy ± x`.
        let rows = offsets_on_axis(cy, i64::from(self.frame.height()));
        let windows = [rows, rows.and_then(|(lo, hi)| octant.steps_with_y_in(lo, hi))];
        octant.walk(&windows, |x, y| {
            self.fill_box(cx - x, cy + y, cx + x + 1, cy + y + 1, color);
            self.fill_box(cx - x, cy - y, cx + x + 1, cy - y + 1, color);
            self.fill_box(cx - y, cy + x, cx + y + 1, cy + x + 1, color);
            self.fill_box(cx - y, cy - x, cx + y + 1, cy - x + 1, color);
        });
    }

    /// Width in pixels that [`Canvas::draw_text`] covers for `text`.
    pub fn text_width(&self, text: &str) -> u64 {
        self.font.metrics().text_width(text.chars().count())
    }

    /// Blit `text` with its first cell's top-left at `at` (shifted by the font's vertical
    /// offset). Characters missing from the font leave their cell blank.
    pub fn draw_text(&mut self, text: &str, at: Point2D, color: Color) {
        let font = Arc::clone(&self.font);
        let metrics = font.metrics();
        let advance = i64::from(metrics.advance());
        let top = i64::from(at.y) + i64::from(metrics.vertical_offset);

        for (i, ch) in text.chars().enumerate() {
            let left = i64::from(at.x) + advance * i as i64;
            if left >= i64::from(self.frame.width()) {
                break;
            }
            let glyph = font.glyph_for_char(ch);
            for (row, bits) in glyph.rows().enumerate() {
                for (col, &on) in bits.iter().enumerate() {
                    if on {
                        self.plot(left + col as i64, top + row as i64, color);
                    }
                }
            }
        }
    }

    /// Draw `text` horizontally centered; an odd leftover pixel goes to the right side.
    pub fn draw_centered_text(&mut self, text: &str, at_y: i32, color: Color) {
        let width = i64::try_from(self.text_width(text)).unwrap_or(i64::MAX);
        let x = (i64::from(self.frame.width()) - width).div_euclid(2);
        let x = x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.draw_text(text, Point2D::new(x, at_y), color);
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.frame.set(x, y, color);
        }
    }
}

/// Range of steps `k` in `0..=|span|` for which `start + signum(span) * k` lies in `0..len`.
fn visible_steps(start: i64, span: i64, len: i64) -> Option<(i64, i64)> {
    let (lo, hi) = match span.signum() {
        0 => (0, 0),
        1 => ((-start).max(0), (len - 1 - start).min(span)),
        _ => ((start - (len - 1)).max(0), start.min(-span)),
    };
    if len <= 0 || lo > hi || !(0..len).contains(&(start + span.signum() * lo)) {
        return None;
    }
    Some((lo, hi))
}

/// Distances `|p - center|` over every on-frame coordinate `p` in `0..len`, as an inclusive
/// interval.
fn offsets_on_axis(center: i64, len: i64) -> Option<(i64, i64)> {
    if len <= 0 {
        return None;
    }
    let last = len - 1;
    let lo = if center < 0 {
        -center
    } else if center > last {
        center - last
    } else {
        0
    };
    Some((lo, center.abs().max((last - center).abs())))
}

/// One octant (`0 <= x <= y`) of a midpoint circle.
///
/// The walk keeps `d = 2(x+1)^2 + y^2 + (y-1)^2 - 2r^2` and moves to `y - 1` whenever
/// `d >= 0`. Away from the diagonal the `y` it reaches at any `x` is the largest `y` with
/// `2x^2 + y^2 + (y-1)^2 < 2r^2`, which lets the walk jump straight to the steps a caller
/// asks for.
struct Octant {
    radius: i64,
    /// Largest `x` at which the closed form is known to agree with the walk; `-1` if none.
    exact_until: i64,
}

impl Octant {
    fn new(radius: i32) -> Self {
        let radius = i64::from(radius);
        let mut octant = Self {
            radius,
            exact_until: -1,
        };
        if radius >= 0 && octant.y_at(0) >= 2 {
            // `y_at(x) - x` only decreases, so the last x with a gap of two is a cut-off.
            let (mut lo, mut hi) = (0, radius);
            while lo < hi {
                let mid = lo + (hi - lo + 1) / 2;
                if octant.y_at(mid) >= mid + 2 {
                    lo = mid;
                } else {
                    hi = mid - 1;
                }
            }
            octant.exact_until = lo;
        }
        octant
    }

    /// Largest `y` with `y(y-1) <= r^2 - x^2 - 1`, or 0 if there is none.
    fn y_at(&self, x: i64) -> i64 {
        let (r, x) = (i128::from(self.radius), i128::from(x));
        let k = r * r - x * x - 1;
        if k < 0 {
            return 0;
        }
        let mut y = ((1 + (1 + 4 * k).unsigned_abs().isqrt()) / 2) as i128;
        while y * (y - 1) > k {
            y -= 1;
        }
        while (y + 1) * y <= k {
            y += 1;
        }
        y as i64
    }

    fn decision(&self, x: i64, y: i64) -> i64 {
        let (r, x, y) = (i128::from(self.radius), i128::from(x), i128::from(y));
        (2 * (x + 1) * (x + 1) + y * y + (y - 1) * (y - 1) - 2 * r * r) as i64
    }

    /// Steps whose `y` lies in `lo..=hi`, as an inclusive `x` interval.
    fn steps_with_y_in(&self, lo: i64, hi: i64) -> Option<(i64, i64)> {
        let r = self.radius;
        if r < 0 || hi < 0 || lo > r {
            return None;
        }
        // `y_at` is non-increasing in x.
        let first = {
            let (mut a, mut b) = (0, r);
            while a < b {
                let mid = a + (b - a) / 2;
                if self.y_at(mid) <= hi { b = mid } else { a = mid + 1 }
            }
            a
        };
        let last = {
            let (mut a, mut b) = (0, r);
            while a < b {
                let mid = a + (b - a + 1) / 2;
                if self.y_at(mid) >= lo { a = mid } else { b = mid - 1 }
            }
            a
        };
        let first = if first <= self.exact_until {
            first
        } else {
            self.exact_until.max(0)
        };
        let last = if last < self.exact_until { last } else { r };
        (first <= last).then_some((first, last))
    }

    /// Call `f(x, y)` for every step whose `x` falls in one of `windows`, in increasing `x`.
    /// Steps outside the windows may also be reported near the diagonal.
    fn walk(&self, windows: &[Option<(i64, i64)>], mut f: impl FnMut(i64, i64)) {
        if self.radius < 0 {
            return;
        }
        let mut windows: Vec<(i64, i64)> = windows
            .iter()
            .flatten()
            .map(|&(lo, hi)| (lo.max(0), hi))
            .filter(|(lo, hi)| lo <= hi)
            .collect();
        windows.sort_unstable();

        let mut x = 0i64;
        let mut y = self.radius;
        let mut d = 3 - 2 * y;
        for (lo, hi) in windows {
            let target = lo.min(self.exact_until);
            if target > x {
                x = target;
                y = self.y_at(x);
                d = self.decision(x, y);
            }
            while y >= x && x <= hi {
                f(x, y);
                if d < 0 {
                    d += 4 * x + 6;
                } else {
                    d += 4 * (x - y) + 10;
                    y -= 1;
                }
                x += 1;
            }
            if y < x {
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
