use std::ops::{Add, Sub};

pub use kurbo::Point;

/// Integer pixel coordinate. May lie outside any frame; frames clip on access.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle; left/top inclusive, right/bottom exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub origin: Point2D,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point2D::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(origin: Point2D, size: Size) -> Self {
        Self { origin, size }
    }

    pub const fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(Point2D::new(x, y), Size::new(width, height))
    }

    pub fn top_left(self) -> Point2D {
        self.origin
    }

    /// Exclusive corner. Computed in i64 so huge sizes cannot wrap.
    pub fn bottom_right_i64(self) -> (i64, i64) {
        (
            i64::from(self.origin.x) + i64::from(self.size.width),
            i64::from(self.origin.y) + i64::from(self.size.height),
        )
    }

    pub fn contains(self, p: Point2D) -> bool {
        let (right, bottom) = self.bottom_right_i64();
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        i64::from(self.origin.x) <= x && x < right && i64::from(self.origin.y) <= y && y < bottom
    }

    /// Intersection with `other`, or [`Rect::ZERO`] when they do not overlap.
    pub fn clipped_with(self, other: Rect) -> Rect {
        let left = i64::from(self.origin.x).max(i64::from(other.origin.x));
        let top = i64::from(self.origin.y).max(i64::from(other.origin.y));
        let (r0, b0) = self.bottom_right_i64();
        let (r1, b1) = other.bottom_right_i64();
        let right = r0.min(r1);
        let bottom = b0.min(b1);

        if right <= left || bottom <= top {
            return Rect::ZERO;
        }

        // Both inputs fit i32 origins and u32 sizes, so the intersection does too.
        Rect::from_xywh(
            left as i32,
            top as i32,
            (right - left) as u32,
            (bottom - top) as u32,
        )
    }

    pub fn intersects(self, other: Rect) -> bool {
        self.clipped_with(other) != Rect::ZERO
    }

    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
