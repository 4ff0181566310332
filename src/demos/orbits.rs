use std::f64::consts::TAU;

use crate::{
    foundation::{
        color::Color,
        core::{Point, Point2D, Size},
    },
    raster::canvas::Canvas,
    visualize::visualizer::Visualizer,
};

const RINGS: [(i32, Color); 3] = [
    (40, Color::ORANGE),
    (72, Color::DEEP_PINK),
    (104, Color::AMBER),
];
const SPOKES: u32 = 6;

/// Spokes sweeping around a set of concentric rings, each ring carrying a planet at its own
/// angular speed.
#[derive(Clone, Debug)]
pub struct Orbits {
    size: Size,
    frames: u32,
    current: u32,
}

impl Orbits {
    pub fn new(size: Size, frames: u32) -> Self {
        Self {
            size,
            frames,
            current: 0,
        }
    }

    fn center(&self) -> Point2D {
        Point2D::new(
            (self.size.width / 2) as i32,
            (self.size.height / 2) as i32,
        )
    }
}

impl Default for Orbits {
    fn default() -> Self {
        Self::new(Size::new(256, 256), 90)
    }
}

impl Visualizer for Orbits {
    fn dimensions(&self) -> Size {
        self.size
    }

    fn title(&self) -> String {
        "Orbits".to_owned()
    }

    fn frame_description(&self) -> Option<String> {
        (self.current > 0).then(|| format!("{}/{}", self.current, self.frames))
    }

    fn is_completed(&self) -> bool {
        self.current >= self.frames
    }

    fn render_frame(&mut self, canvas: &mut Canvas) {
        canvas.start_new_frame(true);
        canvas.clear(Color::DARK_SLATE_GRAY);

        let center = self.center();
        let c = center.to_point();
        let phase = TAU * f64::from(self.current) / f64::from(self.frames.max(1));
        let reach = f64::from(RINGS[RINGS.len() - 1].0);

        for k in 0..SPOKES {
            let angle = phase + TAU * f64::from(k) / f64::from(SPOKES);
            let tip = Point::new(c.x + reach * angle.cos(), c.y + reach * angle.sin());
            canvas.draw_aa_line(c, tip, Color::SLATE_GRAY);
        }

        for (i, &(radius, color)) in RINGS.iter().enumerate() {
            canvas.draw_circle(center, radius, Color::LIGHT_SLATE_GRAY);
            // Inner rings lap the outer ones.
            let angle = phase * (RINGS.len() - i) as f64;
            let r = f64::from(radius);
            let planet = Point2D::new(
                center.x + (r * angle.cos()).round() as i32,
                center.y + (r * angle.sin()).round() as i32,
            );
            canvas.fill_circle(planet, 6, color);
        }
        canvas.fill_circle(center, 10, Color::DESERT);

        self.current += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/orbits.rs"]
mod tests;
