use std::sync::Arc;

use crate::{
    foundation::{
        color::Color,
        core::{Point, Point2D, Rect, Size},
    },
    raster::{canvas::Canvas, font::Font},
};

pub const SHOWCASE_SIZE: Size = Size::new(512, 512);

const YELLOW: Color = Color(0xFFFF_FF00);

/// Draw one static frame that exercises every canvas primitive: filled and stroked
/// rectangles, lines, outlined and filled circles, anti-aliased lines and text.
pub fn primitives_showcase(canvas: &mut Canvas) {
    canvas.fill_rect(Rect::from_xywh(12, 42, 96, 96), Color::RED);
    canvas.fill_rect(Rect::from_xywh(130, 70, 80, 80), Color::GREEN);
    // Checkerboard inside the thick frame.
    canvas.fill_rect(Rect::from_xywh(234, 84, 46, 45), Color::BRONZE);
    canvas.fill_rect(Rect::from_xywh(281, 84, 45, 45), Color::DEEP_PINK);
    canvas.fill_rect(Rect::from_xywh(234, 130, 46, 46), Color::DEEP_PINK);
    canvas.fill_rect(Rect::from_xywh(281, 130, 45, 46), Color::BRONZE);

    for (i, origin) in [(10, 40), (120, 60), (230, 80)].into_iter().enumerate() {
        canvas.draw_rect(Rect::from_xywh(origin.0, origin.1, 100, 100), i as i32 + 1, YELLOW);
    }
    canvas.draw_text("Rectangles", Point2D::new(170, 30), Color::WHITE);

    let quad = [
        Point2D::new(50, 200),
        Point2D::new(230, 210),
        Point2D::new(190, 240),
        Point2D::new(180, 300),
    ];
    for (i, &from) in quad.iter().enumerate() {
        canvas.draw_line(from, quad[(i + 1) % quad.len()], Color::WHITE);
    }
    for radius in (2..=10).step_by(2) {
        for (k, &center) in quad.iter().enumerate() {
            canvas.draw_circle(center, radius * (k as i32 + 1), Color::DEEP_PINK);
        }
    }
    canvas.fill_circle(Point2D::new(130, 230), 17, Color::RED);
    canvas.draw_circle(Point2D::new(130, 230), 17, Color::WHITE);
    canvas.draw_text("Lines & Circles", Point2D::new(30, 270), Color::WHITE);

    let tri = [
        Point::new(300.0, 200.0),
        Point::new(390.0, 210.0),
        Point::new(370.0, 290.0),
    ];
    for (i, &from) in tri.iter().enumerate() {
        canvas.draw_aa_line(from, tri[(i + 1) % tri.len()], Color::WHITE);
    }
    canvas.draw_text("Anti-aliased", Point2D::new(310, 300), Color::WHITE);
}

/// Fresh 512x512 canvas with the showcase already drawn.
pub fn showcase_canvas(font: Arc<Font>) -> Canvas {
    let mut canvas = Canvas::new(SHOWCASE_SIZE, font);
    primitives_showcase(&mut canvas);
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/demos/showcase.rs"]
mod tests;
