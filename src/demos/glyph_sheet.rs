use std::sync::Arc;

use crate::{
    foundation::{
        color::Color,
        core::{Point2D, Rect, Size},
    },
    raster::{canvas::Canvas, font::Font},
};

const PAD: u32 = 2;

/// Every glyph in `font`, in key order, laid out `columns` per row on alternating cell shades.
pub fn glyph_sheet(font: Arc<Font>, columns: u32) -> Canvas {
    let metrics = font.metrics();
    let columns = columns.max(1);
    let count = font.len() as u32;
    let rows = count.div_ceil(columns).max(1);
    let cell = Size::new(
        metrics.character_width + 2 * PAD,
        metrics.character_height + 2 * PAD,
    );

    let keys: Vec<String> = font.keys().map(str::to_owned).collect();
    let mut canvas = Canvas::new(
        Size::new(cell.width * columns, cell.height * rows),
        font,
    );
    canvas.clear(Color::BLACK);

    for (i, key) in keys.iter().enumerate() {
        let (col, row) = (i as u32 % columns, i as u32 / columns);
        let left = (col * cell.width) as i32;
        let top = (row * cell.height) as i32;
        let shade = if (col + row) % 2 == 0 {
            Color::DARK_SLATE_GRAY
        } else {
            Color::DIM_GRAY
        };
        canvas.fill_rect(Rect::from_xywh(left, top, cell.width, cell.height), shade);
        // Undo the font's vertical offset so the whole cell, descenders included, fits.
        let y = top + PAD as i32 - metrics.vertical_offset;
        canvas.draw_text(key, Point2D::new(left + PAD as i32, y), Color::WHITE);
    }
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/demos/glyph_sheet.rs"]
mod tests;
