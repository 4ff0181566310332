//! Energy-level grid where overcharged cells flash and charge their neighbours.
//!
//! Every step raises each cell by one. A cell above 9 flashes once per step, adding one to all
//! eight neighbours, which can set off further flashes; once the cascade settles, every cell
//! that flashed drops back to zero. The visualizer shows each wave of the cascade as its own
//! frame.

use crate::{
    demos::SAMPLE_GRID,
    foundation::{
        color::Color,
        core::{Point2D, Rect, Size},
        error::{VisError, VisResult},
    },
    raster::canvas::Canvas,
    visualize::visualizer::Visualizer,
};

const FLASH_LEVEL: u8 = 10;
const CELL: u32 = 15;
const FADE_FRAMES: u8 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    levels: Vec<u8>,
}

impl Grid {
    /// One row of digits per line; blank lines are ignored.
    pub fn parse(input: &str) -> VisResult<Self> {
        let mut width = 0;
        let mut levels = Vec::new();
        let mut height = 0;
        for (row, line) in input.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let before = levels.len();
            for ch in line.chars() {
                let digit = ch.to_digit(10).ok_or_else(|| {
                    VisError::validation(format!("row {row}: '{ch}' is not a digit"))
                })?;
                levels.push(digit as u8);
            }
            let len = levels.len() - before;
            if row == 0 {
                width = len;
            } else if len != width {
                return Err(VisError::validation(format!(
                    "row {row} has {len} cells, expected {width}"
                )));
            }
            height += 1;
        }
        if levels.is_empty() {
            return Err(VisError::validation("grid input is empty"));
        }
        Ok(Self {
            width,
            height,
            levels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    pub fn level(&self, x: usize, y: usize) -> u8 {
        self.levels[y * self.width + x]
    }

    /// Run one full step and return how many cells flashed. `on_wave` sees the grid after the
    /// initial charge and after every wave that flashed at least one cell.
    pub fn step_with(&mut self, mut on_wave: impl FnMut(&Grid)) -> usize {
        for level in &mut self.levels {
            *level = level.saturating_add(1);
        }
        on_wave(self);

        let mut flashed = vec![false; self.levels.len()];
        loop {
            let mut any = false;
            for idx in 0..self.levels.len() {
                if flashed[idx] || self.levels[idx] < FLASH_LEVEL {
                    continue;
                }
                flashed[idx] = true;
                any = true;
                self.charge_neighbours(idx % self.width, idx / self.width);
            }
            if !any {
                break;
            }
            on_wave(self);
        }

        for level in &mut self.levels {
            if *level >= FLASH_LEVEL {
                *level = 0;
            }
        }
        flashed.iter().filter(|&&f| f).count()
    }

    pub fn step(&mut self) -> usize {
        self.step_with(|_| {})
    }

    fn charge_neighbours(&mut self, x: usize, y: usize) {
        for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (nx, ny) != (x, y) {
                    let idx = ny * self.width + nx;
                    self.levels[idx] = self.levels[idx].saturating_add(1);
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    step: u32,
    flashes: u64,
    grid: Grid,
}

/// Replays a precomputed run of [`Grid`] steps, one cascade wave per frame.
#[derive(Debug)]
pub struct FlashGrid {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    fade: Vec<u8>,
    size: Size,
    caption: Option<String>,
}

impl FlashGrid {
    pub fn new(grid: Grid, steps: u32) -> Self {
        let mut snapshots = Vec::new();
        let mut flashes = 0u64;
        let mut current = grid;
        snapshots.push(Snapshot {
            step: 0,
            flashes,
            grid: current.clone(),
        });

        for step in 1..=steps {
            let mut waves = Vec::new();
            current.step_with(|g| waves.push(g.clone()));
            // Running total counts every cell charged past the threshold so far.
            let mut lit = vec![false; current.levels.len()];
            for wave in waves {
                for (level, lit) in wave.levels.iter().zip(lit.iter_mut()) {
                    if *level >= FLASH_LEVEL && !*lit {
                        *lit = true;
                        flashes += 1;
                    }
                }
                snapshots.push(Snapshot {
                    step,
                    flashes,
                    grid: wave,
                });
            }
        }
        snapshots.push(Snapshot {
            step: steps,
            flashes,
            grid: current,
        });

        let first = &snapshots[0].grid;
        let size = Size::new(
            (first.width as u32 + 2) * CELL,
            (first.height as u32 + 3) * CELL,
        );
        let fade = vec![0; first.levels.len()];
        tracing::debug!(frames = snapshots.len(), steps, "flash grid prepared");
        Self {
            snapshots,
            cursor: 0,
            fade,
            size,
            caption: None,
        }
    }

    /// Bundled 10x10 sample grid.
    pub fn sample(steps: u32) -> VisResult<Self> {
        Ok(Self::new(Grid::parse(SAMPLE_GRID)?, steps))
    }

    pub fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn total_flashes(&self) -> u64 {
        self.snapshots.last().map_or(0, |s| s.flashes)
    }
}

impl Visualizer for FlashGrid {
    fn dimensions(&self) -> Size {
        self.size
    }

    fn title(&self) -> String {
        "Flash Grid".to_owned()
    }

    fn frame_description(&self) -> Option<String> {
        self.caption.clone()
    }

    fn is_completed(&self) -> bool {
        self.cursor >= self.snapshots.len()
    }

    fn render_frame(&mut self, canvas: &mut Canvas) {
        let Some(snapshot) = self.snapshots.get(self.cursor) else {
            return;
        };
        canvas.start_new_frame(true);

        let grid = &snapshot.grid;
        for y in 0..grid.height {
            for x in 0..grid.width {
                let idx = y * grid.width + x;
                let level = grid.levels[idx];
                let fade = &mut self.fade[idx];
                *fade = if level >= FLASH_LEVEL {
                    FADE_FRAMES
                } else {
                    fade.saturating_sub(1)
                };
                let shade = if *fade <= 1 { 0 } else { *fade * 25 };

                let left = (x as i32 + 1) * CELL as i32;
                let top = (y as i32 + 1) * CELL as i32;
                canvas.fill_rect(
                    Rect::from_xywh(left, top, CELL, CELL),
                    Color::rgb(shade, shade, shade),
                );
                let digit = if level >= FLASH_LEVEL { 0 } else { level };
                canvas.draw_text(
                    &digit.to_string(),
                    Point2D::new(left + 5, top + 4),
                    Color::HOT_PINK,
                );
            }
        }

        self.caption = Some(format!(
            "Step: {}; Flashes: {}",
            snapshot.step, snapshot.flashes
        ));
        self.cursor += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/flash_grid.rs"]
mod tests;
