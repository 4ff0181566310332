//! Built-in visualizers and static renders used by the CLI and as worked examples.

use std::{fmt, str::FromStr};

use crate::{
    foundation::error::{VisError, VisResult},
    visualize::visualizer::Visualizer,
};

pub mod flash_grid;
pub mod glyph_sheet;
pub mod orbits;
pub mod showcase;

pub(crate) const SAMPLE_GRID: &str = include_str!("../../assets/flash-grid-sample.txt");

/// Steps simulated by the flash-grid demo.
pub const FLASH_GRID_STEPS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoKind {
    FlashGrid,
    Orbits,
}

impl DemoKind {
    pub const ALL: [DemoKind; 2] = [DemoKind::FlashGrid, DemoKind::Orbits];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::FlashGrid => "flash-grid",
            DemoKind::Orbits => "orbits",
        }
    }

    /// Build the visualizer. `input` replaces the bundled sample where the demo reads one.
    pub fn build(self, input: Option<&str>) -> VisResult<Box<dyn Visualizer>> {
        Ok(match self {
            DemoKind::FlashGrid => {
                let grid = flash_grid::Grid::parse(input.unwrap_or(SAMPLE_GRID))?;
                Box::new(flash_grid::FlashGrid::new(grid, FLASH_GRID_STEPS))
            }
            DemoKind::Orbits => {
                if input.is_some() {
                    tracing::warn!("orbits takes no input; ignoring it");
                }
                Box::new(orbits::Orbits::default())
            }
        })
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = VisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|d| d.name()).collect();
                VisError::validation(format!(
                    "unknown demo '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demos/mod.rs"]
mod tests;
