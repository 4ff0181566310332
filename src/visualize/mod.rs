//! Running a visualizer frame by frame into an exported sequence.

pub mod driver;
pub mod visualizer;
