use crate::{foundation::core::Size, raster::canvas::Canvas};

/// A per-puzzle animation that renders its own state onto a [`Canvas`].
///
/// The driver polls [`Visualizer::is_completed`] before every frame and stops the moment it
/// reports `true`; implementors flip it from inside `render_frame` once the last state has been
/// drawn. The canvas is shared across frames, so implementors that want a blank slate call
/// [`Canvas::start_new_frame`] first.
pub trait Visualizer {
    /// Canvas size; read once when a run starts.
    fn dimensions(&self) -> Size;

    /// Drawn centered near the top of every frame.
    fn title(&self) -> String;

    /// Optional caption drawn centered near the bottom of the frame just rendered.
    fn frame_description(&self) -> Option<String> {
        None
    }

    fn is_completed(&self) -> bool;

    fn render_frame(&mut self, canvas: &mut Canvas);
}
