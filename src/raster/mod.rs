pub(crate) mod canvas;
pub(crate) mod font;
pub(crate) mod frame;
