//! Frame storage and line rasterization.

pub mod frame;
pub mod line;

pub use frame::{Frame, Pixel, IMG_HEIGHT, IMG_WIDTH};
pub use line::{draw_edges, draw_line};
