//! A wireframe 3D-to-2D rendering pipeline.
//!
//! Shape generators emit homogeneous points into an [`EdgeList`], affine
//! [`Transform`]s reshape them, and the Bresenham rasterizer walks the
//! edge pairs into a [`Frame`] of RGB pixels. All rendering is done on
//! the CPU; the frame can be exported as a PNG.
//!
//! # Quick Start
//!
//! ```ignore
//! use wiremesh::prelude::*;
//!
//! let mut edges = EdgeList::new();
//! shapes::add_cube(&mut edges, 150.0, 350.0, 0.0, 200.0, 200.0, 200.0);
//! edges.transform(&Transform::rotate('y', 30.0));
//!
//! let mut frame = Frame::default();
//! draw_edges(&mut frame, &edges, Pixel::WHITE);
//! frame.save_png("cube.png")?;
//! ```

pub mod edgelist;
pub mod error;
pub mod math;
pub mod render;
pub mod shapes;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use edgelist::EdgeList;
pub use error::{Error, Result};
pub use render::{draw_edges, draw_line, Frame, Pixel};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wiremesh::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::edgelist::EdgeList;
    pub use crate::shapes;

    // Transforms
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::{draw_edges, draw_line, Frame, Pixel, IMG_HEIGHT, IMG_WIDTH};

    // Errors
    pub use crate::error::{Error, Result};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{draw_edges, draw_line, Frame, Pixel};
}
