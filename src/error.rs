//! Crate error type.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the wireframe pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A recognized primitive with no implementation (currently the torus).
    #[error("unsupported primitive: {0}")]
    Unsupported(&'static str),

    /// Frame export failure.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
