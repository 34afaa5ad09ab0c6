//! Construction-time validation errors.

use thiserror::Error;

/// Invalid construction parameters, rejected before any per-voxel work so
/// NaN or infinite intermediates never reach the render loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("voxel grid dimensions must be positive, got {cols}x{rows}x{slices}")]
    InvalidGridDimensions {
        cols: usize,
        rows: usize,
        slices: usize,
    },

    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidImageDimensions { width: usize, height: usize },

    #[error("field of view must lie strictly between 0 and 180 degrees, got {fov_degrees}")]
    InvalidFieldOfView { fov_degrees: f32 },
}
