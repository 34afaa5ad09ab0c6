//! Render canvas settings.

use serde::{Deserialize, Serialize};

/// Output canvas dimensions and field of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Output image width in pixels.
    pub width: usize,
    /// Output image height in pixels.
    pub height: usize,
    /// Horizontal field of view in degrees, valid strictly between 0 and 180.
    pub fov_degrees: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov_degrees: 50.0,
        }
    }
}
