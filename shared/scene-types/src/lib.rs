//! Scene Types
//!
//! Pure data types shared between the renderer core and the configuration
//! front-ends: object poses, camera pose, and canvas settings. No rendering
//! logic lives here — only defaults and plain fields.

pub mod canvas;
pub mod pose;

pub use canvas::CanvasSettings;
pub use pose::{CameraPose, ObjectPose, RotationDegrees};
