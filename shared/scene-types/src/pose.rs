//! Object and camera pose data.
//!
//! These structs mirror what the configuration layer authors per frame: a
//! translation, a rotation in degrees, and an optional uniform scale.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rotation angles in degrees around the three axes.
///
/// Fixed-shape replacement for loosely keyed rotation maps: every field is
/// named, and a field missing from serialized input deserializes to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationDegrees {
    /// Rotation around the Y axis.
    pub yaw: f32,
    /// Rotation around the X axis.
    pub pitch: f32,
    /// Rotation around the Z axis.
    pub roll: f32,
}

impl RotationDegrees {
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }
}

/// One animation point: where the object sits and how it is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectPose {
    /// Object translation in world space.
    pub position: Vec3,
    /// Object rotation in degrees.
    pub rotation: RotationDegrees,
    /// Uniform scale factor. The transform stage coerces non-positive
    /// values to 1.0.
    pub scale: f32,
}

impl Default for ObjectPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: RotationDegrees::default(),
            scale: 1.0,
        }
    }
}

/// Camera placement authored directly as position plus rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera rotation in degrees, applied to the default forward axis.
    pub rotation: RotationDegrees,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -150.0),
            rotation: RotationDegrees::default(),
        }
    }
}
