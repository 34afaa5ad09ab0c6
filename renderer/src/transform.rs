//! Object-space to world-space transform.

use glam::{Mat3, Vec3};
use scene_types::ObjectPose;

/// The canonical rotation composition: yaw about Y, then pitch about X,
/// then roll about Z. Object transform and camera both route through this
/// helper so angles authored for either agree visually.
pub(crate) fn rotation_ypr(yaw: f32, pitch: f32, roll: f32) -> Mat3 {
    Mat3::from_rotation_z(roll) * Mat3::from_rotation_x(pitch) * Mat3::from_rotation_y(yaw)
}

/// Uniform scale, yaw/pitch/roll rotation and translation, pivoting around
/// a caller-supplied centroid.
#[derive(Debug, Clone)]
pub struct Transform {
    rotation: Mat3,
    translation: Vec3,
    scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform: no rotation, no translation, scale 1.0.
    pub fn new() -> Self {
        Self {
            rotation: Mat3::IDENTITY,
            translation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Set rotation angles in degrees; stored internally in radians via the
    /// prebuilt rotation matrix.
    pub fn set_rotation_degrees(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation = rotation_ypr(yaw.to_radians(), pitch.to_radians(), roll.to_radians());
    }

    pub fn set_translation(&mut self, tx: f32, ty: f32, tz: f32) {
        self.translation = Vec3::new(tx, ty, tz);
    }

    /// Set the uniform scale factor. Non-positive input resets to 1.0
    /// instead of being rejected.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = if scale > 0.0 { scale } else { 1.0 };
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Map a local point into world space: centroid-relative, scaled,
    /// rotated, then moved back to the centroid and translated. Pure with
    /// respect to stored state, so it is safe to call concurrently.
    pub fn transform_point(&self, point: Vec3, centroid: Vec3) -> Vec3 {
        let local = (point - centroid) * self.scale;
        centroid + self.rotation * local + self.translation
    }
}

impl From<&ObjectPose> for Transform {
    fn from(pose: &ObjectPose) -> Self {
        let mut transform = Transform::new();
        transform.set_rotation_degrees(pose.rotation.yaw, pose.rotation.pitch, pose.rotation.roll);
        transform.set_translation(pose.position.x, pose.position.y, pose.position.z);
        transform.set_scale(pose.scale);
        transform
    }
}
