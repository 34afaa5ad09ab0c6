//! Camera view basis and world-to-camera transform.

use glam::Vec3;
use scene_types::CameraPose;

use crate::transform::rotation_ypr;

/// World up axis used for look-at basis derivation.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Squared length below which a derived vector is treated as degenerate.
const DEGENERATE_EPS: f32 = 1e-6;

/// Right-handed orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Substitute frame for degenerate look-at input.
    pub const FALLBACK: Basis = Basis {
        forward: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
    };
}

/// Outcome of deriving a camera basis, tagged so callers and tests can tell
/// whether the degenerate fallback was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasisDerivation {
    Orthonormal(Basis),
    DegenerateFallback(Basis),
}

impl BasisDerivation {
    pub fn basis(&self) -> Basis {
        match self {
            Self::Orthonormal(b) | Self::DegenerateFallback(b) => *b,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::DegenerateFallback(_))
    }
}

/// Derive a look-at basis: `forward` toward the target, `right` from the
/// cross with world up, `up` completing the frame. A zero-length forward
/// (target equals position) or a forward parallel to world up returns the
/// fallback frame instead of dividing by zero.
pub fn look_at_basis(position: Vec3, target: Vec3) -> BasisDerivation {
    let forward = target - position;
    if forward.length_squared() < DEGENERATE_EPS {
        return BasisDerivation::DegenerateFallback(Basis::FALLBACK);
    }
    let forward = forward.normalize();
    let right = forward.cross(WORLD_UP);
    if right.length_squared() < DEGENERATE_EPS {
        return BasisDerivation::DegenerateFallback(Basis::FALLBACK);
    }
    let right = right.normalize();
    let up = right.cross(forward);
    BasisDerivation::Orthonormal(Basis { forward, right, up })
}

/// How the camera's orientation is authored. Exactly one mode is active per
/// camera instance.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Orientation {
    /// Basis derived from a target point.
    LookAt { target: Vec3 },
    /// Yaw/pitch/roll in radians applied to the default axes.
    Euler { yaw: f32, pitch: f32, roll: f32 },
}

/// A camera with a position and a derived orthonormal view basis.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    basis: Basis,
    fallback: bool,
}

impl Camera {
    /// Camera at `position` looking toward `target`.
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self {
            position,
            orientation: Orientation::LookAt { target },
            basis: Basis::FALLBACK,
            fallback: false,
        };
        camera.rebuild_basis();
        camera
    }

    /// Camera at `position` with the default axes rotated by yaw/pitch/roll
    /// in degrees, composed in the same order as the object transform.
    pub fn with_rotation_degrees(position: Vec3, yaw: f32, pitch: f32, roll: f32) -> Self {
        let mut camera = Self {
            position,
            orientation: Orientation::Euler {
                yaw: yaw.to_radians(),
                pitch: pitch.to_radians(),
                roll: roll.to_radians(),
            },
            basis: Basis::FALLBACK,
            fallback: false,
        };
        camera.rebuild_basis();
        camera
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild_basis();
    }

    /// Switch to (or update) look-at orientation.
    pub fn set_target(&mut self, target: Vec3) {
        self.orientation = Orientation::LookAt { target };
        self.rebuild_basis();
    }

    /// Switch to (or update) explicit rotation, in degrees.
    pub fn set_rotation_degrees(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.orientation = Orientation::Euler {
            yaw: yaw.to_radians(),
            pitch: pitch.to_radians(),
            roll: roll.to_radians(),
        };
        self.rebuild_basis();
    }

    /// Every mutation lands here; the basis is never cached across changes.
    fn rebuild_basis(&mut self) {
        match self.orientation {
            Orientation::LookAt { target } => {
                let derived = look_at_basis(self.position, target);
                self.fallback = derived.is_fallback();
                self.basis = derived.basis();
            }
            Orientation::Euler { yaw, pitch, roll } => {
                let rotation = rotation_ypr(yaw, pitch, roll);
                self.basis = Basis {
                    forward: rotation * Vec3::Z,
                    right: rotation * Vec3::X,
                    up: rotation * Vec3::Y,
                };
                self.fallback = false;
            }
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// True when the last basis derivation took the degenerate fallback path.
    pub fn used_fallback(&self) -> bool {
        self.fallback
    }

    /// Project a world point onto the camera frame. `x` is lateral offset
    /// along `right`, `y` vertical offset along `up`, and `z` depth along
    /// `forward` — not Euclidean distance.
    pub fn world_to_camera(&self, world: Vec3) -> Vec3 {
        let d = world - self.position;
        Vec3::new(
            d.dot(self.basis.right),
            d.dot(self.basis.up),
            d.dot(self.basis.forward),
        )
    }
}

impl From<&CameraPose> for Camera {
    fn from(pose: &CameraPose) -> Self {
        Camera::with_rotation_degrees(
            pose.position,
            pose.rotation.yaw,
            pose.rotation.pitch,
            pose.rotation.roll,
        )
    }
}
