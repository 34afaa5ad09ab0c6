use glam::Vec3;
use rocket_renderer::Transform;
use scene_types::{ObjectPose, RotationDegrees};

const EPS: f32 = 1e-4;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPS
}

#[test]
fn identity_returns_input_for_any_centroid() {
    let t = Transform::new();
    let p = Vec3::new(12.0, -4.0, 99.0);
    for centroid in [
        Vec3::ZERO,
        Vec3::new(160.0, 225.0, 160.0),
        Vec3::new(-7.0, 3.5, 12.0),
    ] {
        assert!(close(t.transform_point(p, centroid), p));
    }
}

#[test]
fn pitch_90_rotates_y_into_z() {
    let mut t = Transform::new();
    t.set_rotation_degrees(0.0, 90.0, 0.0);
    let out = t.transform_point(Vec3::Y, Vec3::ZERO);
    assert!(close(out, Vec3::Z), "{out:?}");
}

#[test]
fn roll_90_rotates_x_into_y() {
    let mut t = Transform::new();
    t.set_rotation_degrees(0.0, 0.0, 90.0);
    let out = t.transform_point(Vec3::X, Vec3::ZERO);
    assert!(close(out, Vec3::Y), "{out:?}");
}

#[test]
fn yaw_then_pitch_order_is_pinned() {
    // Yaw 90 sends +X to -Z; pitch 90 then lifts -Z to +Y. The reversed
    // composition (pitch before yaw) would leave the point on -Z, so this
    // pins the yaw -> pitch -> roll order.
    let mut t = Transform::new();
    t.set_rotation_degrees(90.0, 90.0, 0.0);
    let out = t.transform_point(Vec3::X, Vec3::ZERO);
    assert!(close(out, Vec3::Y), "{out:?}");
}

#[test]
fn scale_is_applied_around_the_centroid() {
    let mut t = Transform::new();
    t.set_scale(2.0);
    let centroid = Vec3::new(10.0, 10.0, 10.0);
    let out = t.transform_point(Vec3::new(12.0, 10.0, 10.0), centroid);
    assert!(close(out, Vec3::new(14.0, 10.0, 10.0)), "{out:?}");
}

#[test]
fn non_positive_scale_resets_to_one() {
    let mut t = Transform::new();
    t.set_scale(-2.0);
    assert_eq!(t.scale(), 1.0);
    t.set_scale(0.0);
    assert_eq!(t.scale(), 1.0);
    let p = Vec3::new(3.0, 4.0, 5.0);
    assert!(close(t.transform_point(p, Vec3::ZERO), p));
}

#[test]
fn translation_applies_after_rotation() {
    let mut t = Transform::new();
    t.set_rotation_degrees(90.0, 0.0, 0.0);
    t.set_translation(5.0, 0.0, 0.0);
    let out = t.transform_point(Vec3::X, Vec3::ZERO);
    assert!(close(out, Vec3::new(5.0, 0.0, -1.0)), "{out:?}");
}

#[test]
fn pose_conversion_carries_all_fields() {
    let pose = ObjectPose {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation: RotationDegrees::default(),
        scale: 2.0,
    };
    let t = Transform::from(&pose);
    assert_eq!(t.scale(), 2.0);
    assert!(close(t.translation(), Vec3::new(1.0, 2.0, 3.0)));
    // Non-positive authored scale is coerced on the way in.
    let pose = ObjectPose { scale: -1.0, ..pose };
    assert_eq!(Transform::from(&pose).scale(), 1.0);
}
