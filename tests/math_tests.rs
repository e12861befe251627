use approx::assert_relative_eq;
use ca_harness::math::{Direction, Quaternion, Rotation, Transform, Vector3};
use ca_harness::error::HarnessError;
use std::f64::consts::PI;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    let sum = v1 + v2;
    assert_eq!((sum.x, sum.y, sum.z), (5.0, 7.0, 9.0));

    let diff = v2 - v1;
    assert_eq!((diff.x, diff.y, diff.z), (3.0, 3.0, 3.0));

    let scaled = v1 * 2.0;
    assert_eq!((scaled.x, scaled.y, scaled.z), (2.0, 4.0, 6.0));

    assert_eq!(v1.dot(&v2), 32.0);

    let cross = v1.cross(&v2);
    assert_eq!((cross.x, cross.y, cross.z), (-3.0, 6.0, -3.0));

    let length = v1.length();
    assert_relative_eq!(length, 14.0_f64.sqrt());

    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_eq!(v1.max_abs_component(), 3.0);
}

#[test]
fn test_zero_vector_has_no_direction() {
    assert!(Vector3::zero().try_normalize().is_none());
    assert!(matches!(
        Direction::try_new(Vector3::zero()),
        Err(HarnessError::DegenerateDirection)
    ));

    let d = Direction::try_new(Vector3::new(0.0, 3.0, 4.0)).unwrap();
    assert_relative_eq!(d.length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(d.y, 0.6, epsilon = 1e-12);
}

#[test]
fn test_quaternion_operations() {
    let q = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0);
    assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);

    // x rotated 90 degrees about y becomes -z
    let rotated = q.rotate_vector(Vector3::unit_x());
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-12);

    let back = Quaternion::from_axis_angle(Vector3::unit_y(), -PI / 2.0).rotate_vector(rotated);
    assert_relative_eq!(back.x, 1.0, epsilon = 1e-12);

    let composed = q * q;
    let flipped = composed.rotate_vector(Vector3::unit_x());
    assert_relative_eq!(flipped.x, -1.0, epsilon = 1e-12);

    let identity = Quaternion::from_axis_angle(Vector3::zero(), 1.0);
    assert_eq!(identity, Quaternion::identity());
}

#[test]
fn test_transform_operations() {
    let transform = Transform::new(
        Vector3::new(1.0, 2.0, 3.0),
        Quaternion::from_axis_angle(Vector3::unit_z(), PI / 2.0),
    );

    let p = transform.transform_point(Vector3::unit_x());
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 3.0, epsilon = 1e-12);

    // a child offset along its own x lands along the parent's y
    let child = Transform::from_position(Vector3::unit_x());
    let combined = transform.combine(&child);
    assert_relative_eq!(combined.position.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(combined.position.y, 3.0, epsilon = 1e-12);
    assert_relative_eq!(combined.rotation.length(), 1.0, epsilon = 1e-12);
}
