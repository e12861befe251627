use crate::shapes::Shape;
use crate::math::{Transform, Vector3};

/// A box (cuboid) collision shape centered on the local origin
#[derive(Debug, Clone)]
pub struct BoxShape {
    half_extents: Vector3,
}

impl BoxShape {
    /// Creates a new box with the given half-extents
    pub fn new(half_extents: Vector3) -> Self {
        Self {
            half_extents: Vector3::new(
                half_extents.x.max(0.0),
                half_extents.y.max(0.0),
                half_extents.z.max(0.0),
            ),
        }
    }

    /// Returns the 8 vertices of the box in local space
    pub fn get_vertices(&self) -> [Vector3; 8] {
        let Vector3 { x, y, z } = self.half_extents;

        [
            Vector3::new(-x, -y, -z),
            Vector3::new(x, -y, -z),
            Vector3::new(x, y, -z),
            Vector3::new(-x, y, -z),
            Vector3::new(-x, -y, z),
            Vector3::new(x, -y, z),
            Vector3::new(x, y, z),
            Vector3::new(-x, y, z),
        ]
    }
}

impl Shape for BoxShape {
    fn bounding_radius(&self) -> f64 {
        self.half_extents.length()
    }

    // One contact per vertex at or below the plane, like a vertex-based
    // box/plane contact generator.
    fn ground_contacts(&self, pose: &Transform, height: f64) -> u32 {
        self.get_vertices()
            .iter()
            .filter(|v| pose.transform_point(**v).y <= height)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quaternion;
    use approx::assert_relative_eq;

    #[test]
    fn bounding_radius_reaches_the_corners() {
        let cube = BoxShape::new(Vector3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(cube.bounding_radius(), 3.0_f64.sqrt());
        for v in cube.get_vertices() {
            assert!(v.length() <= cube.bounding_radius() + 1e-12);
        }
    }

    #[test]
    fn resting_face_gives_four_contacts() {
        let cube = BoxShape::new(Vector3::new(0.5, 0.5, 0.5));
        let flat = Transform::from_position(Vector3::new(0.0, 0.5, 0.0));
        assert_eq!(cube.ground_contacts(&flat, 0.0), 4);

        // balanced on an edge after a 45 degree roll about z
        let tilt = Quaternion::from_axis_angle(Vector3::unit_z(), std::f64::consts::FRAC_PI_4);
        let on_edge = Transform::new(Vector3::new(0.0, 0.5 * 2.0_f64.sqrt(), 0.0), tilt);
        assert_eq!(cube.ground_contacts(&on_edge, 1e-9), 2);
    }
}
