use crate::shapes::Shape;
use crate::math::Transform;

/// A spherical collision shape
#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere; negative radii clamp to zero
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }
}

impl Shape for Sphere {
    fn bounding_radius(&self) -> f64 {
        self.radius
    }

    fn ground_contacts(&self, pose: &Transform, height: f64) -> u32 {
        u32::from(pose.position.y - self.radius <= height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_bounds_and_contacts() {
        let sphere = Sphere::new(0.5);
        assert_relative_eq!(sphere.bounding_radius(), 0.5);

        let resting = Transform::from_position(Vector3::new(0.0, 0.5, 0.0));
        let airborne = Transform::from_position(Vector3::new(0.0, 0.6, 0.0));
        assert_eq!(sphere.ground_contacts(&resting, 0.0), 1);
        assert_eq!(sphere.ground_contacts(&airborne, 0.0), 0);
    }

    #[test]
    fn negative_radius_clamps() {
        assert_eq!(Sphere::new(-1.0).bounding_radius(), 0.0);
    }
}
