use crate::shapes::Shape;
use crate::math::{Transform, Vector3};

/// A capsule aligned with the local y axis (cylinder with hemisphere caps)
#[derive(Debug, Clone)]
pub struct Capsule {
    radius: f64,

    /// Height of the cylinder part, excluding the caps
    height: f64,
}

impl Capsule {
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn get_half_height(&self) -> f64 {
        self.height * 0.5
    }

    fn cap_centers(&self) -> [Vector3; 2] {
        let h = self.get_half_height();
        [Vector3::new(0.0, -h, 0.0), Vector3::new(0.0, h, 0.0)]
    }
}

impl Shape for Capsule {
    fn bounding_radius(&self) -> f64 {
        self.get_half_height() + self.radius
    }

    fn ground_contacts(&self, pose: &Transform, height: f64) -> u32 {
        self.cap_centers()
            .iter()
            .filter(|c| pose.transform_point(**c).y - self.radius <= height)
            .count() as u32
    }
}
