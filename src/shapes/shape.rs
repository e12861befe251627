use crate::math::Transform;
use std::fmt::Debug;

/// Collision geometry attached to a link
pub trait Shape: Send + Sync + Debug + 'static {
    /// Radius of the smallest sphere centered at the local origin that
    /// contains the shape
    fn bounding_radius(&self) -> f64;

    /// Number of contacts the shape makes with the horizontal plane
    /// `y = height` when placed at `pose`
    fn ground_contacts(&self, pose: &Transform, height: f64) -> u32;
}
