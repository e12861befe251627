mod vector;
mod transform;
mod rotation;
mod direction;

pub use vector::Vector3;
pub use transform::Transform;
pub use rotation::{Quaternion, Rotation};
pub use direction::Direction;

/// Lengths at or below this are treated as zero when normalizing
pub const EPSILON: f64 = f64::EPSILON;

/// Tolerance used when checking that a direction has unit length
pub const UNIT_TOLERANCE: f64 = 1.0e-9;
