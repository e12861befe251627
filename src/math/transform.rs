use crate::math::{Quaternion, Rotation, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rigid pose: rotation followed by translation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position of the frame origin in the parent frame
    pub position: Vector3,

    /// Orientation of the frame relative to the parent frame
    pub rotation: Quaternion,
}

impl Transform {
    /// Creates a new transform with the given position and rotation
    #[inline]
    pub fn new(position: Vector3, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    /// Creates the identity transform
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Quaternion::identity(),
        }
    }

    /// Creates a pure translation
    #[inline]
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            rotation: Quaternion::identity(),
        }
    }

    /// Maps a point from this frame into the parent frame
    #[inline]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.rotation.rotate_vector(point) + self.position
    }

    /// Composes `self` with a child transform expressed in this frame
    pub fn combine(&self, child: &Transform) -> Self {
        Self {
            position: self.transform_point(child.position),
            rotation: (self.rotation * child.rotation).normalize(),
        }
    }
}
