use crate::error::HarnessError;
use crate::math::Vector3;
use crate::Result;
use std::ops::Deref;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unit vector in the global frame.
///
/// Construction normalizes the input, so every `Direction` has unit length
/// within `UNIT_TOLERANCE`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Direction(Vector3);

impl Direction {
    /// Normalizes `v`, failing with `DegenerateDirection` when it has no length
    pub fn try_new(v: Vector3) -> Result<Self> {
        v.try_normalize()
            .filter(|n| n.x.is_finite() && n.y.is_finite() && n.z.is_finite())
            .map(Self)
            .ok_or(HarnessError::DegenerateDirection)
    }
}

impl Deref for Direction {
    type Target = Vector3;

    fn deref(&self) -> &Vector3 {
        &self.0
    }
}
