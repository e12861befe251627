pub mod config;
pub mod engine;
pub mod events;

pub use self::config::{HarnessConfig, ReportFormat, StepModel, DEFAULT_TRIALS};
pub use self::engine::{MultibodyEngine, SimulationHost};
pub use self::events::{ConstraintObserver, PostStepObserver, StepHooks};

use std::fmt;

/// A unique identifier for a body taking part in contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// The static ground body of the reference chain simulation
    pub const GROUND: BodyHandle = BodyHandle(u32::MAX);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == Self::GROUND {
            write!(f, "ground")
        } else {
            write!(f, "body{}", self.0)
        }
    }
}

/// Kinds of constraints a solver hands to constraint observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A unilateral contact between two bodies
    Contact,

    /// A joint limit on an articulated body
    Limit,
}

/// One constraint of the current step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
}

impl Constraint {
    /// Creates a contact constraint between two bodies
    pub fn contact(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self {
            kind: ConstraintKind::Contact,
            body_a,
            body_b,
        }
    }

    /// Creates a joint-limit constraint on a single body
    pub fn limit(body: BodyHandle) -> Self {
        Self {
            kind: ConstraintKind::Limit,
            body_a: body,
            body_b: body,
        }
    }

    pub fn is_contact(&self) -> bool {
        self.kind == ConstraintKind::Contact
    }
}
