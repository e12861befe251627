pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod integration;
pub mod verification;
pub mod diagnostics;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, HarnessConfig, MultibodyEngine, ReportFormat, StepModel};
pub use crate::bodies::{SerialChain, SerialChainBuilder};
pub use crate::collision::{AdvancementBound, ChainAdvancementBound, ContactPair, ContactTopologyMonitor, ZeroBound};
pub use crate::integration::{GeneralizedEuler, Integrator};
pub use crate::verification::{DisplacementVerifier, HarnessBuilder, ScenarioSampler, TrialDriver, TrialRecord, TrialSummary};
pub use crate::diagnostics::{DiagnosticSink, LineSink, MemorySink};
pub use crate::math::{Direction, Vector3};

/// Error types for the verification harness
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum HarnessError {
        #[error("Invalid topology: {links} link(s), at least 2 are required")]
        InvalidTopology { links: usize },

        #[error("Link {link} has no collision geometry")]
        MissingGeometry { link: usize },

        #[error("Direction vector has zero length")]
        DegenerateDirection,

        #[error("Bound violated in {violations} of {trials} trial(s); oracle and integrator step models disagree")]
        OracleContractMismatch { violations: usize, trials: usize },

        #[error("Dimension mismatch: expected {expected}, got {actual}")]
        DimensionMismatch { expected: usize, actual: usize },

        #[error("Link {link} out of range for a body with {links} link(s)")]
        LinkOutOfRange { link: usize, links: usize },

        #[error("Missing collaborator: {0}")]
        MissingCollaborator(&'static str),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, error::HarnessError>;
