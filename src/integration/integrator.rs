use crate::core::{MultibodyEngine, StepModel};
use crate::Result;

/// Advances a multibody's generalized coordinates by one step
pub trait Integrator {
    /// Integrates the engine's configuration over `step`, leaving the
    /// generalized velocity unchanged
    fn advance(&mut self, engine: &mut dyn MultibodyEngine, step: &StepModel) -> Result<()>;

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
