use crate::core::{MultibodyEngine, StepModel};
use crate::integration::Integrator;
use crate::Result;

/// Explicit Euler on generalized coordinates: `q <- q + h * qd`
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedEuler;

impl GeneralizedEuler {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for GeneralizedEuler {
    fn advance(&mut self, engine: &mut dyn MultibodyEngine, step: &StepModel) -> Result<()> {
        let q = engine.configuration();
        let qd = engine.velocity();
        engine.set_configuration(&(q + qd * step.step()))
    }

    fn name(&self) -> &str {
        "GeneralizedEuler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::SerialChain;
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    #[test]
    fn advances_configuration_by_scaled_velocity() {
        let mut chain = SerialChain::uniform(3, 1.0, 0.1);
        chain.set_configuration(&DVector::from_vec(vec![0.1, -0.2, 0.3])).unwrap();
        chain.set_velocity(&DVector::from_vec(vec![1.0, 0.5, -1.0])).unwrap();

        let mut euler = GeneralizedEuler::new();
        euler.advance(&mut chain, &StepModel::unit()).unwrap();
        let q = chain.configuration();
        assert_relative_eq!(q[0], 1.1, epsilon = 1e-12);
        assert_relative_eq!(q[1], 0.3, epsilon = 1e-12);
        assert_relative_eq!(q[2], -0.7, epsilon = 1e-12);

        euler.advance(&mut chain, &StepModel::new(0.5).unwrap()).unwrap();
        assert_relative_eq!(chain.configuration()[0], 1.6, epsilon = 1e-12);

        // velocity is held constant across the step
        assert_eq!(chain.velocity(), DVector::from_vec(vec![1.0, 0.5, -1.0]));
    }
}
