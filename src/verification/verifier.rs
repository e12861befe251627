use crate::collision::AdvancementBound;
use crate::core::{MultibodyEngine, StepModel};
use crate::integration::Integrator;
use crate::verification::{Scenario, ScenarioSampler};
use crate::Result;
use rand::Rng;

/// Outcome of one trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    /// Link the material point was taken from
    pub link: usize,

    /// Distance reported by the oracle
    pub bound: f64,

    /// Measured displacement along the sampled direction
    pub actual: f64,

    /// `bound - actual`; negative means the bound was violated
    pub residual: f64,
}

impl TrialRecord {
    pub fn new(link: usize, bound: f64, actual: f64) -> Self {
        Self {
            link,
            bound,
            actual,
            residual: bound - actual,
        }
    }

    /// Whether the oracle under-estimated the displacement
    pub fn is_violation(&self) -> bool {
        self.residual < 0.0
    }
}

/// Compares an oracle's bound with the displacement measured after one
/// integration step.
///
/// The oracle and the integrator are handed the same `StepModel`.
pub struct DisplacementVerifier {
    oracle: Box<dyn AdvancementBound>,
    integrator: Box<dyn Integrator>,
    step: StepModel,
}

impl DisplacementVerifier {
    pub fn new(oracle: Box<dyn AdvancementBound>, integrator: Box<dyn Integrator>, step: StepModel) -> Self {
        Self {
            oracle,
            integrator,
            step,
        }
    }

    pub fn step(&self) -> &StepModel {
        &self.step
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }

    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Applies `scenario` to `engine`, queries the bound, integrates one step
    /// and measures how far the material point moved along the direction.
    pub fn verify(&mut self, engine: &mut dyn MultibodyEngine, scenario: &Scenario) -> Result<TrialRecord> {
        engine.set_configuration(&scenario.configuration)?;
        engine.set_velocity(&scenario.velocity)?;

        let p0 = engine.point_to_global(scenario.link, scenario.point)?;
        let bound = self.oracle.max_displacement(
            &*engine,
            scenario.link,
            &scenario.direction,
            scenario.radius,
            &self.step,
        )?;

        self.integrator.advance(engine, &self.step)?;
        let p1 = engine.point_to_global(scenario.link, scenario.point)?;

        let actual = (p1 - p0).dot(&scenario.direction).abs();
        Ok(TrialRecord::new(scenario.link, bound, actual))
    }

    /// Samples a scenario and verifies it
    pub fn run_trial<R: Rng>(
        &mut self,
        engine: &mut dyn MultibodyEngine,
        sampler: &mut ScenarioSampler<R>,
    ) -> Result<TrialRecord> {
        let scenario = sampler.sample(&*engine)?;
        self.verify(engine, &scenario)
    }
}
