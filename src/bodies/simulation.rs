use crate::bodies::SerialChain;
use crate::core::{MultibodyEngine, SimulationHost, StepHooks, StepModel};
use crate::integration::Integrator;
use crate::Result;
use nalgebra::DVector;

/// Steps a `SerialChain` over a ground plane and drives registered observers.
///
/// Each step integrates the chain, advances the clock, collects ground
/// contacts, then dispatches the step's callbacks.
pub struct ChainSimulation<I: Integrator> {
    chain: SerialChain,
    integrator: I,
    step: StepModel,
    ground_height: f64,
    time: f64,
}

impl<I: Integrator> ChainSimulation<I> {
    pub fn new(chain: SerialChain, integrator: I, step: StepModel) -> Self {
        Self {
            chain,
            integrator,
            step,
            ground_height: 0.0,
            time: 0.0,
        }
    }

    pub fn with_ground_height(mut self, height: f64) -> Self {
        self.ground_height = height;
        self
    }

    pub fn chain(&self) -> &SerialChain {
        &self.chain
    }

    /// Advances one step and runs the callbacks in `hooks`
    pub fn step(&mut self, hooks: &mut StepHooks<'_>) -> Result<()> {
        self.integrator.advance(&mut self.chain, &self.step)?;
        self.time += self.step.step();
        let contacts = self.chain.ground_contacts(self.ground_height);
        hooks.dispatch_step(&*self, &contacts)
    }

    /// Runs `steps` steps
    pub fn run(&mut self, steps: usize, hooks: &mut StepHooks<'_>) -> Result<()> {
        for _ in 0..steps {
            self.step(hooks)?;
        }
        Ok(())
    }
}

impl<I: Integrator> SimulationHost for ChainSimulation<I> {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn kinetic_energy(&self) -> f64 {
        self.chain.kinetic_energy()
    }

    fn generalized_coordinates(&self) -> DVector<f64> {
        self.chain.configuration()
    }
}
