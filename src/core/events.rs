use crate::core::{Constraint, SimulationHost};
use crate::Result;

/// Called once after every simulation step
pub trait PostStepObserver {
    fn post_step(&mut self, host: &dyn SimulationHost) -> Result<()>;
}

/// Called once per step with the constraint set produced by collision detection
pub trait ConstraintObserver {
    fn on_constraints(&mut self, host: &dyn SimulationHost, constraints: &[Constraint]) -> Result<()>;
}

impl<F> PostStepObserver for F
where
    F: FnMut(&dyn SimulationHost) -> Result<()>,
{
    fn post_step(&mut self, host: &dyn SimulationHost) -> Result<()> {
        self(host)
    }
}

/// Observers registered with a stepping host.
///
/// Observers are borrowed for the lifetime of the hooks, so the caller keeps
/// ownership and can inspect them once stepping is done. Dispatch is
/// synchronous and follows registration order.
#[derive(Default)]
pub struct StepHooks<'a> {
    post_step: Vec<&'a mut dyn PostStepObserver>,
    constraint: Vec<&'a mut dyn ConstraintObserver>,
}

impl<'a> StepHooks<'a> {
    /// Creates an empty set of hooks
    pub fn new() -> Self {
        Self {
            post_step: Vec::new(),
            constraint: Vec::new(),
        }
    }

    /// Registers a post-step observer
    pub fn on_post_step(&mut self, observer: &'a mut dyn PostStepObserver) -> &mut Self {
        self.post_step.push(observer);
        self
    }

    /// Registers a constraint-resolution observer
    pub fn on_constraints(&mut self, observer: &'a mut dyn ConstraintObserver) -> &mut Self {
        self.constraint.push(observer);
        self
    }

    /// Returns whether no observer is registered
    pub fn is_empty(&self) -> bool {
        self.post_step.is_empty() && self.constraint.is_empty()
    }

    /// Delivers the step's constraint set to every constraint observer
    pub fn dispatch_constraints(&mut self, host: &dyn SimulationHost, constraints: &[Constraint]) -> Result<()> {
        for observer in self.constraint.iter_mut() {
            observer.on_constraints(host, constraints)?;
        }
        Ok(())
    }

    /// Notifies every post-step observer
    pub fn dispatch_post_step(&mut self, host: &dyn SimulationHost) -> Result<()> {
        for observer in self.post_step.iter_mut() {
            observer.post_step(host)?;
        }
        Ok(())
    }

    /// Runs the callbacks of one step: constraints first, then post-step
    pub fn dispatch_step(&mut self, host: &dyn SimulationHost, constraints: &[Constraint]) -> Result<()> {
        self.dispatch_constraints(host, constraints)?;
        self.dispatch_post_step(host)
    }
}
