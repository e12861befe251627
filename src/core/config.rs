use crate::error::HarnessError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Trials per run when none are configured
pub const DEFAULT_TRIALS: usize = 100_000;

/// The integration step shared by the bound oracle and the integrator.
///
/// Both collaborators receive the same `StepModel`, so the oracle's bound is
/// always computed for the step the integrator actually takes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct StepModel {
    step: f64,
}

impl StepModel {
    /// Fails with `InvalidParameter` unless `step` is finite and positive
    pub fn new(step: f64) -> Result<Self> {
        let model = Self { step };
        model.validate()?;
        Ok(model)
    }

    pub fn unit() -> Self {
        Self { step: 1.0 }
    }

    /// Step size; a unit step by default
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(HarnessError::InvalidParameter(format!(
                "step size must be finite and positive, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

impl Default for StepModel {
    fn default() -> Self {
        Self::unit()
    }
}

/// How each trial is written to the diagnostic sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ReportFormat {
    /// One residual (`bound - actual`) per line
    #[default]
    Residual,

    /// `bound actual` per line
    BoundActual,
}

/// Configuration for a verification run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct HarnessConfig {
    /// Number of independent trials to run
    pub trials: usize,

    /// Seed for the scenario sampler; `None` seeds from the wall clock
    pub seed: Option<u64>,

    /// Step model shared by the oracle and the integrator
    pub step: StepModel,

    /// Line format of the trial stream
    pub report: ReportFormat,
}

impl HarnessConfig {
    /// Checks the configuration before any trial runs
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(HarnessError::InvalidParameter(
                "trial count must be at least 1".to_string(),
            ));
        }
        self.step.validate()
    }

    /// Returns the configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            step: StepModel::unit(),
            report: ReportFormat::Residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HarnessConfig::default();
        assert_eq!(config.trials, 100_000);
        assert_eq!(config.step.step(), 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_trials_and_bad_steps() {
        let config = HarnessConfig { trials: 0, ..HarnessConfig::default() };
        assert!(config.validate().is_err());

        assert!(StepModel::new(0.0).is_err());
        assert!(StepModel::new(-1.0).is_err());
        assert!(StepModel::new(f64::NAN).is_err());
        assert_eq!(StepModel::new(0.01).unwrap().step(), 0.01);
    }

    #[test]
    fn explicit_seed_is_kept() {
        let config = HarnessConfig { seed: Some(7), ..HarnessConfig::default() };
        assert_eq!(config.resolve_seed(), 7);
    }
}
