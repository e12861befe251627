use crate::collision::AdvancementBound;
use crate::core::HarnessConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::HarnessError;
use crate::integration::{GeneralizedEuler, Integrator};
use crate::verification::{DisplacementVerifier, ScenarioSampler, TrialDriver};
use crate::Result;
use rand::rngs::StdRng;

/// Assembles a `TrialDriver` from its collaborators.
///
/// The oracle and the sink are required. Without an explicit integrator the
/// driver uses `GeneralizedEuler`. `build` validates everything up front.
pub struct HarnessBuilder<S: DiagnosticSink> {
    config: HarnessConfig,
    oracle: Option<Box<dyn AdvancementBound>>,
    integrator: Option<Box<dyn Integrator>>,
    sink: Option<S>,
}

impl<S: DiagnosticSink> HarnessBuilder<S> {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            oracle: None,
            integrator: None,
            sink: None,
        }
    }

    pub fn oracle<O: AdvancementBound + 'static>(mut self, oracle: O) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    pub fn integrator<I: Integrator + 'static>(mut self, integrator: I) -> Self {
        self.integrator = Some(Box::new(integrator));
        self
    }

    pub fn sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<TrialDriver<StdRng, S>> {
        self.config.validate()?;
        let oracle = self.oracle.ok_or(HarnessError::MissingCollaborator("advancement bound oracle"))?;
        let sink = self.sink.ok_or(HarnessError::MissingCollaborator("diagnostic sink"))?;
        let integrator: Box<dyn Integrator> = match self.integrator {
            Some(integrator) => integrator,
            None => Box::new(GeneralizedEuler::new()),
        };

        let sampler = ScenarioSampler::seeded(self.config.resolve_seed());
        let verifier = DisplacementVerifier::new(oracle, integrator, self.config.step);
        Ok(TrialDriver::new(self.config, sampler, verifier, sink))
    }
}
