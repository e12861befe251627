use crate::core::{HarnessConfig, MultibodyEngine, ReportFormat};
use crate::diagnostics::DiagnosticSink;
use crate::error::HarnessError;
use crate::verification::{DisplacementVerifier, ScenarioSampler, TrialRecord};
use crate::Result;
use rand::Rng;
use tracing::{info, warn};

/// Totals of a verification run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrialSummary {
    /// Trials asked for
    pub requested: usize,

    /// Trials that produced a residual
    pub reported: usize,

    /// Trials skipped because the sampled link had no geometry
    pub skipped: usize,

    /// Reported trials with a negative residual
    pub violations: usize,

    /// Smallest residual seen
    pub min_residual: Option<f64>,

    /// Largest measured displacement
    pub max_actual: Option<f64>,
}

impl TrialSummary {
    fn record(&mut self, record: &TrialRecord) {
        self.reported += 1;
        if record.is_violation() {
            self.violations += 1;
        }
        self.min_residual = Some(self.min_residual.map_or(record.residual, |m| m.min(record.residual)));
        self.max_actual = Some(self.max_actual.map_or(record.actual, |m| m.max(record.actual)));
    }

    /// Fails with `OracleContractMismatch` if any trial violated the bound
    pub fn check_sound(&self) -> Result<()> {
        if self.violations > 0 {
            return Err(HarnessError::OracleContractMismatch {
                violations: self.violations,
                trials: self.reported,
            });
        }
        Ok(())
    }
}

/// Runs a fixed number of independent trials and streams one line per
/// reported trial to the sink, in trial order.
pub struct TrialDriver<R: Rng, S: DiagnosticSink> {
    config: HarnessConfig,
    sampler: ScenarioSampler<R>,
    verifier: DisplacementVerifier,
    sink: S,
}

impl<R: Rng, S: DiagnosticSink> TrialDriver<R, S> {
    pub fn new(config: HarnessConfig, sampler: ScenarioSampler<R>, verifier: DisplacementVerifier, sink: S) -> Self {
        Self {
            config,
            sampler,
            verifier,
            sink,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs every configured trial against `engine`.
    ///
    /// A body with fewer than two links aborts before the first trial. Trials
    /// whose link has no geometry are skipped and counted; violations are
    /// reported like any other residual.
    pub fn run(&mut self, engine: &mut dyn MultibodyEngine) -> Result<TrialSummary> {
        let links = engine.link_count();
        if links < 2 {
            return Err(HarnessError::InvalidTopology { links });
        }

        info!(
            trials = self.config.trials,
            links,
            dof = engine.dof(),
            step = self.config.step.step(),
            oracle = self.verifier.oracle_name(),
            integrator = self.verifier.integrator_name(),
            "starting advancement bound trials"
        );

        let mut summary = TrialSummary {
            requested: self.config.trials,
            ..TrialSummary::default()
        };

        for trial in 0..self.config.trials {
            match self.verifier.run_trial(engine, &mut self.sampler) {
                Ok(record) => {
                    if record.is_violation() {
                        warn!(
                            trial,
                            link = record.link,
                            bound = record.bound,
                            actual = record.actual,
                            "advancement bound violated"
                        );
                    }
                    self.sink.write_line(&format_record(&record, self.config.report))?;
                    summary.record(&record);
                }
                Err(HarnessError::MissingGeometry { link }) => {
                    warn!(trial, link, "skipping trial, link has no collision geometry");
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        self.sink.flush()?;

        info!(
            reported = summary.reported,
            skipped = summary.skipped,
            violations = summary.violations,
            min_residual = summary.min_residual.unwrap_or(f64::NAN),
            "trials finished"
        );
        Ok(summary)
    }
}

fn format_record(record: &TrialRecord, format: ReportFormat) -> String {
    match format {
        ReportFormat::Residual => record.residual.to_string(),
        ReportFormat::BoundActual => format!("{} {}", record.bound, record.actual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tracks_extremes_and_violations() {
        let mut summary = TrialSummary::default();
        summary.record(&TrialRecord::new(1, 2.0, 1.0));
        summary.record(&TrialRecord::new(2, 0.5, 1.5));
        assert_eq!(summary.reported, 2);
        assert_eq!(summary.violations, 1);
        assert_eq!(summary.min_residual, Some(-1.0));
        assert_eq!(summary.max_actual, Some(1.5));
        assert!(matches!(
            summary.check_sound(),
            Err(HarnessError::OracleContractMismatch { violations: 1, trials: 2 })
        ));
    }

    #[test]
    fn record_formats() {
        let record = TrialRecord::new(1, 2.5, 1.0);
        assert_eq!(format_record(&record, ReportFormat::Residual), "1.5");
        assert_eq!(format_record(&record, ReportFormat::BoundActual), "2.5 1");
    }
}
