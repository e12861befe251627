use crate::core::{PostStepObserver, SimulationHost};
use crate::diagnostics::DiagnosticSink;
use crate::Result;

/// File name of the kinetic-energy log
pub const KINETIC_ENERGY_LOG: &str = "rke.dat";

/// File name of the generalized-coordinate log
pub const POSE_LOG: &str = "telemetry.box";

/// File name of the contact-topology change log
pub const MANIFOLD_CHANGE_LOG: &str = "manifold.change";

/// Post-step logger for kinetic energy and generalized coordinates.
///
/// Writes `time energy` to the energy sink and `time q0 q1 ...` to the pose
/// sink after every step.
pub struct StepTelemetry<E: DiagnosticSink, P: DiagnosticSink> {
    energy: E,
    pose: P,
}

impl<E: DiagnosticSink, P: DiagnosticSink> StepTelemetry<E, P> {
    pub fn new(energy: E, pose: P) -> Self {
        Self { energy, pose }
    }

    pub fn energy_sink(&self) -> &E {
        &self.energy
    }

    pub fn pose_sink(&self) -> &P {
        &self.pose
    }

    pub fn flush(&mut self) -> Result<()> {
        self.energy.flush()?;
        self.pose.flush()
    }
}

impl<E: DiagnosticSink, P: DiagnosticSink> PostStepObserver for StepTelemetry<E, P> {
    fn post_step(&mut self, host: &dyn SimulationHost) -> Result<()> {
        let time = host.current_time();
        self.energy.write_line(&format!("{} {}", time, host.kinetic_energy()))?;

        let mut line = time.to_string();
        for q in host.generalized_coordinates().iter() {
            line.push(' ');
            line.push_str(&q.to_string());
        }
        self.pose.write_line(&line)
    }
}
