mod sink;
mod telemetry;

pub use self::sink::{DiagnosticSink, LineSink, MemorySink};
pub use self::telemetry::{StepTelemetry, KINETIC_ENERGY_LOG, MANIFOLD_CHANGE_LOG, POSE_LOG};
