mod sampler;
mod verifier;
mod driver;
mod builder;

pub use self::sampler::{Scenario, ScenarioSampler, JOINT_SPEED_LIMIT};
pub use self::verifier::{DisplacementVerifier, TrialRecord};
pub use self::driver::{TrialDriver, TrialSummary};
pub use self::builder::HarnessBuilder;
