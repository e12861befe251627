mod chain;
mod simulation;

pub use self::chain::{ChainLink, SerialChain, SerialChainBuilder};
pub use self::simulation::ChainSimulation;
