pub mod contact_pair;
pub mod continuous;
pub mod topology;

pub use self::contact_pair::ContactPair;
pub use self::continuous::{AdvancementBound, ChainAdvancementBound, ZeroBound};
pub use self::topology::{ContactTopologyMonitor, TopologyChange, TopologySnapshot};
