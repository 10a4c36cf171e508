pub mod kinetics;
pub mod scavenger;
pub mod simulation;
pub mod transmission;

pub use kinetics::RateConstants;
pub use scavenger::{apply_scavenger, Scavenger, ScavengerOutcome};
pub use simulation::{simulate, HeadspaceState, PackageModel, SimulationResult};
pub use transmission::PerforationTransmission;

// Re-export core types for convenience
pub use ethylene_core::*;
