mod persistence;
mod simulation;

pub use persistence::{clear_inputs, load_inputs, save_inputs, PersistedInputs};
pub use simulation::{use_simulation, SimulationHandle};
