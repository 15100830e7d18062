pub mod evolution_runner;
pub mod shared_engine;

pub use evolution_runner::EvolutionRunner;
pub use shared_engine::{SharedEngine, Snapshot};
