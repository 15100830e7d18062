pub mod codec;
pub mod environment;
pub mod evolution_engine;
pub mod gene_consumer;
pub mod genome;
pub mod hall_of_fame;
pub mod individual;
pub mod operators;
pub mod population;
pub mod progress;

pub use codec::{decode, TraitSet};
pub use environment::{Environment, Pressure};
pub use evolution_engine::{Engine, RankedEntry, Stats};
pub use genome::Genome;
pub use hall_of_fame::{HallEntry, HallOfFame};
pub use individual::{AdaptiveState, Individual, PerformanceMetrics};
pub use population::Population;
pub use progress::{ChannelObserver, GenerationObserver, LogObserver};
