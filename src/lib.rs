//! # traitevo
//!
//! A small population-based evolutionary optimizer. Candidates are fixed-length
//! genomes of reals in `[0, 1]`, decoded into a structured [`TraitSet`], scored
//! by a weighted multi-criteria fitness and evolved by tournament selection,
//! per-gene crossover and adaptive mutation.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use traitevo::{Engine, EngineConfig};
//!
//! let config = EngineConfig { population_size: 20, genome_length: 32, ..Default::default() };
//! let mut engine = Engine::new(config, StdRng::seed_from_u64(42)).unwrap();
//! for _ in 0..5 {
//!     engine.tick();
//! }
//! assert_eq!(engine.stats().generation, 5);
//! assert_eq!(engine.top_k(3).len(), 3);
//! ```
//!
//! The engine owns no timer. Callers drive [`Engine::tick`] themselves, or
//! wrap it in a [`SharedEngine`] and hand it to an [`EvolutionRunner`].

pub mod config;
pub mod engines;
pub mod error;
pub mod services;
pub mod types;

pub use config::{AppConfig, ConfigManager, EngineConfig, RunnerConfig};
pub use engines::feedback::InteractionEvent;
pub use engines::generation::{Engine, RankedEntry, Stats, TraitSet};
pub use error::{EvoError, Result};
pub use services::{EvolutionRunner, SharedEngine, Snapshot};
pub use types::{IndividualId, UnitInterval};
