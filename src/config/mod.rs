pub mod engine;
pub mod manager;
pub mod runner;
pub mod traits;

pub use engine::EngineConfig;
pub use manager::{AppConfig, ConfigManager};
pub use runner::RunnerConfig;
