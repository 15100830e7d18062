use super::{engine::EngineConfig, runner::RunnerConfig, traits::ConfigSection};
use crate::error::EvoError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `TRAITEVO_ENGINE__POPULATION_SIZE`
pub const ENV_PREFIX: &str = "TRAITEVO";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub runner: RunnerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), EvoError> {
        self.engine.validate()?;
        self.runner.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Layered load: defaults, then the optional TOML file, then
    /// `TRAITEVO_*` environment variables.
    pub fn load(&self, path: Option<&Path>) -> Result<(), EvoError> {
        let environment = ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.load_with(path, environment)
    }

    /// Load a TOML file without consulting the process environment
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvoError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(true))
            .build()?;
        self.install(settings.try_deserialize()?)
    }

    fn load_with(
        &self,
        path: Option<&Path>,
        environment: ::config::Environment,
    ) -> Result<(), EvoError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        let settings = builder.add_source(environment).build()?;
        self.install(settings.try_deserialize()?)
    }

    fn install(&self, config: AppConfig) -> Result<(), EvoError> {
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvoError> {
        let toml_str = toml::to_string_pretty(&self.get())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), EvoError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
