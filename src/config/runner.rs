use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::EvoError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub tick_interval_ms: u64,
    /// Stop on its own after this many ticks
    pub max_generations: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            max_generations: None,
        }
    }
}

impl ConfigSection for RunnerConfig {
    fn section_name() -> &'static str {
        "runner"
    }

    fn validate(&self) -> Result<(), EvoError> {
        if self.tick_interval_ms == 0 {
            return Err(EvoError::Configuration(
                "Tick interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Runner".to_string(),
            fields: vec![
                FieldManifest::new(
                    "tick_interval_ms",
                    "integer",
                    json!(Self::default().tick_interval_ms),
                    (Some(1.0), None),
                    "Delay between generation ticks",
                ),
                FieldManifest::new(
                    "max_generations",
                    "integer",
                    serde_json::Value::Null,
                    (Some(0.0), None),
                    "Ticks to run before stopping; unset runs until stopped",
                ),
            ],
        }
    }
}
