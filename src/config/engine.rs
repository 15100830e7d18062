use super::traits::{check_rate, ConfigManifest, ConfigSection, FieldManifest};
use crate::engines::evaluation::FitnessWeights;
use crate::error::EvoError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub population_size: usize,
    pub genome_length: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    /// Fraction of the population carried over unchanged, in `[0, 1)`
    pub elitism_rate: f64,
    pub tournament_size: usize,
    /// Generations between environment resamples
    pub environment_interval: u64,
    pub hall_of_fame_size: usize,
    pub seed: Option<u64>,
    pub fitness: FitnessWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            genome_length: 128,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            elitism_rate: 0.1,
            tournament_size: 5,
            environment_interval: 10,
            hall_of_fame_size: 10,
            seed: None,
            fitness: FitnessWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Number of individuals carried over each generation
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elitism_rate).floor() as usize
    }
}

impl ConfigSection for EngineConfig {
    fn section_name() -> &'static str {
        "engine"
    }

    fn validate(&self) -> Result<(), EvoError> {
        if self.population_size == 0 {
            return Err(EvoError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.genome_length == 0 {
            return Err(EvoError::Configuration(
                "Genome length must be positive".to_string(),
            ));
        }
        check_rate("Mutation rate", self.mutation_rate, false)?;
        check_rate("Crossover rate", self.crossover_rate, false)?;
        check_rate("Elitism rate", self.elitism_rate, true)?;
        if self.tournament_size == 0 {
            return Err(EvoError::Configuration(
                "Tournament size must be positive".to_string(),
            ));
        }
        if self.environment_interval == 0 {
            return Err(EvoError::Configuration(
                "Environment interval must be positive".to_string(),
            ));
        }
        for (name, weight) in self.fitness.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EvoError::Configuration(format!(
                    "Fitness weight '{}' must be finite and non-negative, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Engine".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    json!(defaults.population_size),
                    (Some(1.0), None),
                    "Number of individuals per generation",
                ),
                FieldManifest::new(
                    "genome_length",
                    "integer",
                    json!(defaults.genome_length),
                    (Some(1.0), None),
                    "Genes per genome",
                ),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    json!(defaults.mutation_rate),
                    (Some(0.0), Some(1.0)),
                    "Base mutation probability",
                ),
                FieldManifest::new(
                    "crossover_rate",
                    "float",
                    json!(defaults.crossover_rate),
                    (Some(0.0), Some(1.0)),
                    "Probability an offspring is produced by crossover instead of cloning",
                ),
                FieldManifest::new(
                    "elitism_rate",
                    "float",
                    json!(defaults.elitism_rate),
                    (Some(0.0), Some(1.0)),
                    "Fraction of top individuals kept unchanged (exclusive of 1)",
                ),
                FieldManifest::new(
                    "tournament_size",
                    "integer",
                    json!(defaults.tournament_size),
                    (Some(1.0), None),
                    "Draws per tournament",
                ),
                FieldManifest::new(
                    "environment_interval",
                    "integer",
                    json!(defaults.environment_interval),
                    (Some(1.0), None),
                    "Generations between environment pressure resamples",
                ),
                FieldManifest::new(
                    "hall_of_fame_size",
                    "integer",
                    json!(defaults.hall_of_fame_size),
                    (Some(0.0), None),
                    "Best-ever individuals to archive",
                ),
                FieldManifest::new(
                    "seed",
                    "integer",
                    serde_json::Value::Null,
                    (Some(0.0), None),
                    "Random seed; unset draws from entropy",
                ),
            ],
        }
    }
}
