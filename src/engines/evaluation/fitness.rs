use crate::engines::evaluation::diversity::gene_entropy;
use crate::engines::generation::environment::Environment;
use crate::engines::generation::individual::Individual;
use crate::types::clamp_unit;
use serde::{Deserialize, Serialize};

/// Weights of the fitness terms. Tunable; defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    pub aesthetic: f64,
    pub functional: f64,
    pub cognitive: f64,
    pub coherence: f64,
    pub diversity: f64,
    pub environment: f64,
    pub cognitive_bonus: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            aesthetic: 0.25,
            functional: 0.25,
            cognitive: 0.15,
            coherence: 0.10,
            diversity: 0.10,
            environment: 0.10,
            cognitive_bonus: 0.05,
        }
    }
}

impl FitnessWeights {
    pub fn as_array(&self) -> [(&'static str, f64); 7] {
        [
            ("aesthetic", self.aesthetic),
            ("functional", self.functional),
            ("cognitive", self.cognitive),
            ("coherence", self.coherence),
            ("diversity", self.diversity),
            ("environment", self.environment),
            ("cognitive_bonus", self.cognitive_bonus),
        ]
    }
}

/// Individual sub-scores feeding the weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitnessBreakdown {
    pub aesthetic: f64,
    pub functional: f64,
    pub cognitive: f64,
    pub coherence: f64,
    pub diversity: f64,
    pub environment: f64,
    /// cognitive * 2, may exceed 1 before weighting
    pub cognitive_bonus: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FitnessEvaluator {
    weights: FitnessWeights,
}

impl FitnessEvaluator {
    pub fn new(weights: FitnessWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Weighted fitness in `[0, 1]`. Pure: depends only on the individual
    /// and the active environment.
    pub fn evaluate(&self, individual: &Individual, environment: &Environment) -> f64 {
        self.breakdown(individual, environment).total
    }

    pub fn breakdown(&self, individual: &Individual, environment: &Environment) -> FitnessBreakdown {
        let metrics = &individual.metrics;
        let w = &self.weights;

        let aesthetic = (metrics.appeal.get() + metrics.engagement.get()) / 2.0;
        let functional = (metrics.effectiveness.get() + metrics.adaptation_success.get()) / 2.0;
        let cognitive = individual.adaptive.mean();
        let coherence = metrics.coherence.get();
        let diversity = gene_entropy(&individual.genome);
        let environment_score = environment.adaptation_score(&individual.traits);
        let cognitive_bonus = cognitive * 2.0;

        let weighted = aesthetic * w.aesthetic
            + functional * w.functional
            + cognitive * w.cognitive
            + coherence * w.coherence
            + diversity * w.diversity
            + environment_score * w.environment
            + cognitive_bonus * w.cognitive_bonus;

        FitnessBreakdown {
            aesthetic,
            functional,
            cognitive,
            coherence,
            diversity,
            environment: environment_score,
            cognitive_bonus,
            total: clamp_unit(weighted),
        }
    }
}
