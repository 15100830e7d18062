use crate::engines::generation::codec::{decode, TraitSet};
use crate::engines::generation::genome::{random_genome, Genome};
use crate::types::{IndividualId, UnitInterval};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Observed performance of an individual, updated by interaction feedback
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub engagement: UnitInterval,
    pub appeal: UnitInterval,
    pub effectiveness: UnitInterval,
    pub adaptation_success: UnitInterval,
    pub resonance: UnitInterval,
    pub coherence: UnitInterval,
}

impl PerformanceMetrics {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            engagement: UnitInterval::new(rng.gen()),
            appeal: UnitInterval::new(rng.gen()),
            effectiveness: UnitInterval::new(rng.gen()),
            adaptation_success: UnitInterval::new(rng.gen()),
            resonance: UnitInterval::new(rng.gen()),
            coherence: UnitInterval::new(rng.gen()),
        }
    }

    pub fn values(&self) -> [f64; 6] {
        [
            self.engagement.get(),
            self.appeal.get(),
            self.effectiveness.get(),
            self.adaptation_success.get(),
            self.resonance.get(),
            self.coherence.get(),
        ]
    }
}

/// Meta-traits governing how an individual changes itself
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdaptiveState {
    /// Scales mutation strength; above 0.5 forces mutation of offspring
    pub self_modification: UnitInterval,
    /// Scales the secondary gene perturbation
    pub creativity: UnitInterval,
    pub awareness: UnitInterval,
    pub learning_rate: UnitInterval,
    pub memory_retention: UnitInterval,
    pub introspection: UnitInterval,
}

impl AdaptiveState {
    pub const LEN: usize = 6;

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            self_modification: UnitInterval::new(rng.gen()),
            creativity: UnitInterval::new(rng.gen()),
            awareness: UnitInterval::new(rng.gen()),
            learning_rate: UnitInterval::new(rng.gen()),
            memory_retention: UnitInterval::new(rng.gen()),
            introspection: UnitInterval::new(rng.gen()),
        }
    }

    pub fn values(&self) -> [f64; Self::LEN] {
        [
            self.self_modification.get(),
            self.creativity.get(),
            self.awareness.get(),
            self.learning_rate.get(),
            self.memory_retention.get(),
            self.introspection.get(),
        ]
    }

    /// Mean of all six scalars, the individual's cognitive score
    pub fn mean(&self) -> f64 {
        self.values().iter().sum::<f64>() / Self::LEN as f64
    }

    /// Scalar by position, in declaration order. Out-of-range indices wrap.
    pub fn scalar_mut(&mut self, index: usize) -> &mut UnitInterval {
        match index % Self::LEN {
            0 => &mut self.self_modification,
            1 => &mut self.creativity,
            2 => &mut self.awareness,
            3 => &mut self.learning_rate,
            4 => &mut self.memory_retention,
            _ => &mut self.introspection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub id: IndividualId,
    pub genome: Genome,
    pub fitness: f64,
    pub generation: u64,
    pub mutation_count: u64,
    /// Empty for random and cloned lineages, exactly two ids for crossover
    pub parent_ids: Vec<IndividualId>,
    pub traits: TraitSet,
    pub metrics: PerformanceMetrics,
    pub adaptive: AdaptiveState,
}

impl Individual {
    /// Build an individual around an existing genome. Fitness starts at zero.
    pub fn from_parts(
        id: IndividualId,
        genome: Genome,
        generation: u64,
        metrics: PerformanceMetrics,
        adaptive: AdaptiveState,
    ) -> Self {
        let traits = decode(&genome);
        Self {
            id,
            genome,
            fitness: 0.0,
            generation,
            mutation_count: 0,
            parent_ids: Vec::new(),
            traits,
            metrics,
            adaptive,
        }
    }

    pub fn random<R: Rng>(
        id: IndividualId,
        genome_length: usize,
        generation: u64,
        rng: &mut R,
    ) -> Self {
        let genome = random_genome(genome_length, rng);
        let metrics = PerformanceMetrics::random(rng);
        let adaptive = AdaptiveState::random(rng);
        Self::from_parts(id, genome, generation, metrics, adaptive)
    }

    /// Copy of this individual under a new id, born into `generation`.
    /// Lineage and accumulated mutations are carried over unchanged.
    pub fn clone_as(&self, id: IndividualId, generation: u64) -> Self {
        Self {
            id,
            generation,
            ..self.clone()
        }
    }

    /// Re-derive the trait set after the genome changed
    pub fn refresh_traits(&mut self) {
        self.traits = decode(&self.genome);
    }

    pub fn cognitive_score(&self) -> f64 {
        self.adaptive.mean()
    }
}
