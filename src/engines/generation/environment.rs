use crate::engines::generation::codec::TraitSet;
use crate::types::clamp_unit;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that each catalog pressure is active after a resample
pub const INCLUSION_PROBABILITY: f64 = 0.3;
pub const MAX_ACTIVE_PRESSURES: usize = 3;

pub const ADAPTATION_BASELINE: f64 = 0.5;
pub const ADAPTATION_REWARD: f64 = 0.1;
pub const ADAPTATION_PENALTY: f64 = 0.05;

/// Environmental pressure biasing fitness toward certain trait values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pressure {
    Minimalism,
    Vibrancy,
    Responsiveness,
    Calmness,
    Accessibility,
}

impl Pressure {
    pub const CATALOG: [Pressure; 5] = [
        Pressure::Minimalism,
        Pressure::Vibrancy,
        Pressure::Responsiveness,
        Pressure::Calmness,
        Pressure::Accessibility,
    ];

    /// Whether `traits` meet this pressure's threshold
    pub fn is_satisfied_by(&self, traits: &TraitSet) -> bool {
        match self {
            Pressure::Minimalism => traits.geometry.complexity < 0.4,
            Pressure::Vibrancy => traits.chromatics.saturation > 0.7,
            Pressure::Responsiveness => traits.temporal.duration_ms < 600.0,
            Pressure::Calmness => traits.temporal.duration_ms > 1000.0,
            Pressure::Accessibility => traits.sensitivity.hover > 0.5,
        }
    }
}

/// Active pressure set, kept in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    active: Vec<Pressure>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment with a fixed pressure set; extra entries past the cap are dropped.
    pub fn with_pressures(mut pressures: Vec<Pressure>) -> Self {
        pressures.dedup();
        pressures.truncate(MAX_ACTIVE_PRESSURES);
        Self { active: pressures }
    }

    pub fn active(&self) -> &[Pressure] {
        &self.active
    }

    /// Draw a new active set: each catalog entry independently with
    /// `INCLUSION_PROBABILITY`, then keep at most `MAX_ACTIVE_PRESSURES`.
    pub fn resample<R: Rng>(&mut self, rng: &mut R) {
        let mut active: Vec<Pressure> = Pressure::CATALOG
            .iter()
            .copied()
            .filter(|_| rng.gen::<f64>() < INCLUSION_PROBABILITY)
            .collect();
        active.truncate(MAX_ACTIVE_PRESSURES);
        self.active = active;
    }

    /// Baseline 0.5, +0.1 for every satisfied pressure, -0.05 for every missed one
    pub fn adaptation_score(&self, traits: &TraitSet) -> f64 {
        let score = self.active.iter().fold(ADAPTATION_BASELINE, |score, pressure| {
            if pressure.is_satisfied_by(traits) {
                score + ADAPTATION_REWARD
            } else {
                score - ADAPTATION_PENALTY
            }
        });
        clamp_unit(score)
    }
}
