use crate::engines::generation::individual::{AdaptiveState, Individual, PerformanceMetrics};
use crate::types::{clamp_unit, IndividualId, UnitInterval};
use rand::Rng;

/// Per-gene split: below this take parent 1, below `SECOND_PARENT_CUTOFF`
/// take parent 2, otherwise blend.
pub const FIRST_PARENT_CUTOFF: f64 = 0.4;
pub const SECOND_PARENT_CUTOFF: f64 = 0.8;
pub const BLEND_NOISE: f64 = 0.05;
pub const INHERITANCE_NOISE: f64 = 0.05;

pub const GENE_PERTURBATION: f64 = 0.1;
pub const ADAPTIVE_NUDGE: f64 = 0.1;

/// Tournament selection: index of the best of K random draws
///
/// `ranked` is the current generation. With `exclude` set, that index is
/// never drawn unless it is the only candidate.
pub fn tournament_selection<R: Rng>(
    ranked: &[Individual],
    tournament_size: usize,
    exclude: Option<usize>,
    rng: &mut R,
) -> usize {
    let mut best_idx = draw_index(ranked.len(), exclude, rng);
    let mut best_fitness = ranked[best_idx].fitness;

    for _ in 1..tournament_size {
        let idx = draw_index(ranked.len(), exclude, rng);
        if ranked[idx].fitness > best_fitness {
            best_idx = idx;
            best_fitness = ranked[idx].fitness;
        }
    }

    best_idx
}

fn draw_index<R: Rng>(len: usize, exclude: Option<usize>, rng: &mut R) -> usize {
    match exclude {
        Some(skip) if len > 1 && skip < len => {
            let idx = rng.gen_range(0..len - 1);
            if idx >= skip {
                idx + 1
            } else {
                idx
            }
        }
        _ => rng.gen_range(0..len),
    }
}

fn mean(a: UnitInterval, b: UnitInterval) -> UnitInterval {
    UnitInterval::new((a.get() + b.get()) / 2.0)
}

fn max(a: UnitInterval, b: UnitInterval) -> UnitInterval {
    if a >= b {
        a
    } else {
        b
    }
}

fn max_with_noise<R: Rng>(a: UnitInterval, b: UnitInterval, rng: &mut R) -> UnitInterval {
    UnitInterval::new(max(a, b).get() + rng.gen_range(-INHERITANCE_NOISE..=INHERITANCE_NOISE))
}

/// Per-gene crossover producing a single child
///
/// Each gene comes from parent 1 (40%), parent 2 (40%) or the parents' mean
/// plus `±BLEND_NOISE` (20%). Metrics and adaptive scalars are inherited per
/// field by mean, max, or max plus noise.
pub fn crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    id: IndividualId,
    generation: u64,
    rng: &mut R,
) -> Individual {
    let genome: Vec<f64> = parent1
        .genome
        .iter()
        .zip(&parent2.genome)
        .map(|(&a, &b)| {
            let r = rng.gen::<f64>();
            if r < FIRST_PARENT_CUTOFF {
                a
            } else if r < SECOND_PARENT_CUTOFF {
                b
            } else {
                clamp_unit((a + b) / 2.0 + rng.gen_range(-BLEND_NOISE..=BLEND_NOISE))
            }
        })
        .collect();

    let (m1, m2) = (&parent1.metrics, &parent2.metrics);
    let metrics = PerformanceMetrics {
        engagement: mean(m1.engagement, m2.engagement),
        appeal: max(m1.appeal, m2.appeal),
        effectiveness: mean(m1.effectiveness, m2.effectiveness),
        adaptation_success: max_with_noise(m1.adaptation_success, m2.adaptation_success, rng),
        resonance: mean(m1.resonance, m2.resonance),
        coherence: mean(m1.coherence, m2.coherence),
    };

    let (a1, a2) = (&parent1.adaptive, &parent2.adaptive);
    let adaptive = AdaptiveState {
        self_modification: mean(a1.self_modification, a2.self_modification),
        creativity: max_with_noise(a1.creativity, a2.creativity, rng),
        awareness: max(a1.awareness, a2.awareness),
        learning_rate: mean(a1.learning_rate, a2.learning_rate),
        memory_retention: mean(a1.memory_retention, a2.memory_retention),
        introspection: max_with_noise(a1.introspection, a2.introspection, rng),
    };

    let mut child = Individual::from_parts(id, genome, generation, metrics, adaptive);
    child.parent_ids = vec![parent1.id, parent2.id];
    child
}

/// Adaptive mutation. Returns the number of genes perturbed.
///
/// Strength is `base_rate * (1 + self_modification)`; each gene is hit with
/// that probability. With probability `self_modification` one adaptive scalar
/// is nudged as well. Traits are re-decoded afterwards.
pub fn mutate<R: Rng>(individual: &mut Individual, base_rate: f64, rng: &mut R) -> u64 {
    let self_modification = individual.adaptive.self_modification.get();
    let creativity = individual.adaptive.creativity.get();
    let strength = base_rate * (1.0 + self_modification);

    let mut perturbed = 0u64;
    for gene in individual.genome.iter_mut() {
        if rng.gen::<f64>() < strength {
            let delta = rng.gen_range(-GENE_PERTURBATION..=GENE_PERTURBATION)
                + rng.gen_range(-GENE_PERTURBATION..=GENE_PERTURBATION) * creativity;
            *gene = clamp_unit(*gene + delta);
            perturbed += 1;
        }
    }

    if rng.gen::<f64>() < self_modification {
        let index = rng.gen_range(0..AdaptiveState::LEN);
        individual
            .adaptive
            .scalar_mut(index)
            .nudge(rng.gen_range(-ADAPTIVE_NUDGE..=ADAPTIVE_NUDGE));
    }

    individual.mutation_count += perturbed;
    individual.refresh_traits();
    perturbed
}
