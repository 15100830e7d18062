use crate::engines::generation::codec::TraitSet;
use crate::engines::generation::genome::Genome;
use crate::engines::generation::individual::Individual;
use crate::types::IndividualId;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HallEntry {
    pub id: IndividualId,
    pub generation: u64,
    pub fitness: f64,
    pub genome: Genome,
    pub traits: TraitSet,
}

/// Bounded archive of the best individuals seen across generations
pub struct HallOfFame {
    entries: Vec<HallEntry>,
    max_size: usize,
    seen_ids: HashSet<IndividualId>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
            seen_ids: HashSet::new(),
        }
    }

    /// Attempt to add an individual; rejected if its id is already archived
    /// or it does not beat the current worst entry of a full archive.
    pub fn try_add(&mut self, individual: &Individual) -> bool {
        if self.max_size == 0 || self.seen_ids.contains(&individual.id) {
            return false;
        }

        if self.entries.len() >= self.max_size {
            let worst = self.entries.last().map(|e| e.fitness).unwrap_or(0.0);
            if individual.fitness <= worst {
                return false;
            }
        }

        self.entries.push(HallEntry {
            id: individual.id,
            generation: individual.generation,
            fitness: individual.fitness,
            genome: individual.genome.clone(),
            traits: individual.traits,
        });
        self.seen_ids.insert(individual.id);

        self.sort_and_trim();
        true
    }

    /// Offer every individual of a generation
    pub fn record<'a, I>(&mut self, individuals: I) -> usize
    where
        I: IntoIterator<Item = &'a Individual>,
    {
        individuals
            .into_iter()
            .filter(|individual| self.try_add(individual))
            .count()
    }

    fn sort_and_trim(&mut self) {
        self.entries.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        while self.entries.len() > self.max_size {
            if let Some(removed) = self.entries.pop() {
                self.seen_ids.remove(&removed.id);
            }
        }
    }

    pub fn get_all(&self) -> &[HallEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(id: u64, fitness: f64, rng: &mut StdRng) -> Individual {
        let mut individual = Individual::random(IndividualId(id), 8, 0, rng);
        individual.fitness = fitness;
        individual
    }

    #[test]
    fn test_keeps_best_and_bounds_size() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut hof = HallOfFame::new(3);
        for (id, fitness) in [(1, 0.2), (2, 0.9), (3, 0.5), (4, 0.7), (5, 0.1)] {
            hof.try_add(&scored(id, fitness, &mut rng));
        }

        let ids: Vec<u64> = hof.get_all().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 4, 3]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut hof = HallOfFame::new(5);
        let individual = scored(1, 0.4, &mut rng);

        assert!(hof.try_add(&individual));
        assert!(!hof.try_add(&individual));
        assert_eq!(hof.len(), 1);
    }
}
