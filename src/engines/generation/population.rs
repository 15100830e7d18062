use crate::engines::generation::individual::Individual;
use crate::types::IndividualId;
use std::cmp::Ordering;

/// Ordered set of individuals for one generation
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

/// Descending by fitness; `sort_by` is stable so ties keep insertion order
pub fn by_fitness_desc(a: &Individual, b: &Individual) -> Ordering {
    b.fitness.total_cmp(&a.fitness)
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn as_mut_slice(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn get(&self, id: IndividualId) -> Option<&Individual> {
        self.individuals.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: IndividualId) -> Option<&mut Individual> {
        self.individuals.iter_mut().find(|i| i.id == id)
    }

    /// Sort best-first in place
    pub fn rank(&mut self) {
        self.individuals.sort_by(by_fitness_desc);
    }

    /// Best-first view without reordering the population
    pub fn ranked(&self) -> Vec<&Individual> {
        let mut ranked: Vec<&Individual> = self.individuals.iter().collect();
        ranked.sort_by(|a, b| by_fitness_desc(a, b));
        ranked
    }

    /// Leading `count` individuals; call after `rank`
    pub fn elites(&self, count: usize) -> &[Individual] {
        &self.individuals[..count.min(self.individuals.len())]
    }

    pub fn replace(&mut self, next: Vec<Individual>) {
        self.individuals = next;
    }

    pub fn average_fitness(&self) -> f64 {
        self.mean_of(|i| i.fitness)
    }

    pub fn best_fitness(&self) -> f64 {
        self.individuals
            .iter()
            .map(|i| i.fitness)
            .fold(0.0, f64::max)
    }

    pub fn average_cognitive_score(&self) -> f64 {
        self.mean_of(Individual::cognitive_score)
    }

    fn mean_of<F: Fn(&Individual) -> f64>(&self, f: F) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.individuals.iter().map(f).sum::<f64>() / self.individuals.len() as f64
    }
}
