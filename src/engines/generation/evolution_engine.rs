use crate::config::traits::ConfigSection;
use crate::config::EngineConfig;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::feedback::{apply_interaction, InteractionEvent};
use crate::engines::generation::{
    codec::TraitSet,
    environment::{Environment, Pressure},
    hall_of_fame::HallOfFame,
    individual::Individual,
    operators::{crossover, mutate, tournament_selection},
    population::Population,
};
use crate::error::{EvoError, Result};
use crate::types::IndividualId;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

/// Offspring whose self-modification exceeds this always mutate
pub const SELF_MODIFICATION_THRESHOLD: f64 = 0.5;

/// One row of a fitness ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub id: IndividualId,
    pub fitness: f64,
    pub traits: TraitSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub generation: u64,
    pub population_size: usize,
    pub average_fitness: f64,
    pub best_fitness: f64,
    pub average_cognitive_score: f64,
    pub active_pressures: Vec<Pressure>,
    /// Gene perturbations over the engine's lifetime
    pub total_mutations: u64,
}

/// Population-based evolutionary optimizer.
///
/// Each [`tick`](Engine::tick) runs one full generation step
/// (evaluate, rank, keep elites, reproduce, replace, adapt environment).
/// All randomness comes from the injected generator `R`, so two engines with
/// the same config and seed driven by the same calls stay bit-identical.
pub struct Engine<R: Rng = StdRng> {
    config: EngineConfig,
    evaluator: FitnessEvaluator,
    population: Population,
    environment: Environment,
    hall_of_fame: HallOfFame,
    generation: u64,
    next_id: u64,
    total_mutations: u64,
    rng: R,
}

impl Engine<StdRng> {
    /// Build an engine seeded from `config.seed`, or from entropy when unset
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let mut engine = Self {
            evaluator: FitnessEvaluator::new(config.fitness),
            population: Population::default(),
            environment: Environment::new(),
            hall_of_fame: HallOfFame::new(config.hall_of_fame_size),
            generation: 0,
            next_id: 0,
            total_mutations: 0,
            rng,
            config,
        };
        engine.initialize_population();
        Ok(engine)
    }

    fn initialize_population(&mut self) {
        let mut individuals = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let id = self.issue_id();
            let mut individual = Individual::random(
                id,
                self.config.genome_length,
                self.generation,
                &mut self.rng,
            );
            individual.fitness = self.evaluator.evaluate(&individual, &self.environment);
            individuals.push(individual);
        }
        self.population = Population::new(individuals);
    }

    fn issue_id(&mut self) -> IndividualId {
        let id = IndividualId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Advance exactly one generation
    pub fn tick(&mut self) {
        let population_size = self.config.population_size;
        let next_generation = self.generation + 1;

        // Evaluate
        self.evaluate_population();

        // Rank
        self.population.rank();
        self.hall_of_fame.record(self.population.iter());

        // Select elite
        let elite_count = self.config.elite_count();
        let mut next: Vec<Individual> = self.population.elites(elite_count).to_vec();

        // Reproduce
        while next.len() < population_size {
            let child = self.breed(next_generation);
            next.push(child);
        }
        next.truncate(population_size);

        // Replace
        self.population.replace(next);
        self.generation = next_generation;

        // Adapt environment
        if self.generation % self.config.environment_interval == 0 {
            self.environment.resample(&mut self.rng);
            // Rescore under the new pressures so stored fitness matches the next Evaluate
            self.evaluate_population();
            info!(
                "Generation {}: environment pressures now {:?}",
                self.generation,
                self.environment.active()
            );
        }

        debug!(
            "Generation {} complete. Best fitness: {:.4}, average: {:.4}",
            self.generation,
            self.population.best_fitness(),
            self.population.average_fitness()
        );
    }

    fn evaluate_population(&mut self) {
        let evaluator = &self.evaluator;
        let environment = &self.environment;
        self.population
            .as_mut_slice()
            .par_iter_mut()
            .for_each(|individual| {
                individual.fitness = evaluator.evaluate(individual, environment);
            });
    }

    /// Produce one offspring from the ranked current population
    fn breed(&mut self, generation: u64) -> Individual {
        let id = self.issue_id();
        let ranked = self.population.as_slice();
        let tournament_size = self.config.tournament_size;

        let first = tournament_selection(ranked, tournament_size, None, &mut self.rng);
        let second = tournament_selection(ranked, tournament_size, Some(first), &mut self.rng);

        let mut child = if self.rng.gen::<f64>() < self.config.crossover_rate {
            crossover(&ranked[first], &ranked[second], id, generation, &mut self.rng)
        } else {
            ranked[first].clone_as(id, generation)
        };

        let forced = child.adaptive.self_modification.get() > SELF_MODIFICATION_THRESHOLD;
        if self.rng.gen::<f64>() < self.config.mutation_rate || forced {
            self.total_mutations += mutate(&mut child, self.config.mutation_rate, &mut self.rng);
        }

        // Provisional fitness; recomputed at the next Evaluate phase
        child.fitness = self.evaluator.evaluate(&child, &self.environment);
        child
    }

    /// Best `k` individuals, descending by fitness; `k` is clamped to the population size
    pub fn top_k(&self, k: usize) -> Vec<RankedEntry> {
        self.population
            .ranked()
            .into_iter()
            .take(k)
            .map(|individual| RankedEntry {
                id: individual.id,
                fitness: individual.fitness,
                traits: individual.traits,
            })
            .collect()
    }

    /// Record an external interaction against a live individual.
    ///
    /// Metrics change now; fitness picks the change up at the next tick.
    pub fn report_interaction(&mut self, id: IndividualId, event: InteractionEvent) -> Result<()> {
        let Some(individual) = self.population.get_mut(id) else {
            warn!("Interaction {} for unknown individual {}", event.kind(), id);
            return Err(EvoError::UnknownIndividual(id));
        };

        apply_interaction(&event, &mut individual.metrics, &mut individual.adaptive);
        debug!("Applied {} interaction to {}", event.kind(), id);
        Ok(())
    }

    pub fn stats(&self) -> Stats {
        Stats {
            generation: self.generation,
            population_size: self.population.len(),
            average_fitness: self.population.average_fitness(),
            best_fitness: self.population.best_fitness(),
            average_cognitive_score: self.population.average_cognitive_score(),
            active_pressures: self.environment.active().to_vec(),
            total_mutations: self.total_mutations,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        self.population.as_slice()
    }

    pub fn individual(&self, id: IndividualId) -> Option<&Individual> {
        self.population.get(id)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
