use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use traitevo::engines::generation::Individual;
use traitevo::{Engine, EngineConfig, IndividualId, InteractionEvent};

fn test_config(
    population_size: usize,
    genome_length: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    elitism_rate: f64,
) -> EngineConfig {
    EngineConfig {
        population_size,
        genome_length,
        mutation_rate,
        crossover_rate,
        elitism_rate,
        ..EngineConfig::default()
    }
}

fn engine(config: EngineConfig, seed: u64) -> Engine {
    Engine::new(config, StdRng::seed_from_u64(seed)).expect("valid config")
}

fn assert_bounded(individual: &Individual, genome_length: usize) {
    assert!(
        (0.0..=1.0).contains(&individual.fitness),
        "fitness out of range: {}",
        individual.fitness
    );
    assert_eq!(individual.genome.len(), genome_length);
    assert!(individual.genome.iter().all(|g| (0.0..=1.0).contains(g)));
    assert!(individual.metrics.values().iter().all(|v| (0.0..=1.0).contains(v)));
    assert!(individual.adaptive.values().iter().all(|v| (0.0..=1.0).contains(v)));
    assert!(individual.parent_ids.is_empty() || individual.parent_ids.len() == 2);
}

#[test]
fn test_invariants_hold_across_generations() {
    let config = test_config(30, 64, 0.3, 0.7, 0.1);
    let mut engine = engine(config, 42);

    for generation in 1..=25 {
        assert_eq!(engine.population().len(), 30);
        engine.tick();
        assert_eq!(engine.population().len(), 30);
        assert_eq!(engine.generation(), generation);

        for individual in engine.population() {
            assert_bounded(individual, 64);
        }

        let stats = engine.stats();
        assert!(stats.average_fitness.is_finite());
        assert!(stats.best_fitness >= stats.average_fitness);
        assert!((0.0..=1.0).contains(&stats.average_cognitive_score));
    }
}

#[test]
fn test_ids_are_unique() {
    let mut engine = engine(test_config(20, 16, 0.2, 0.8, 0.2), 3);
    for _ in 0..10 {
        engine.tick();
        let ids: HashSet<IndividualId> = engine.population().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 20);
    }
}

#[test]
fn test_elites_survive_unchanged() {
    let mut engine = engine(test_config(10, 32, 0.5, 0.7, 0.2), 1234);

    let elites: Vec<Individual> = engine
        .top_k(2)
        .iter()
        .map(|entry| engine.individual(entry.id).cloned().expect("ranked id is live"))
        .collect();

    engine.tick();

    for elite in &elites {
        let survivor = engine
            .individual(elite.id)
            .expect("elite carried into next generation");
        assert_eq!(survivor.genome, elite.genome);
        assert_eq!(survivor.fitness.to_bits(), elite.fitness.to_bits());
    }
}

#[test]
fn test_top_k_is_sorted_and_clamped() {
    let mut engine = engine(test_config(12, 24, 0.2, 0.7, 0.1), 9);
    engine.tick();

    let top = engine.top_k(100);
    assert_eq!(top.len(), 12);
    assert!(top.windows(2).all(|w| w[0].fitness >= w[1].fitness));
    assert_eq!(engine.top_k(0).len(), 0);
    assert_eq!(top[0].fitness, engine.stats().best_fitness);
}

#[test]
fn test_crossover_offspring_differ_from_parents() {
    // mutation off, crossover always, no elites
    let mut engine = engine(test_config(10, 8, 0.0, 1.0, 0.0), 2024);
    let before: Vec<Individual> = engine.population().to_vec();

    engine.tick();

    for child in engine.population() {
        assert_eq!(child.parent_ids.len(), 2);
        let parent = |id: IndividualId| {
            before
                .iter()
                .find(|i| i.id == id)
                .expect("parent from previous generation")
        };
        let p1 = parent(child.parent_ids[0]);
        let p2 = parent(child.parent_ids[1]);

        assert_ne!(child.genome, p1.genome);
        assert_ne!(child.genome, p2.genome);
    }
}

#[test]
fn test_clones_keep_parent_traits_with_new_id() {
    // crossover and mutation off: every offspring is a clone
    let mut engine = engine(test_config(10, 16, 0.0, 0.0, 0.0), 77);
    let before: Vec<Individual> = engine.population().to_vec();
    let before_ids: HashSet<IndividualId> = before.iter().map(|i| i.id).collect();

    engine.tick();

    for child in engine.population() {
        assert!(!before_ids.contains(&child.id));
        assert!(child.parent_ids.is_empty());
        let source = before
            .iter()
            .find(|i| i.genome == child.genome)
            .expect("clone of a previous individual");
        assert_eq!(source.traits, child.traits);
    }
}

#[test]
fn test_full_mutation_rate_mutates_every_offspring() {
    let mut engine = engine(test_config(20, 16, 1.0, 0.5, 0.2), 55);
    let elite_ids: HashSet<IndividualId> = engine.top_k(4).iter().map(|e| e.id).collect();

    engine.tick();

    let mut offspring = 0;
    for individual in engine.population() {
        if elite_ids.contains(&individual.id) {
            continue;
        }
        offspring += 1;
        assert!(individual.mutation_count >= 1);
    }
    assert_eq!(offspring, 16);
    assert!(engine.stats().total_mutations >= 16 * 16);
}

#[test]
fn test_environment_resamples_every_ten_generations() {
    let mut engine = engine(EngineConfig::default(), 8);

    for _ in 0..9 {
        engine.tick();
        assert!(engine.stats().active_pressures.is_empty());
    }
    engine.tick();

    assert_eq!(engine.generation(), 10);
    assert!(engine.stats().active_pressures.len() <= 3);
}

#[test]
fn test_active_pressures_stay_capped() {
    let config = EngineConfig {
        population_size: 8,
        genome_length: 16,
        environment_interval: 1,
        ..EngineConfig::default()
    };
    let mut engine = engine(config, 99);
    for _ in 0..50 {
        engine.tick();
        assert!(engine.stats().active_pressures.len() <= 3);
    }
}

#[test]
fn test_elites_survive_ticks_after_a_resample() {
    let config = EngineConfig {
        environment_interval: 3,
        ..test_config(10, 32, 0.3, 0.7, 0.2)
    };

    for seed in 0..8 {
        let mut engine = engine(config.clone(), seed);
        for _ in 0..12 {
            let before: Vec<(IndividualId, u64, Vec<f64>)> = engine
                .top_k(2)
                .into_iter()
                .map(|entry| {
                    let genome = engine.individual(entry.id).unwrap().genome.clone();
                    (entry.id, entry.fitness.to_bits(), genome)
                })
                .collect();

            engine.tick();
            if engine.generation() % 3 == 0 {
                continue;
            }

            for (id, fitness_bits, genome) in before {
                let generation = engine.generation();
                let survivor = engine.individual(id).unwrap_or_else(|| {
                    panic!("seed {seed}: elite {id} dropped at generation {generation}")
                });
                assert_eq!(survivor.fitness.to_bits(), fitness_bits);
                assert_eq!(survivor.genome, genome);
            }
        }
    }
}

#[test]
fn test_seeded_engines_are_deterministic() {
    let config = test_config(16, 32, 0.2, 0.7, 0.125);
    let mut a = engine(config.clone(), 31337);
    let mut b = engine(config, 31337);

    for step in 0..15 {
        a.tick();
        b.tick();

        let target = a.top_k(1)[0].id;
        let event = if step % 2 == 0 {
            InteractionEvent::Click
        } else {
            InteractionEvent::Gesture("pinch".to_string())
        };
        a.report_interaction(target, event.clone()).unwrap();
        b.report_interaction(target, event).unwrap();

        assert_eq!(a.stats(), b.stats());
        assert_eq!(a.top_k(16), b.top_k(16));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let config = test_config(16, 32, 0.2, 0.7, 0.125);
    let a = engine(config.clone(), 1);
    let b = engine(config, 2);
    assert_ne!(a.population()[0].genome, b.population()[0].genome);
}

#[test]
fn test_hall_of_fame_tracks_best_seen() {
    let mut engine = engine(test_config(20, 32, 0.2, 0.7, 0.1), 5);
    for _ in 0..5 {
        engine.tick();
    }

    let hof = engine.hall_of_fame();
    assert!(!hof.is_empty());
    assert!(hof.len() <= engine.config().hall_of_fame_size);
    let entries = hof.get_all();
    assert!(entries.windows(2).all(|w| w[0].fitness >= w[1].fitness));
}

#[test]
fn test_engines_coexist_independently() {
    let config = test_config(10, 16, 0.2, 0.7, 0.1);
    let mut a = engine(config.clone(), 10);
    let b = engine(config, 10);

    a.tick();
    a.tick();

    assert_eq!(a.generation(), 2);
    assert_eq!(b.generation(), 0);
}
