//! Engine shared across threads.
//!
//! Writers (ticks and interaction reports) serialize on one mutex held for a
//! whole generation step. Readers only ever see the last published
//! [`Snapshot`], which is swapped in as a new `Arc` once a tick completes, so
//! a half-finished generation is never observable.

use crate::engines::feedback::InteractionEvent;
use crate::engines::generation::{Engine, RankedEntry, Stats};
use crate::error::Result;
use crate::types::IndividualId;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Immutable view of a completed generation
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub stats: Stats,
    /// Whole population, best first
    pub ranking: Vec<RankedEntry>,
    pub published_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture<R: Rng>(engine: &Engine<R>) -> Self {
        Self {
            stats: engine.stats(),
            ranking: engine.top_k(engine.population().len()),
            published_at: Utc::now(),
        }
    }

    pub fn top_k(&self, k: usize) -> &[RankedEntry] {
        &self.ranking[..k.min(self.ranking.len())]
    }
}

pub struct SharedEngine<R: Rng = StdRng> {
    engine: Mutex<Engine<R>>,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl<R: Rng> SharedEngine<R> {
    pub fn new(engine: Engine<R>) -> Self {
        let snapshot = Arc::new(Snapshot::capture(&engine));
        Self {
            engine: Mutex::new(engine),
            snapshot: RwLock::new(snapshot),
        }
    }

    fn lock_engine(&self) -> MutexGuard<'_, Engine<R>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one generation under the write lock and publish the result
    pub fn tick(&self) -> Arc<Snapshot> {
        let mut engine = self.lock_engine();
        engine.tick();
        let snapshot = Arc::new(Snapshot::capture(&*engine));
        // Published under the engine lock, so snapshots stay in generation order
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);
        snapshot
    }

    /// Applied under the same lock as `tick`, so it never interleaves with a
    /// generation step. Republishes so snapshot stats follow the live engine;
    /// fitness is unaffected until the next tick.
    pub fn report_interaction(&self, id: IndividualId, event: InteractionEvent) -> Result<()> {
        let mut engine = self.lock_engine();
        engine.report_interaction(id, event)?;
        let snapshot = Arc::new(Snapshot::capture(&*engine));
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        Ok(())
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        let published = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*published)
    }

    pub fn top_k(&self, k: usize) -> Vec<RankedEntry> {
        self.snapshot().top_k(k).to_vec()
    }

    pub fn stats(&self) -> Stats {
        self.snapshot().stats.clone()
    }

    /// Inspect the live engine; blocks while a tick is running
    pub fn with_engine<T, F: FnOnce(&Engine<R>) -> T>(&self, f: F) -> T {
        let engine = self.lock_engine();
        f(&*engine)
    }

    pub fn into_inner(self) -> Engine<R> {
        self.engine.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
