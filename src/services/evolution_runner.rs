use super::shared_engine::SharedEngine;
use crate::config::traits::ConfigSection;
use crate::config::RunnerConfig;
use crate::engines::generation::GenerationObserver;
use crate::error::{EvoError, Result};
use log::info;
use rand::Rng;
use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Drives ticks on a background thread at a fixed interval.
///
/// Stopping never interrupts a tick: the in-flight generation finishes and no
/// further tick starts once [`stop`](EvolutionRunner::stop) returns.
pub struct EvolutionRunner {
    handle: Option<JoinHandle<u64>>,
    stop_tx: Option<Sender<()>>,
}

impl EvolutionRunner {
    /// Start ticking `shared` in a background thread
    pub fn start<R, O>(shared: Arc<SharedEngine<R>>, config: RunnerConfig, mut observer: O) -> Result<Self>
    where
        R: Rng + Send + 'static,
        O: GenerationObserver + 'static,
    {
        config.validate()?;

        let (stop_tx, stop_rx) = channel::<()>();
        let interval = Duration::from_millis(config.tick_interval_ms);
        let max_generations = config.max_generations;

        let handle = thread::Builder::new()
            .name("traitevo-runner".to_string())
            .spawn(move || {
                let mut ticks = 0u64;
                loop {
                    if max_generations.is_some_and(|max| ticks >= max) {
                        break;
                    }
                    // Doubles as an interruptible sleep: a message or a dropped sender ends the loop
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                    let snapshot = shared.tick();
                    observer.on_generation_complete(&snapshot.stats);
                    ticks += 1;
                }
                ticks
            })
            .map_err(|e| EvoError::RunnerUnavailable(format!("failed to spawn runner: {}", e)))?;

        info!("Evolution runner started ({} ms interval)", config.tick_interval_ms);

        Ok(Self {
            handle: Some(handle),
            stop_tx: Some(stop_tx),
        })
    }

    /// True once the thread has exited, either by `max_generations` or `stop`
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Stop ticking and wait for the thread. Returns the ticks it ran;
    /// later calls return 0.
    pub fn stop(&mut self) -> Result<u64> {
        drop(self.stop_tx.take());
        let Some(handle) = self.handle.take() else {
            return Ok(0);
        };
        let ticks = handle
            .join()
            .map_err(|_| EvoError::RunnerUnavailable("runner thread panicked".to_string()))?;
        info!("Evolution runner stopped after {} ticks", ticks);
        Ok(ticks)
    }
}

impl Drop for EvolutionRunner {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
