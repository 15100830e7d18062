use super::evolution_engine::Stats;
use std::sync::mpsc::Sender;

/// Notified after every completed generation step
pub trait GenerationObserver: Send {
    fn on_generation_complete(&mut self, stats: &Stats);
}

/// Logs each generation through the `log` facade
#[derive(Debug, Default)]
pub struct LogObserver;

impl GenerationObserver for LogObserver {
    fn on_generation_complete(&mut self, stats: &Stats) {
        log::info!(
            "Generation {} complete. Best fitness: {:.4}, average: {:.4}, pressures: {:?}",
            stats.generation,
            stats.best_fitness,
            stats.average_fitness,
            stats.active_pressures
        );
    }
}

// For handing stats to another thread
pub struct ChannelObserver {
    sender: Sender<Stats>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<Stats>) -> Self {
        Self { sender }
    }
}

impl GenerationObserver for ChannelObserver {
    fn on_generation_complete(&mut self, stats: &Stats) {
        let _ = self.sender.send(stats.clone());
    }
}
