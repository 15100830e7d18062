use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use traitevo::engines::generation::{GenerationObserver, LogObserver};
use traitevo::{ConfigManager, Engine, Snapshot};

fn main() -> Result<()> {
    env_logger::init();

    // traitevo [CONFIG.toml] [TICKS]
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(PathBuf::from);
    let ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);

    let manager = ConfigManager::new();
    manager
        .load(config_path.as_deref())
        .context("failed to load configuration")?;
    let config = manager.get();

    let mut engine = Engine::from_config(config.engine).context("invalid engine configuration")?;
    let mut observer = LogObserver;

    for _ in 0..ticks {
        engine.tick();
        observer.on_generation_complete(&engine.stats());
    }

    let snapshot = Snapshot::capture(&engine);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
