use std::path::PathBuf;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fuzz/corpus"));

    for (target, seed) in engine_equivalence::seed::seeds()? {
        let target_dir = dir.join(target);
        std::fs::create_dir_all(&target_dir)
            .with_context(|| format!("create {}", target_dir.display()))?;

        let path = target_dir.join("seed");
        std::fs::write(&path, &seed).with_context(|| format!("write {}", path.display()))?;
        log::info!("wrote {} byte seed to {}", seed.len(), path.display());
    }

    Ok(())
}
