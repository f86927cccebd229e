use std::path::Path;

use anyhow::{Context, Result};
use nebula_core::{seed, Command, Snapshot};

pub fn load_seed(path: &Path) -> Result<Snapshot> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read seed: {}", path.display()))?;
    let snap: Snapshot = serde_yaml::from_str(&s).with_context(|| format!("parse seed yaml: {}", path.display()))?;
    seed::validate(&snap).with_context(|| format!("invalid seed: {}", path.display()))?;
    Ok(snap)
}

pub fn save_seed(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let s = serde_yaml::to_string(snapshot).with_context(|| "serialize seed")?;
    std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// A script is a YAML list of commands, applied top to bottom.
pub fn load_script(path: &Path) -> Result<Vec<Command>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read script: {}", path.display()))?;
    let cmds: Vec<Command> = serde_yaml::from_str(&s).with_context(|| format!("parse script yaml: {}", path.display()))?;
    Ok(cmds)
}
