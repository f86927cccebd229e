use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use nebula_core::{seed, Command, Outcome, Snapshot};
use nebula_store::{InMemoryStore, Store};
use tracing::info;

use crate::{files, Config};

pub struct Runner {
    pub root: PathBuf,
    pub cfg: Config,
    pub store: InMemoryStore,
}

impl Runner {
    /// Loads config (creating the default when absent) and seeds a fresh session.
    pub fn open(root: PathBuf) -> Result<Self> {
        let cfg_path = Config::config_path(&root);
        let cfg = if cfg_path.exists() {
            Config::load_from(&cfg_path)?
        } else {
            let cfg = Config::default_for_repo("Nebula Animator");
            cfg.save_to(&cfg_path)?;
            cfg
        };

        let initial = Self::load_initial(&root, &cfg)?;
        let store = InMemoryStore::seeded(initial)?;
        Ok(Self { root, cfg, store })
    }

    fn load_initial(root: &Path, cfg: &Config) -> Result<Snapshot> {
        match cfg.seed_path(root) {
            Some(path) => {
                info!(seed = %path.display(), "loading seed file");
                files::load_seed(&path)
            }
            None => {
                info!("using built-in seed");
                Ok(seed::builtin())
            }
        }
    }

    /// Writes `.nebula/nebula.toml` and a copy of the built-in seed to edit.
    pub fn init(root: &Path) -> Result<()> {
        let seed_path = Config::default_seed_path(root);
        if !seed_path.exists() {
            files::save_seed(&seed_path, &seed::builtin())?;
        }
        let cfg_path = Config::config_path(root);
        if !cfg_path.exists() {
            let mut cfg = Config::default_for_repo("Nebula Animator");
            cfg.seed.path = Some(".nebula/seed.yaml".to_string());
            cfg.save_to(&cfg_path)?;
        }
        Ok(())
    }

    /// Applies commands in order. In strict mode the first miss aborts the batch;
    /// commands already applied stay applied.
    pub fn apply_commands(&self, cmds: Vec<Command>, strict: bool) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(cmds.len());
        for (i, cmd) in cmds.into_iter().enumerate() {
            let out = self.store.dispatch(cmd)?;
            if strict {
                out.clone().into_result().map_err(|e| anyhow!("command #{}: {e}", i + 1))?;
            }
            outcomes.push(out);
        }
        Ok(outcomes)
    }

    pub fn apply_script(&self, path: &Path, strict: bool) -> Result<Vec<Outcome>> {
        let cmds = files::load_script(path)?;
        info!(script = %path.display(), commands = cmds.len(), "applying script");
        self.apply_commands(cmds, strict || self.cfg.strict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_core::{completion_velocity, StageId, StageStatus};
    use tempfile::tempdir;

    #[test]
    fn open_without_config_writes_default_and_uses_builtin() {
        let dir = tempdir().unwrap();
        let r = Runner::open(dir.path().to_path_buf()).unwrap();
        assert!(Config::config_path(dir.path()).exists());
        assert_eq!(*r.store.snapshot().unwrap(), seed::builtin());
    }

    #[test]
    fn init_then_open_reads_the_seed_file() {
        let dir = tempdir().unwrap();
        Runner::init(dir.path()).unwrap();

        let seed_path = Config::default_seed_path(dir.path());
        let mut snap = files::load_seed(&seed_path).unwrap();
        snap.stages.truncate(2);
        files::save_seed(&seed_path, &snap).unwrap();

        let r = Runner::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(r.store.snapshot().unwrap().stages.len(), 2);
    }

    #[test]
    fn strict_mode_stops_at_first_miss() {
        let dir = tempdir().unwrap();
        let r = Runner::open(dir.path().to_path_buf()).unwrap();
        let cmds = vec![
            Command::SetStageStatus { stage: StageId::new("qc"), status: StageStatus::Done },
            Command::SetStageStatus { stage: StageId::new("nope"), status: StageStatus::Done },
            Command::SetStageStatus { stage: StageId::new("mix"), status: StageStatus::Done },
        ];
        let err = r.apply_commands(cmds, true).unwrap_err();
        assert_eq!(err.to_string(), "command #2: no stage with id nope");

        let snap = r.store.snapshot().unwrap();
        assert_eq!(completion_velocity(&snap.stages).percent, 60);
    }

    #[test]
    fn lenient_mode_keeps_going() {
        let dir = tempdir().unwrap();
        let r = Runner::open(dir.path().to_path_buf()).unwrap();
        let outs = r
            .apply_commands(
                vec![
                    Command::SetStageStatus { stage: StageId::new("nope"), status: StageStatus::Done },
                    Command::SetStageStatus { stage: StageId::new("mix"), status: StageStatus::Done },
                ],
                false,
            )
            .unwrap();
        assert_eq!(outs.len(), 2);
        assert_eq!(r.store.revision().unwrap(), 1);
    }
}
