use std::path::Path;

use anyhow::{Context, Result};
use nebula_core::{completion_velocity, enabled_preset_count, next_upload, seed, Outcome};
use nebula_store::{InMemoryStore, Store};
use serde::Deserialize;

use crate::files;

/// `expected.yaml`: every field is optional; absent fields are not checked.
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioExpected {
    pub scenario_id: String,
    #[serde(default)]
    pub velocity_percent: Option<u32>,
    #[serde(default)]
    pub next_upload: Option<String>,
    #[serde(default)]
    pub enabled_presets: Option<usize>,
    #[serde(default)]
    pub completed_checklist: Option<Vec<String>>,
    #[serde(default)]
    pub unmatched: Option<usize>,
}

#[derive(Debug)]
pub struct ScenarioResult {
    pub velocity_percent: u32,
    pub next_upload: Option<String>,
    pub enabled_presets: usize,
    pub completed_checklist: Vec<String>,
    pub applied: usize,
    pub unmatched: usize,
    pub revision: u64,
    pub fingerprint: String,
}

impl ScenarioResult {
    /// Human-readable mismatches; empty when the run meets expectations.
    pub fn mismatches(&self, exp: &ScenarioExpected) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(v) = exp.velocity_percent {
            if v != self.velocity_percent {
                out.push(format!("velocity_percent: expected {v}, got {}", self.velocity_percent));
            }
        }
        if let Some(n) = &exp.next_upload {
            if Some(n) != self.next_upload.as_ref() {
                out.push(format!("next_upload: expected {n}, got {:?}", self.next_upload));
            }
        }
        if let Some(n) = exp.enabled_presets {
            if n != self.enabled_presets {
                out.push(format!("enabled_presets: expected {n}, got {}", self.enabled_presets));
            }
        }
        if let Some(c) = &exp.completed_checklist {
            if c != &self.completed_checklist {
                out.push(format!("completed_checklist: expected {c:?}, got {:?}", self.completed_checklist));
            }
        }
        if let Some(n) = exp.unmatched {
            if n != self.unmatched {
                out.push(format!("unmatched: expected {n}, got {}", self.unmatched));
            }
        }
        out
    }
}

pub fn load_expected(dir: &Path) -> Result<ScenarioExpected> {
    let p = dir.join("expected.yaml");
    let s = std::fs::read_to_string(&p).with_context(|| format!("read expected.yaml: {}", p.display()))?;
    let exp: ScenarioExpected = serde_yaml::from_str(&s).with_context(|| "parse expected.yaml")?;
    Ok(exp)
}

/// Replays `script.yaml` against a fresh session.
///
/// The session starts from `seed.yaml` in the scenario directory when present,
/// otherwise from the built-in seed. Misses never abort the run; they are counted.
pub fn simulate(dir: &Path) -> Result<ScenarioResult> {
    let seed_path = dir.join("seed.yaml");
    let initial = if seed_path.exists() { files::load_seed(&seed_path)? } else { seed::builtin() };
    let store = InMemoryStore::seeded(initial)?;

    let cmds = files::load_script(&dir.join("script.yaml"))?;
    let outcomes = store.dispatch_all(cmds)?;
    let applied = outcomes.iter().filter(|o| matches!(o, Outcome::Applied)).count();

    let snap = store.snapshot()?;
    Ok(ScenarioResult {
        velocity_percent: completion_velocity(&snap.stages).percent,
        next_upload: next_upload(&snap.slots).map(|s| s.id.to_string()),
        enabled_presets: enabled_preset_count(&snap.presets),
        completed_checklist: snap.completed.iter().map(|c| c.to_string()).collect(),
        applied,
        unmatched: outcomes.len() - applied,
        revision: store.revision()?,
        fingerprint: snap.fingerprint()?,
    })
}
