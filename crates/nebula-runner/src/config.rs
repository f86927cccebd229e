use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    /// Treat unmatched ids in scripts as errors instead of no-ops.
    #[serde(default)]
    pub strict: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// YAML seed file. Relative paths resolve against the project root; `~` is expanded.
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    pub fn default_for_repo(title: &str) -> Self {
        Self {
            dashboard: DashboardConfig { title: title.to_string(), strict: Some(false) },
            seed: SeedConfig::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse nebula.toml")?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn strict(&self) -> bool {
        self.dashboard.strict.unwrap_or(false)
    }

    /// Resolved seed file location, if one is configured.
    pub fn seed_path(&self, root: &Path) -> Option<PathBuf> {
        self.seed.path.as_ref().map(|p| {
            let expanded = PathBuf::from(shellexpand::tilde(p).to_string());
            if expanded.is_absolute() {
                expanded
            } else {
                root.join(expanded)
            }
        })
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(".nebula").join("nebula.toml")
    }

    pub fn default_seed_path(root: &Path) -> PathBuf {
        root.join(".nebula").join("seed.yaml")
    }
}
