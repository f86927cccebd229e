use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use nebula_core::{apply, seed, Command, Outcome, Snapshot};
use tracing::{debug, warn};

use crate::traits::Store;

/// Session-scoped store. Nothing survives the process.
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    current: Arc<Snapshot>,
    revision: u64,
}

impl InMemoryStore {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            inner: Mutex::new(Inner { current: Arc::new(initial), revision: 0 }),
        }
    }

    /// Validates the seed before taking ownership of it.
    pub fn seeded(initial: Snapshot) -> anyhow::Result<Self> {
        seed::validate(&initial)?;
        Ok(Self::new(initial))
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| anyhow!("store lock poisoned"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(seed::builtin())
    }
}

impl Store for InMemoryStore {
    fn snapshot(&self) -> anyhow::Result<Arc<Snapshot>> {
        Ok(Arc::clone(&self.lock()?.current))
    }

    fn dispatch(&self, cmd: Command) -> anyhow::Result<Outcome> {
        let mut inner = self.lock()?;
        let (next, outcome) = apply(&inner.current, &cmd);
        match &outcome {
            Outcome::Applied => {
                inner.current = Arc::new(next);
                inner.revision += 1;
                debug!(op = cmd.name(), revision = inner.revision, "command applied");
            }
            Outcome::Unmatched { target } => {
                warn!(op = cmd.name(), ?target, "command matched nothing; state unchanged");
            }
        }
        Ok(outcome)
    }

    fn revision(&self) -> anyhow::Result<u64> {
        Ok(self.lock()?.revision)
    }
}
