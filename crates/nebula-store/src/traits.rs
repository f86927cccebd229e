use std::sync::Arc;

use nebula_core::{Command, Outcome, Snapshot};

pub trait Store: Send + Sync {
    /// Current state. The returned snapshot never changes underneath the caller.
    fn snapshot(&self) -> anyhow::Result<Arc<Snapshot>>;

    /// The single mutation entry point. Commands are applied one at a time.
    fn dispatch(&self, cmd: Command) -> anyhow::Result<Outcome>;

    /// Bumped once per applied command; misses leave it alone.
    fn revision(&self) -> anyhow::Result<u64>;

    fn dispatch_all(&self, cmds: Vec<Command>) -> anyhow::Result<Vec<Outcome>> {
        cmds.into_iter().map(|c| self.dispatch(c)).collect()
    }
}
