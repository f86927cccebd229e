use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{ids::*, types::*};

/// Immutable view of the whole dashboard at one point in time.
/// Mutations never touch a snapshot; they produce the next one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub stages: Vec<PipelineStage>,
    #[serde(default)]
    pub slots: Vec<ContentSlot>,
    #[serde(default)]
    pub presets: Vec<AutomationPreset>,
    /// Completed checklist ids, in the order they were ticked.
    #[serde(default)]
    pub completed: Vec<ChecklistId>,
    /// Static runbook definition.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Static capacity tracks.
    #[serde(default)]
    pub assets: Vec<AssetTrack>,
}

impl Snapshot {
    pub fn stage(&self, id: &StageId) -> Option<&PipelineStage> {
        self.stages.iter().find(|s| &s.id == id)
    }

    pub fn slot(&self, id: &SlotId) -> Option<&ContentSlot> {
        self.slots.iter().find(|s| &s.id == id)
    }

    pub fn preset(&self, id: &PresetId) -> Option<&AutomationPreset> {
        self.presets.iter().find(|p| &p.id == id)
    }

    pub fn is_completed(&self, id: &ChecklistId) -> bool {
        self.completed.contains(id)
    }

    /// SHA-256 over the JSON encoding. Equal snapshots hash equal, so a renderer
    /// can skip work when nothing moved.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Ok(hex::encode(hasher.finalize()))
    }
}
