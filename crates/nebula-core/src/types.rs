use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ids::*, model::*};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub id: StageId,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub deliverable: String,
    pub status: StageStatus,
    pub due_offset_days: i32,
    #[serde(default)]
    pub automation_hooks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSlot {
    pub id: SlotId,
    pub title: String,
    pub theme: String,
    pub runtime: String,
    pub publish_date: DateTime<Utc>,
    pub status: SlotStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetStep {
    pub id: StepId,
    pub label: String,
    #[serde(default)]
    pub output: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationPreset {
    pub id: PresetId,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    #[serde(default)]
    pub steps: Vec<PresetStep>,
}

impl AutomationPreset {
    pub fn step(&self, step_id: &StepId) -> Option<&PresetStep> {
        self.steps.iter().find(|s| &s.id == step_id)
    }
}

/// Static runbook entry; completion lives in the snapshot, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistId,
    pub label: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTrack {
    pub id: AssetId,
    pub label: String,
    pub available: u32,
    pub needed: u32,
}
