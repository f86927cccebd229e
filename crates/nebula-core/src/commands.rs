use serde::{Deserialize, Serialize};

use crate::{ids::*, model::*};

/// One user action against the dashboard state.
///
/// Scripts spell these as `{ op: set_stage_status, stage: qc, status: done }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    SetStageStatus { stage: StageId, status: StageStatus },
    SetSlotStatus { slot: SlotId, status: SlotStatus },
    TogglePreset { preset: PresetId },
    SetStepOutput { preset: PresetId, step: StepId, text: String },
    ToggleChecklistItem { item: ChecklistId },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetStageStatus { .. } => "set_stage_status",
            Self::SetSlotStatus { .. } => "set_slot_status",
            Self::TogglePreset { .. } => "toggle_preset",
            Self::SetStepOutput { .. } => "set_step_output",
            Self::ToggleChecklistItem { .. } => "toggle_checklist_item",
        }
    }
}
