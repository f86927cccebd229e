use serde::Serialize;
use thiserror::Error;

use crate::ids::*;

/// Which lookup failed when a command found nothing to change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Unmatched {
    Stage(StageId),
    Slot(SlotId),
    Preset(PresetId),
    Step { preset: PresetId, step: StepId },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    /// The snapshot was returned unchanged.
    Unmatched { target: Unmatched },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no stage with id {0}")]
    UnknownStage(StageId),
    #[error("no slot with id {0}")]
    UnknownSlot(SlotId),
    #[error("no preset with id {0}")]
    UnknownPreset(PresetId),
    #[error("no step {step} in preset {preset}")]
    UnknownStep { preset: PresetId, step: StepId },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// Strict view of the outcome for callers that treat a miss as a bug.
    pub fn into_result(self) -> Result<(), CommandError> {
        match self {
            Outcome::Applied => Ok(()),
            Outcome::Unmatched { target } => Err(match target {
                Unmatched::Stage(id) => CommandError::UnknownStage(id),
                Unmatched::Slot(id) => CommandError::UnknownSlot(id),
                Unmatched::Preset(id) => CommandError::UnknownPreset(id),
                Unmatched::Step { preset, step } => CommandError::UnknownStep { preset, step },
            }),
        }
    }
}
