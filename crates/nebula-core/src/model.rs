use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    Pending,
    InProgress,
    Done,
    Blocked,
}

impl StageStatus {
    /// Display order used by the pipeline board.
    pub const ALL: [StageStatus; 4] = [Self::Pending, Self::InProgress, Self::Done, Self::Blocked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SlotStatus {
    Draft,
    Scheduled,
    Uploading,
    Published,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 4] = [Self::Draft, Self::Scheduled, Self::Uploading, Self::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Uploading => "uploading",
            Self::Published => "published",
        }
    }
}

/// Either status space; the label table is keyed on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyStatus {
    Stage(StageStatus),
    Slot(SlotStatus),
}

impl From<StageStatus> for AnyStatus {
    fn from(s: StageStatus) -> Self {
        Self::Stage(s)
    }
}

impl From<SlotStatus> for AnyStatus {
    fn from(s: SlotStatus) -> Self {
        Self::Slot(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} status: {value:?}")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for StageStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == n)
            .ok_or_else(|| ParseStatusError { kind: "stage", value: s.to_string() })
    }
}

impl FromStr for SlotStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == n)
            .ok_or_else(|| ParseStatusError { kind: "slot", value: s.to_string() })
    }
}

impl FromStr for AnyStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(st) = s.parse::<StageStatus>() {
            return Ok(Self::Stage(st));
        }
        s.parse::<SlotStatus>()
            .map(Self::Slot)
            .map_err(|_| ParseStatusError { kind: "stage or slot", value: s.to_string() })
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
