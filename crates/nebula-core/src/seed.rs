use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::{ids::*, model::*, types::*, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("duplicate step id {step} in preset {preset}")]
    DuplicateStep { preset: String, step: String },
}

/// Checks the uniqueness invariants a seed must satisfy before a store takes it.
pub fn validate(snapshot: &Snapshot) -> Result<(), SeedError> {
    unique("stage", snapshot.stages.iter().map(|s| s.id.as_str()))?;
    unique("slot", snapshot.slots.iter().map(|s| s.id.as_str()))?;
    unique("preset", snapshot.presets.iter().map(|p| p.id.as_str()))?;
    unique("checklist", snapshot.checklist.iter().map(|c| c.id.as_str()))?;
    unique("asset", snapshot.assets.iter().map(|a| a.id.as_str()))?;
    unique("completed", snapshot.completed.iter().map(|c| c.as_str()))?;
    for p in &snapshot.presets {
        unique("step", p.steps.iter().map(|s| s.id.as_str())).map_err(|e| match e {
            SeedError::DuplicateId { id, .. } => SeedError::DuplicateStep { preset: p.id.to_string(), step: id },
            other => other,
        })?;
    }
    Ok(())
}

fn unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId { kind, id: id.to_string() });
        }
    }
    Ok(())
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().unwrap_or_default()
}

fn stage(id: &str, title: &str, description: &str, owner: &str, deliverable: &str, status: StageStatus, due: i32, hooks: &[&str]) -> PipelineStage {
    PipelineStage {
        id: StageId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        owner: owner.to_string(),
        deliverable: deliverable.to_string(),
        status,
        due_offset_days: due,
        automation_hooks: hooks.iter().map(|h| h.to_string()).collect(),
    }
}

fn slot(id: &str, title: &str, theme: &str, runtime: &str, publish_date: DateTime<Utc>, status: SlotStatus) -> ContentSlot {
    ContentSlot {
        id: SlotId::new(id),
        title: title.to_string(),
        theme: theme.to_string(),
        runtime: runtime.to_string(),
        publish_date,
        status,
    }
}

fn step(id: &str, label: &str, output: &str) -> PresetStep {
    PresetStep { id: StepId::new(id), label: label.to_string(), output: output.to_string() }
}

fn item(id: &str, label: &str, detail: &str) -> ChecklistItem {
    ChecklistItem { id: ChecklistId::new(id), label: label.to_string(), detail: detail.to_string() }
}

fn asset(id: &str, label: &str, available: u32, needed: u32) -> AssetTrack {
    AssetTrack { id: AssetId::new(id), label: label.to_string(), available, needed }
}

/// Built-in demo session: five stages (two done), four upload slots, three presets.
pub fn builtin() -> Snapshot {
    let stages = vec![
        stage(
            "ideation",
            "Story Ideation",
            "Mine trending prompts and pick today's moral theme.",
            "Muse Agent",
            "Story brief",
            StageStatus::Done,
            0,
            &["Trend scrape", "Theme scoring"],
        ),
        stage(
            "storyboard",
            "Storyboard & Script",
            "Turn the brief into a shot list and narration script.",
            "Scribe Agent",
            "12-panel storyboard",
            StageStatus::Done,
            0,
            &["Shot planner", "Script polish"],
        ),
        stage(
            "render",
            "Animation Render",
            "Dispatch the animation pass to the GPU render queue.",
            "Render Agent",
            "1080p master",
            StageStatus::InProgress,
            1,
            &["GPU queue", "Frame QA"],
        ),
        stage(
            "mix",
            "Audio Mix",
            "Balance narration, score and SFX into a master track.",
            "Mixer Agent",
            "Master WAV",
            StageStatus::Pending,
            1,
            &["Loudness check"],
        ),
        stage(
            "qc",
            "Quality Check",
            "Review runtime, watermark and end-slate before scheduling.",
            "Review Agent",
            "QC report",
            StageStatus::Pending,
            2,
            &["Runtime check", "Watermark scan", "End-slate"],
        ),
    ];

    let slots = vec![
        slot("ep-104", "The Lantern Fox", "Courage", "6:40", at(2025, 3, 12, 15), SlotStatus::Draft),
        slot("ep-102", "Moonlit Garden", "Patience", "7:05", at(2025, 3, 10, 15), SlotStatus::Scheduled),
        slot("ep-103", "The Paper Kite", "Kindness", "5:55", at(2025, 3, 11, 15), SlotStatus::Draft),
        slot("ep-101", "River of Stars", "Honesty", "6:20", at(2025, 3, 9, 15), SlotStatus::Uploading),
    ];

    let presets = vec![
        AutomationPreset {
            id: PresetId::new("storybook"),
            name: "Storybook Pastel".to_string(),
            description: "Soft pastel palette with gentle narration pacing.".to_string(),
            enabled: true,
            steps: vec![
                step("palette", "Palette agent", "Pastel watercolor, warm dusk light"),
                step("voice", "Voice agent", "Warm narrator, 140 wpm"),
                step("music", "Score agent", "Music box lullaby in C major"),
            ],
        },
        AutomationPreset {
            id: PresetId::new("cosmic"),
            name: "Cosmic Adventure".to_string(),
            description: "Saturated space scenes with upbeat orchestral bed.".to_string(),
            enabled: true,
            steps: vec![
                step("palette", "Palette agent", "Deep indigo with neon accents"),
                step("voice", "Voice agent", "Energetic narrator, 160 wpm"),
            ],
        },
        AutomationPreset {
            id: PresetId::new("folk"),
            name: "Folk Tale Ink".to_string(),
            description: "Ink-wash style for traditional fables.".to_string(),
            enabled: false,
            steps: vec![
                step("palette", "Palette agent", "Monochrome ink wash"),
                step("voice", "Voice agent", "Elder storyteller, 120 wpm"),
            ],
        },
    ];

    let checklist = vec![
        item("prompts", "Refresh prompt bank", "Pull latest trending topics and validate moral themes."),
        item("render", "Kick off render queue", "Dispatch animation pass to GPU cluster."),
        item("mix", "Mix narration + SFX", "Balance levels and export master WAV."),
        item("qc", "Quality check final master", "Auto-review runtime, watermark, and end-slate."),
        item("schedule", "Schedule upload slot", "Confirm metadata and release cadence for next 72 hours."),
    ];

    let assets = vec![
        asset("rigs", "Character rigs", 46, 40),
        asset("backgrounds", "Background environments", 26, 32),
        asset("music", "Music beds", 18, 24),
        asset("voices", "Voice packs", 12, 10),
    ];

    Snapshot {
        stages,
        slots,
        presets,
        completed: vec![ChecklistId::new("prompts")],
        checklist,
        assets,
    }
}
