//! Display values the dashboard shows next to the raw collections.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    derive::{completion_velocity, enabled_preset_count, next_upload, status_label},
    ids::ChecklistId,
    types::*,
    Snapshot,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub trend: String,
    pub hint: String,
}

pub fn stat_cards(snapshot: &Snapshot) -> Vec<StatCard> {
    let velocity = completion_velocity(&snapshot.stages);
    let next = next_upload(&snapshot.slots);
    let enabled = enabled_preset_count(&snapshot.presets);

    vec![
        StatCard {
            id: "velocity",
            label: "Pipeline Velocity",
            value: format!("{}%", velocity.percent),
            trend: if velocity.percent > 70 { "+4% vs. yesterday" } else { "-3% vs. target" }.to_string(),
            hint: format!("{}/{} agents completed", velocity.completed_count(), velocity.total),
        },
        StatCard {
            id: "next-upload",
            label: "Next Upload",
            value: next.map(|s| format_time(&s.publish_date)).unwrap_or_else(|| "TBD".to_string()),
            trend: next.map(|s| status_label(s.status)).unwrap_or("Awaiting slot").to_string(),
            hint: next.map(|s| s.title.clone()).unwrap_or_else(|| "No slot configured".to_string()),
        },
        StatCard {
            id: "presets",
            label: "Active Automations",
            value: format!("{enabled:02}"),
            trend: format!("{} standby", snapshot.presets.len() - enabled),
            hint: "Switch presets to pivot styles instantly.".to_string(),
        },
        StatCard {
            id: "reliability",
            label: "Upload Reliability",
            value: "98.2%".to_string(),
            trend: "Last 30 days".to_string(),
            hint: "Measured by on-time publish versus schedule.".to_string(),
        },
    ]
}

pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format("%-I:%M %p").to_string()
}

pub fn format_slot_date(at: &DateTime<Utc>) -> String {
    at.format("%a, %b %-d · %-I:%M %p").to_string()
}

/// "Stage N" badge, 1-based on collection order.
pub fn stage_number(index: usize) -> String {
    format!("Stage {}", index + 1)
}

/// The first two stages always read as due today.
pub fn stage_due_label(index: usize, stage: &PipelineStage) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Today 6pm".to_string(),
        _ => format!("Day {}", stage.due_offset_days + 1),
    }
}

/// Header preview: the first four stages with their labels.
pub fn upload_stack(stages: &[PipelineStage]) -> Vec<(&str, &'static str)> {
    stages.iter().take(4).map(|s| (s.title.as_str(), status_label(s.status))).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssetCapacity {
    pub label: String,
    /// Fill of the capacity bar, clamped to `0.0..=1.0`.
    pub ratio: f64,
    pub diff: i64,
    pub badge: String,
    pub healthy: bool,
}

pub fn asset_capacity(track: &AssetTrack) -> AssetCapacity {
    let ratio = if track.needed == 0 {
        1.0
    } else {
        (f64::from(track.available) / f64::from(track.needed)).min(1.0)
    };
    let diff = i64::from(track.available) - i64::from(track.needed);
    let badge = if diff >= 0 { format!("Surplus {diff}") } else { format!("Need {}", diff.abs()) };
    AssetCapacity { label: track.label.clone(), ratio, diff, badge, healthy: diff >= 0 }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistRow<'a> {
    pub id: &'a ChecklistId,
    pub label: &'a str,
    pub detail: &'a str,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistView<'a> {
    pub rows: Vec<ChecklistRow<'a>>,
    /// Only runbook ids count; stray ids in the completion set are ignored.
    pub done: usize,
    pub total: usize,
}

pub fn checklist_view(snapshot: &Snapshot) -> ChecklistView<'_> {
    let rows: Vec<ChecklistRow<'_>> = snapshot
        .checklist
        .iter()
        .map(|item| ChecklistRow {
            id: &item.id,
            label: &item.label,
            detail: &item.detail,
            done: snapshot.is_completed(&item.id),
        })
        .collect();
    let done = rows.iter().filter(|r| r.done).count();
    ChecklistView { total: rows.len(), done, rows }
}
