use crate::{model::*, types::*};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Velocity<'a> {
    pub completed: Vec<&'a PipelineStage>,
    pub total: usize,
    pub percent: u32,
}

impl Velocity<'_> {
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

/// Share of stages marked done, rounded half-up to a whole percent.
/// An empty pipeline reports 0.
pub fn completion_velocity(stages: &[PipelineStage]) -> Velocity<'_> {
    let completed: Vec<&PipelineStage> = stages.iter().filter(|s| s.status == StageStatus::Done).collect();
    let total = stages.len();
    Velocity { percent: round_percent(completed.len(), total), completed, total }
}

fn round_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (part as u64, total as u64);
    // floor(100 * part / total + 1/2) without going through floats
    ((200 * part + total) / (2 * total)) as u32
}

/// Slots ordered by publish date; ties keep their stored order.
pub fn by_publish_date(slots: &[ContentSlot]) -> Vec<&ContentSlot> {
    let mut sorted: Vec<&ContentSlot> = slots.iter().collect();
    sorted.sort_by_key(|s| s.publish_date);
    sorted
}

pub fn next_upload(slots: &[ContentSlot]) -> Option<&ContentSlot> {
    by_publish_date(slots).into_iter().next()
}

pub fn enabled_preset_count(presets: &[AutomationPreset]) -> usize {
    presets.iter().filter(|p| p.enabled).count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: &'static str,
}

pub const UNKNOWN_BADGE: StatusBadge = StatusBadge { label: "Unknown", color: "bg-zinc-100 text-zinc-500" };

pub fn status_badge(status: impl Into<AnyStatus>) -> StatusBadge {
    let (label, color) = match status.into() {
        AnyStatus::Stage(StageStatus::Pending) => ("Pending", "bg-zinc-200 text-zinc-700"),
        AnyStatus::Stage(StageStatus::InProgress) => ("In Progress", "bg-indigo-500/10 text-indigo-600"),
        AnyStatus::Stage(StageStatus::Done) => ("Done", "bg-emerald-500/10 text-emerald-600"),
        AnyStatus::Stage(StageStatus::Blocked) => ("Blocked", "bg-rose-500/10 text-rose-600"),
        AnyStatus::Slot(SlotStatus::Draft) => ("Draft", "bg-zinc-200 text-zinc-700"),
        AnyStatus::Slot(SlotStatus::Scheduled) => ("Scheduled", "bg-sky-500/10 text-sky-600"),
        AnyStatus::Slot(SlotStatus::Uploading) => ("Uploading", "bg-amber-500/10 text-amber-600"),
        AnyStatus::Slot(SlotStatus::Published) => ("Published", "bg-emerald-500/10 text-emerald-600"),
    };
    StatusBadge { label, color }
}

pub fn status_label(status: impl Into<AnyStatus>) -> &'static str {
    status_badge(status).label
}

/// Lookup for raw status strings (seed files, CLI input). Never fails.
pub fn status_badge_for(raw: &str) -> StatusBadge {
    raw.parse::<AnyStatus>().map(status_badge).unwrap_or(UNKNOWN_BADGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn stages_with(done: usize, total: usize) -> Vec<PipelineStage> {
        let base = seed::builtin().stages[0].clone();
        (0..total)
            .map(|i| PipelineStage {
                id: format!("s{i}").as_str().into(),
                status: if i < done { StageStatus::Done } else { StageStatus::Pending },
                ..base.clone()
            })
            .collect()
    }

    #[test]
    fn velocity_rounds_half_up() {
        assert_eq!(completion_velocity(&stages_with(2, 5)).percent, 40);
        assert_eq!(completion_velocity(&stages_with(1, 8)).percent, 13);
        assert_eq!(completion_velocity(&stages_with(1, 3)).percent, 33);
        assert_eq!(completion_velocity(&stages_with(2, 3)).percent, 67);
        assert_eq!(completion_velocity(&stages_with(3, 3)).percent, 100);
        assert_eq!(completion_velocity(&stages_with(0, 4)).percent, 0);
    }

    #[test]
    fn velocity_over_empty_pipeline_is_zero() {
        let v = completion_velocity(&[]);
        assert_eq!(v.percent, 0);
        assert_eq!(v.total, 0);
        assert_eq!(v.completed_count(), 0);
    }

    #[test]
    fn velocity_lists_completed_stages_in_order() {
        let snap = seed::builtin();
        let v = completion_velocity(&snap.stages);
        let ids: Vec<&str> = v.completed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ideation", "storyboard"]);
    }

    #[test]
    fn enabled_count() {
        let snap = seed::builtin();
        assert_eq!(enabled_preset_count(&snap.presets), 2);
        assert_eq!(enabled_preset_count(&[]), 0);
    }

    #[test]
    fn labels_are_total_and_non_empty() {
        for s in StageStatus::ALL {
            assert!(!status_label(s).is_empty());
            assert_ne!(status_badge(s), UNKNOWN_BADGE);
        }
        for s in SlotStatus::ALL {
            assert!(!status_label(s).is_empty());
            assert_ne!(status_badge(s), UNKNOWN_BADGE);
        }
        assert_eq!(status_label(StageStatus::InProgress), "In Progress");
    }

    #[test]
    fn raw_lookup_falls_back() {
        assert_eq!(status_badge_for("uploading").label, "Uploading");
        assert_eq!(status_badge_for("in-progress").label, "In Progress");
        assert_eq!(status_badge_for("archived"), UNKNOWN_BADGE);
        assert_eq!(status_badge_for(""), UNKNOWN_BADGE);
    }
}
