use crate::{ids::*, model::*, types::*, Command, Outcome, Snapshot, Unmatched};

// Collection-level mutations. Each returns a fresh collection; an id that matches
// nothing yields a value-equal copy of the input.

pub fn set_stage_status(stages: &[PipelineStage], stage_id: &StageId, status: StageStatus) -> Vec<PipelineStage> {
    stages
        .iter()
        .map(|s| {
            if &s.id == stage_id {
                PipelineStage { status, ..s.clone() }
            } else {
                s.clone()
            }
        })
        .collect()
}

pub fn set_slot_status(slots: &[ContentSlot], slot_id: &SlotId, status: SlotStatus) -> Vec<ContentSlot> {
    slots
        .iter()
        .map(|s| {
            if &s.id == slot_id {
                ContentSlot { status, ..s.clone() }
            } else {
                s.clone()
            }
        })
        .collect()
}

pub fn toggle_preset_enabled(presets: &[AutomationPreset], preset_id: &PresetId) -> Vec<AutomationPreset> {
    presets
        .iter()
        .map(|p| {
            if &p.id == preset_id {
                AutomationPreset { enabled: !p.enabled, ..p.clone() }
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Replaces the step output verbatim. No trimming, no length cap.
pub fn set_step_output(presets: &[AutomationPreset], preset_id: &PresetId, step_id: &StepId, text: &str) -> Vec<AutomationPreset> {
    presets
        .iter()
        .map(|p| {
            if &p.id != preset_id {
                return p.clone();
            }
            let steps = p
                .steps
                .iter()
                .map(|st| {
                    if &st.id == step_id {
                        PresetStep { output: text.to_string(), ..st.clone() }
                    } else {
                        st.clone()
                    }
                })
                .collect();
            AutomationPreset { steps, ..p.clone() }
        })
        .collect()
}

/// Removes `item` when present, appends it otherwise. Ids outside the runbook are kept as-is.
pub fn toggle_checklist_item(completed: &[ChecklistId], item: &ChecklistId) -> Vec<ChecklistId> {
    if completed.contains(item) {
        completed.iter().filter(|id| *id != item).cloned().collect()
    } else {
        let mut next = completed.to_vec();
        next.push(item.clone());
        next
    }
}

/// Runs one command against a snapshot and returns the next snapshot.
///
/// Misses are reported through `Outcome::Unmatched` and leave the snapshot equal
/// to the input.
pub fn apply(snapshot: &Snapshot, cmd: &Command) -> (Snapshot, Outcome) {
    let miss = |target| (snapshot.clone(), Outcome::Unmatched { target });

    match cmd {
        Command::SetStageStatus { stage, status } => {
            if snapshot.stage(stage).is_none() {
                return miss(Unmatched::Stage(stage.clone()));
            }
            let next = Snapshot { stages: set_stage_status(&snapshot.stages, stage, *status), ..snapshot.clone() };
            (next, Outcome::Applied)
        }
        Command::SetSlotStatus { slot, status } => {
            if snapshot.slot(slot).is_none() {
                return miss(Unmatched::Slot(slot.clone()));
            }
            let next = Snapshot { slots: set_slot_status(&snapshot.slots, slot, *status), ..snapshot.clone() };
            (next, Outcome::Applied)
        }
        Command::TogglePreset { preset } => {
            if snapshot.preset(preset).is_none() {
                return miss(Unmatched::Preset(preset.clone()));
            }
            let next = Snapshot { presets: toggle_preset_enabled(&snapshot.presets, preset), ..snapshot.clone() };
            (next, Outcome::Applied)
        }
        Command::SetStepOutput { preset, step, text } => {
            match snapshot.preset(preset) {
                None => return miss(Unmatched::Preset(preset.clone())),
                Some(p) if p.step(step).is_none() => {
                    return miss(Unmatched::Step { preset: preset.clone(), step: step.clone() });
                }
                Some(_) => {}
            }
            let next = Snapshot { presets: set_step_output(&snapshot.presets, preset, step, text), ..snapshot.clone() };
            (next, Outcome::Applied)
        }
        Command::ToggleChecklistItem { item } => {
            let next = Snapshot { completed: toggle_checklist_item(&snapshot.completed, item), ..snapshot.clone() };
            (next, Outcome::Applied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn set_stage_status_touches_only_the_target() {
        let before = seed::builtin().stages;
        let after = set_stage_status(&before, &StageId::new("render"), StageStatus::Blocked);

        assert_eq!(after.len(), before.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a.id, b.id);
            if a.id.as_str() == "render" {
                assert_eq!(a.status, StageStatus::Blocked);
                assert_eq!(PipelineStage { status: b.status, ..a.clone() }, *b);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn unknown_stage_id_is_a_noop() {
        let before = seed::builtin().stages;
        let after = set_stage_status(&before, &StageId::new("missing"), StageStatus::Done);
        assert_eq!(after, before);
    }

    #[test]
    fn any_status_is_reachable_from_any_other() {
        let stages = seed::builtin().stages;
        let id = stages[0].id.clone();
        for from in StageStatus::ALL {
            let s = set_stage_status(&stages, &id, from);
            for to in StageStatus::ALL {
                let t = set_stage_status(&s, &id, to);
                assert_eq!(t[0].status, to);
            }
        }
    }

    #[test]
    fn set_slot_status_and_unknown_slot() {
        let slots = seed::builtin().slots;
        let id = slots[1].id.clone();
        let after = set_slot_status(&slots, &id, SlotStatus::Published);
        assert_eq!(after[1].status, SlotStatus::Published);
        assert_eq!(after[0], slots[0]);
        assert_eq!(set_slot_status(&slots, &SlotId::new("nope"), SlotStatus::Draft), slots);
    }

    #[test]
    fn toggle_preset_flips_enabled() {
        let presets = seed::builtin().presets;
        let id = presets[0].id.clone();
        let once = toggle_preset_enabled(&presets, &id);
        assert_eq!(once[0].enabled, !presets[0].enabled);
        assert_eq!(&once[1..], &presets[1..]);
        assert_eq!(toggle_preset_enabled(&once, &id), presets);
        assert_eq!(toggle_preset_enabled(&presets, &PresetId::new("nope")), presets);
    }

    #[test]
    fn set_step_output_replaces_verbatim() {
        let presets = seed::builtin().presets;
        let preset = presets[0].id.clone();
        let step = presets[0].steps[0].id.clone();
        let text = "  multi\nline  output ✨ ";

        let after = set_step_output(&presets, &preset, &step, text);
        assert_eq!(after[0].step(&step).unwrap().output, text);
        assert_eq!(&after[0].steps[1..], &presets[0].steps[1..]);
        assert_eq!(&after[1..], &presets[1..]);
    }

    #[test]
    fn set_step_output_needs_both_ids() {
        let presets = seed::builtin().presets;
        let preset = presets[0].id.clone();
        let step = presets[0].steps[0].id.clone();
        assert_eq!(set_step_output(&presets, &PresetId::new("nope"), &step, "x"), presets);
        assert_eq!(set_step_output(&presets, &preset, &StepId::new("nope"), "x"), presets);
    }

    #[test]
    fn toggle_checklist_is_its_own_inverse() {
        let start = vec![ChecklistId::new("prompts")];
        for id in ["prompts", "render", "not-in-runbook"] {
            let item = ChecklistId::new(id);
            let once = toggle_checklist_item(&start, &item);
            assert_ne!(once, start);
            assert_eq!(toggle_checklist_item(&once, &item), start);
        }
    }

    #[test]
    fn apply_reports_misses_without_changing_state() {
        let snap = seed::builtin();
        let cases = vec![
            (Command::SetStageStatus { stage: "x".into(), status: StageStatus::Done }, Unmatched::Stage("x".into())),
            (Command::SetSlotStatus { slot: "x".into(), status: SlotStatus::Draft }, Unmatched::Slot("x".into())),
            (Command::TogglePreset { preset: "x".into() }, Unmatched::Preset("x".into())),
            (
                Command::SetStepOutput { preset: snap.presets[0].id.clone(), step: "x".into(), text: "t".into() },
                Unmatched::Step { preset: snap.presets[0].id.clone(), step: "x".into() },
            ),
        ];
        for (cmd, target) in cases {
            let (next, out) = apply(&snap, &cmd);
            assert_eq!(out, Outcome::Unmatched { target });
            assert_eq!(next, snap);
        }
    }

    #[test]
    fn apply_leaves_the_input_snapshot_alone() {
        let snap = seed::builtin();
        let copy = snap.clone();
        let (next, out) = apply(&snap, &Command::SetStageStatus { stage: "qc".into(), status: StageStatus::Done });
        assert!(out.is_applied());
        assert_eq!(snap, copy);
        assert_eq!(next.stage(&"qc".into()).unwrap().status, StageStatus::Done);
        assert_eq!(next.slots, snap.slots);
    }
}
