use std::fmt::Write;

use nebula_core::{
    status_label,
    view::{asset_capacity, checklist_view, format_slot_date, stage_due_label, stage_number, stat_cards, upload_stack},
    Snapshot,
};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

/// Plain-text dashboard, one section per panel.
pub fn render_text(title: &str, snap: &Snapshot) -> anyhow::Result<String> {
    let mut out = String::new();
    write_report(&mut out, title, snap)?;
    Ok(out)
}

fn write_report(out: &mut String, title: &str, snap: &Snapshot) -> std::fmt::Result {
    writeln!(out, "# {title}")?;
    writeln!(out)?;

    for card in stat_cards(snap) {
        writeln!(out, "{:<20} {:>8}  {}  ({})", card.label, card.value, card.trend, card.hint)?;
    }

    writeln!(out, "\n## Today's Upload Stack")?;
    for (title, label) in upload_stack(&snap.stages) {
        writeln!(out, "- {title} [{label}]")?;
    }

    writeln!(out, "\n## Daily Story Assembly Line")?;
    for (i, stage) in snap.stages.iter().enumerate() {
        writeln!(out, "{}: {} [{}]", stage_number(i), stage.title, status_label(stage.status))?;
        writeln!(
            out,
            "  owner: {}  due: {}  output: {}",
            stage.owner,
            stage_due_label(i, stage),
            stage.deliverable
        )?;
        if !stage.automation_hooks.is_empty() {
            writeln!(out, "  hooks: {}", stage.automation_hooks.join(", "))?;
        }
    }

    writeln!(out, "\n## Upload Timeline")?;
    for slot in &snap.slots {
        writeln!(
            out,
            "- {} ({} • {})  {}  [{}]",
            slot.title,
            slot.theme,
            slot.runtime,
            format_slot_date(&slot.publish_date),
            status_label(slot.status)
        )?;
    }

    let checklist = checklist_view(snap);
    writeln!(
        out,
        "\n## Daily Autopilot Runbook ({}/{}, {} scheduled uploads)",
        checklist.done,
        checklist.total,
        snap.slots.len()
    )?;
    for row in &checklist.rows {
        writeln!(out, "[{}] {} - {}", if row.done { "x" } else { " " }, row.label, row.detail)?;
    }

    writeln!(out, "\n## Automation Presets")?;
    for preset in &snap.presets {
        writeln!(
            out,
            "{} [{}] - {}",
            preset.name,
            if preset.enabled { "Enabled" } else { "Disabled" },
            preset.description
        )?;
        for step in &preset.steps {
            writeln!(out, "  {}: {}", step.label, step.output)?;
        }
    }

    writeln!(out, "\n## Asset Capacity")?;
    for track in &snap.assets {
        let cap = asset_capacity(track);
        let filled = (cap.ratio * BAR_WIDTH as f64).round() as usize;
        writeln!(
            out,
            "{:<24} [{}{}] {}  ({} available / {} needed)",
            cap.label,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            cap.badge,
            track.available,
            track.needed
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub title: &'a str,
    pub fingerprint: String,
    pub cards: Vec<nebula_core::view::StatCard>,
    pub snapshot: &'a Snapshot,
}

pub fn render_json(title: &str, snap: &Snapshot) -> anyhow::Result<String> {
    let report = JsonReport { title, fingerprint: snap.fingerprint()?, cards: stat_cards(snap), snapshot: snap };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_core::seed;

    #[test]
    fn text_report_has_every_panel() {
        let text = render_text("Nebula Animator", &seed::builtin()).unwrap();
        for heading in [
            "# Nebula Animator",
            "## Today's Upload Stack",
            "## Daily Story Assembly Line",
            "## Upload Timeline",
            "## Daily Autopilot Runbook (1/5, 4 scheduled uploads)",
            "## Automation Presets",
            "## Asset Capacity",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Stage 5: Quality Check [Pending]"));
        assert!(text.contains("[x] Refresh prompt bank"));
        assert!(text.contains("Need 6"));
    }

    #[test]
    fn json_report_carries_cards_and_fingerprint() {
        let snap = seed::builtin();
        let json = render_json("t", &snap).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["cards"][0]["value"], "40%");
        assert_eq!(v["fingerprint"].as_str().unwrap().len(), 64);
        assert_eq!(v["snapshot"]["stages"][2]["status"], "in-progress");
    }
}
