//! Terminal rendering of snapshots, charts and samples.

use std::fmt::Write as _;
use std::io::Write;

use glam::DVec2;
use serde::Serialize;

use cannonlab_core::enums::FlightPhase;
use cannonlab_core::state::{BarGroup, MetricsView, SessionSnapshot};

/// Width of the longest bar, in characters.
pub const BAR_WIDTH: usize = 40;

/// Chart value label: two decimals.
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_point(p: DVec2) -> String {
    format!("({}, {})", format_value(p.x), format_value(p.y))
}

/// One chart as horizontal bars scaled to the largest value.
pub fn render_bar_group(group: &BarGroup) -> String {
    let max = group
        .bars
        .iter()
        .map(|b| b.value.abs())
        .fold(0.0_f64, f64::max);
    let label_width = group.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

    let mut out = format!("{}\n", group.title);
    for bar in &group.bars {
        let len = if max > 0.0 && bar.value > 0.0 {
            ((bar.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:<bar_width$}  {}",
            bar.label,
            "#".repeat(len),
            format_value(bar.value),
            bar_width = BAR_WIDTH,
        );
    }
    out
}

pub fn render_metrics(metrics: &MetricsView) -> String {
    metrics
        .groups()
        .iter()
        .map(|g| render_bar_group(g))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Latest positions of both bodies, one line per tick.
pub fn render_frame(snapshot: &SessionSnapshot) -> Option<String> {
    let projectile = snapshot.tracks.first()?.points.last()?;
    let cannon = snapshot.tracks.get(1)?.points.last()?;
    Some(format!(
        "shot {} t={}  projectile {}  cannon {}",
        snapshot.shot,
        format_value(snapshot.shot_time),
        format_point(projectile.position),
        format_point(cannon.position),
    ))
}

/// Outcome of the current shot.
pub fn render_summary(snapshot: &SessionSnapshot) -> String {
    let Some(phase) = snapshot.phase else {
        return "No shot fired".to_string();
    };

    let mut out = format!(
        "Shot {}: {} at t = {} s\n",
        snapshot.shot,
        phase_name(phase),
        format_value(snapshot.shot_time)
    );
    let _ = writeln!(
        out,
        "  target x = {} m, height = {} m",
        format_value(snapshot.target.x),
        format_value(snapshot.target.height)
    );
    if let Some(hit) = snapshot.hit {
        match (hit.hit, hit.point) {
            (true, Some(point)) => {
                let _ = writeln!(out, "  hit at {}", format_point(point));
                if hit.below_ground {
                    let _ = writeln!(out, "  (target plane crossed below ground level)");
                }
            }
            (false, Some(point)) => {
                let _ = writeln!(out, "  passed over the target at {}", format_point(point));
            }
            _ => {
                let _ = writeln!(out, "  target out of reach");
            }
        }
    }
    if !snapshot.overlays.is_empty() {
        let _ = writeln!(out, "  {} archived track(s) shown", snapshot.overlays.len());
    }
    out
}

fn phase_name(phase: FlightPhase) -> &'static str {
    match phase {
        FlightPhase::Pending => "pending",
        FlightPhase::InFlight => "in flight",
        FlightPhase::Hit => "HIT",
        FlightPhase::Missed => "missed",
        FlightPhase::Grounded => "hit the ground",
    }
}

/// Position table for the `sample` command.
pub fn render_samples(rows: &[SampleRow]) -> String {
    let mut out = format!(
        "{:>8}  {:>12}  {:>12}  {:>12}\n",
        "t (s)", "proj x", "proj y", "cannon x"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>8}  {:>12}  {:>12}  {:>12}",
            format_value(row.t),
            format_value(row.projectile.x),
            format_value(row.projectile.y),
            format_value(row.cannon.x),
        );
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleRow {
    pub t: f64,
    pub projectile: DVec2,
    pub cannon: DVec2,
}

/// Write `value` as a single JSON line.
pub fn write_jsonl<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    Ok(())
}
