//! Executes a parsed command line against a simulation session.

use std::io::Write;

use anyhow::{bail, Context, Result};
use tracing::info;

use cannonlab_core::commands::SessionCommand;
use cannonlab_core::config::FiringConfig;
use cannonlab_core::enums::AlertLevel;
use cannonlab_core::state::SessionSnapshot;
use cannonlab_sim::derived::DerivedState;
use cannonlab_sim::metrics::Metrics;
use cannonlab_sim::{FlightPlan, SimulationSession};

use crate::animation::{run_until_idle, AnimationClock, ImmediateClock, RealtimeClock};
use crate::cli::{Cli, Command, OutputFormat};
use crate::config_file;
use crate::render::{self, SampleRow};

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let base = config_file::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Fire {
            params,
            sweep,
            overlay,
            realtime,
            output,
        } => {
            let config = params.apply(base);
            if realtime {
                fire(config, &sweep, overlay, output, &mut RealtimeClock::default(), out)?;
            } else {
                fire(config, &sweep, overlay, output, &mut ImmediateClock::default(), out)?;
            }
            Ok(())
        }
        Command::Metrics { params, output } => metrics(params.apply(base), output, out),
        Command::Sample { params, at, output } => sample(params.apply(base), &at, output, out),
        Command::Config { params, out: path } => {
            let config = params.apply(base);
            config.validate()?;
            match path {
                Some(path) => {
                    config_file::save_config(&path, &config)?;
                    info!(path = %path.display(), "config written");
                }
                None => writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?,
            }
            Ok(())
        }
    }
}

/// Fire one shot per sweep angle (or one shot with `config` as is) and
/// render every tick. Each shot's config is validated on its own, so a sweep
/// may replace an out-of-range base angle.
pub fn fire<C: AnimationClock>(
    config: FiringConfig,
    sweep: &[f64],
    overlay: bool,
    output: OutputFormat,
    clock: &mut C,
    out: &mut impl Write,
) -> Result<Vec<SessionSnapshot>> {
    let shots: Vec<FiringConfig> = if sweep.is_empty() {
        vec![config]
    } else {
        sweep
            .iter()
            .map(|&angle_deg| FiringConfig { angle_deg, ..config })
            .collect()
    };
    for shot in &shots {
        shot.validate().with_context(|| {
            format!("invalid firing parameters at angle {} deg", shot.angle_deg)
        })?;
    }

    let mut session = SimulationSession::default();
    session.queue_command(SessionCommand::SetTrackOverlay { enabled: overlay });

    let mut finals = Vec::with_capacity(shots.len());
    for shot in shots {
        session.queue_commands([SessionCommand::SetConfig { config: shot }, SessionCommand::Fire]);
        let last = run_until_idle(&mut session, clock, |snapshot| {
            check_alerts(snapshot)?;
            match output {
                OutputFormat::Jsonl => render::write_jsonl(&mut *out, snapshot),
                OutputFormat::Text => {
                    if snapshot.animating || !snapshot.events.is_empty() {
                        if let Some(line) = render::render_frame(snapshot) {
                            writeln!(out, "{line}")?;
                        }
                    }
                    Ok(())
                }
            }
        })?;

        if output == OutputFormat::Text {
            writeln!(out, "{}", render::render_summary(&last))?;
            if let Some(metrics) = &last.metrics {
                writeln!(out, "{}", render::render_metrics(metrics))?;
            }
        }
        finals.push(last);
    }
    Ok(finals)
}

/// Rejected parameters surface as alerts; turn them into an error so the
/// process exits non-zero.
fn check_alerts(snapshot: &SessionSnapshot) -> Result<()> {
    if let Some(alert) = snapshot
        .alerts
        .iter()
        .find(|a| a.level == AlertLevel::Error)
    {
        bail!("{}", alert.message);
    }
    Ok(())
}

pub fn metrics(config: FiringConfig, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let derived = DerivedState::new(&config).context("invalid firing parameters")?;
    let view = Metrics::compute(&config, derived.flight_time).to_view();
    match output {
        OutputFormat::Text => {
            writeln!(
                out,
                "v0 = {} m/s, flight time = {} s\n",
                render::format_value(derived.initial_speed),
                render::format_value(derived.flight_time)
            )?;
            writeln!(out, "{}", render::render_metrics(&view))?;
        }
        OutputFormat::Jsonl => render::write_jsonl(out, &view)?,
    }
    Ok(())
}

pub fn sample(
    config: FiringConfig,
    times: &[f64],
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let plan = FlightPlan::new(config).context("invalid firing parameters")?;
    let rows: Vec<SampleRow> = times
        .iter()
        .map(|&t| {
            let (projectile, cannon) = plan.sample(t);
            SampleRow {
                t: t.clamp(0.0, plan.derived().flight_time),
                projectile,
                cannon,
            }
        })
        .collect();

    match output {
        OutputFormat::Text => write!(out, "{}", render::render_samples(&rows))?,
        OutputFormat::Jsonl => {
            for row in &rows {
                render::write_jsonl(out, row)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use cannonlab_core::enums::FlightPhase;

    use super::*;

    fn hitting_config() -> FiringConfig {
        FiringConfig {
            gunpowder_g: 100.0,
            efficiency_pct: 100.0,
            angle_deg: 30.0,
            target_x: 300.0,
            target_height: 200.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_fire_text_output() {
        let mut out = Vec::new();
        let mut clock = ImmediateClock::default();
        let finals = fire(
            hitting_config(),
            &[],
            false,
            OutputFormat::Text,
            &mut clock,
            &mut out,
        )
        .unwrap();

        assert_eq!(finals.len(), 1);
        assert_eq!(finals[0].phase, Some(FlightPhase::Hit));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Shot 1: HIT"));
        assert!(text.contains("hit at (300.00,"));
        assert!(text.contains("Velocities, m/s"));
        assert!(text.lines().any(|l| l.starts_with("shot 1 t=0.00")));
    }

    #[test]
    fn test_fire_jsonl_emits_snapshot_per_tick() {
        let unreachable = FiringConfig {
            target_x: 10_000.0,
            ..Default::default()
        };
        let mut out = Vec::new();
        let mut clock = ImmediateClock::default();
        fire(
            unreachable,
            &[],
            false,
            OutputFormat::Jsonl,
            &mut clock,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let snapshots: Vec<SessionSnapshot> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(snapshots.len() as u64, clock.ticks + 1);
        assert_eq!(snapshots.last().unwrap().phase, Some(FlightPhase::Missed));
    }

    #[test]
    fn test_sweep_with_overlay_accumulates_tracks() {
        let mut out = Vec::new();
        let mut clock = ImmediateClock::default();
        let finals = fire(
            FiringConfig::default(),
            &[30.0, 45.0, 60.0],
            true,
            OutputFormat::Text,
            &mut clock,
            &mut out,
        )
        .unwrap();

        assert_eq!(finals.len(), 3);
        assert_eq!(finals[2].shot, 3);
        assert_eq!(finals[2].config.angle_deg, 60.0);
        assert_eq!(finals[2].overlays.len(), 2);
    }

    #[test]
    fn test_invalid_sweep_angle_is_an_error() {
        let mut out = Vec::new();
        let mut clock = ImmediateClock::default();
        let err = fire(
            FiringConfig::default(),
            &[95.0],
            false,
            OutputFormat::Text,
            &mut clock,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("angle"));
        // Nothing is fired when any sweep angle is rejected
        assert!(out.is_empty());
    }

    #[test]
    fn test_sweep_overrides_invalid_base_angle() {
        let base = FiringConfig {
            angle_deg: 95.0,
            ..Default::default()
        };
        let mut out = Vec::new();
        let mut clock = ImmediateClock::default();
        let finals = fire(
            base,
            &[30.0, 45.0],
            false,
            OutputFormat::Text,
            &mut clock,
            &mut out,
        )
        .unwrap();

        assert_eq!(finals.len(), 2);
        assert_eq!(finals[0].config.angle_deg, 30.0);
        assert_eq!(finals[1].config.angle_deg, 45.0);

        // Without a sweep the base angle is still checked
        let err = fire(base, &[], false, OutputFormat::Text, &mut clock, &mut Vec::<u8>::new())
            .unwrap_err();
        assert!(err.to_string().contains("95"));
    }

    #[test]
    fn test_unarmable_shot_is_an_error() {
        let config = FiringConfig {
            cannon_mass_kg: 1e-310,
            ..Default::default()
        };
        let mut out = Vec::new();
        let mut clock = ImmediateClock::default();
        let err = fire(config, &[], false, OutputFormat::Text, &mut clock, &mut out).unwrap_err();
        assert!(err.to_string().contains("recoil_speed"));
        assert!(metrics(config, OutputFormat::Text, &mut out).is_err());
    }

    #[test]
    fn test_invalid_base_config_is_an_error() {
        let config = FiringConfig {
            projectile_mass_kg: 0.0,
            ..Default::default()
        };
        let mut out = Vec::new();
        assert!(metrics(config, OutputFormat::Text, &mut out).is_err());
        assert!(sample(config, &[1.0], OutputFormat::Text, &mut out).is_err());
    }

    #[test]
    fn test_metrics_text() {
        let mut out = Vec::new();
        metrics(FiringConfig::default(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("v0 = 67.53 m/s, flight time = 9.74 s"));
        assert!(text.contains("Friction C"));
        assert!(text.contains("1470.00"));
    }

    #[test]
    fn test_sample_clamps_to_flight() {
        let mut out = Vec::new();
        sample(
            FiringConfig::default(),
            &[0.0, 1.0, 100.0],
            OutputFormat::Jsonl,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["t"], 0.0);
        let last_t = rows[2]["t"].as_f64().unwrap();
        assert!(last_t < 100.0 && last_t > 2.0);
    }
}
