//! Builds the `SessionSnapshot` handed to the presentation layer.
//!
//! Read-only: never modifies the plan or the archive.

use cannonlab_core::config::FiringConfig;
use cannonlab_core::events::{Alert, ShotEvent};
use cannonlab_core::state::{SessionSnapshot, TargetView, TrackView};
use cannonlab_core::types::SimTime;

use crate::flight_plan::FlightPlan;
use crate::trajectory::TrajectoryArchive;

pub struct SnapshotInput<'a> {
    pub time: &'a SimTime,
    pub shot: u32,
    pub animating: bool,
    pub config: &'a FiringConfig,
    pub plan: Option<&'a FlightPlan>,
    pub archive: &'a TrajectoryArchive,
    pub show_overlays: bool,
    pub events: Vec<ShotEvent>,
    pub alerts: Vec<Alert>,
}

pub fn build_snapshot(input: SnapshotInput<'_>) -> SessionSnapshot {
    let plan = input.plan;
    // The target drawn is the one the current shot was fired at
    let target_config = plan.map_or(input.config, FlightPlan::config);

    SessionSnapshot {
        time: *input.time,
        shot: input.shot,
        phase: plan.map(FlightPlan::phase),
        animating: input.animating,
        shot_time: plan.map_or(0.0, FlightPlan::elapsed),
        config: *input.config,
        target: TargetView {
            x: target_config.target_x,
            height: target_config.target_height,
        },
        tracks: plan.map(build_tracks).unwrap_or_default(),
        hit: plan.map(|p| p.derived().hit),
        hit_marker: plan.and_then(FlightPlan::hit_marker),
        metrics: plan.map(|p| p.metrics().to_view()),
        overlays: build_overlays(input.archive, input.show_overlays),
        events: input.events,
        alerts: input.alerts,
    }
}

fn build_tracks(plan: &FlightPlan) -> Vec<TrackView> {
    vec![
        plan.projectile_track().to_view(),
        plan.cannon_track().to_view(),
    ]
}

fn build_overlays(archive: &TrajectoryArchive, show: bool) -> Vec<TrackView> {
    if !show {
        return Vec::new();
    }
    archive.all().iter().map(|t| t.to_view()).collect()
}
