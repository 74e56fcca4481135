//! Session state snapshot: everything the presentation layer draws each tick.

use serde::{Deserialize, Serialize};

use crate::config::FiringConfig;
use crate::constants::*;
use crate::enums::{Body, FlightPhase};
use crate::events::{Alert, ShotEvent};
use crate::types::{HitOutcome, SimTime, TrackPoint};

/// Complete session state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    /// Number of shots fired so far (the current shot's id).
    pub shot: u32,
    /// `None` before the first shot.
    pub phase: Option<FlightPhase>,
    /// Whether the animation timer is running.
    pub animating: bool,
    /// Elapsed simulated time of the current shot (seconds).
    pub shot_time: f64,
    pub config: FiringConfig,
    pub target: TargetView,
    pub tracks: Vec<TrackView>,
    /// Analytic hit decision for the current shot.
    pub hit: Option<HitOutcome>,
    /// Marker drawn once the projectile reaches the target.
    pub hit_marker: Option<glam::DVec2>,
    pub metrics: Option<MetricsView>,
    /// Archived projectile paths, present only while overlays are enabled.
    pub overlays: Vec<TrackView>,
    pub events: Vec<ShotEvent>,
    pub alerts: Vec<Alert>,
}

/// Vertical target segment from the ground to `height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub x: f64,
    pub height: f64,
}

/// A drawable trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackView {
    pub body: Body,
    pub points: Vec<TrackPoint>,
}

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A three-bar chart. Labels are positional and never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    pub title: String,
    pub bars: [Bar; 3],
}

impl BarGroup {
    pub fn new(title: &str, labels: [&str; 3], values: [f64; 3]) -> Self {
        let [a, b, c] = labels;
        let [va, vb, vc] = values;
        let bar = |label: &str, value: f64| Bar {
            label: label.to_string(),
            value,
        };
        Self {
            title: title.to_string(),
            bars: [bar(a, va), bar(b, vb), bar(c, vc)],
        }
    }

    pub fn values(&self) -> [f64; 3] {
        [self.bars[0].value, self.bars[1].value, self.bars[2].value]
    }
}

/// The three summary charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsView {
    pub impulses: BarGroup,
    pub forces: BarGroup,
    pub velocities: BarGroup,
}

impl MetricsView {
    pub fn new(impulses: [f64; 3], forces: [f64; 3], velocities: [f64; 3]) -> Self {
        Self {
            impulses: BarGroup::new(IMPULSE_TITLE, IMPULSE_LABELS, impulses),
            forces: BarGroup::new(FORCE_TITLE, FORCE_LABELS, forces),
            velocities: BarGroup::new(VELOCITY_TITLE, VELOCITY_LABELS, velocities),
        }
    }

    /// Charts in display order.
    pub fn groups(&self) -> [&BarGroup; 3] {
        [&self.impulses, &self.forces, &self.velocities]
    }
}
