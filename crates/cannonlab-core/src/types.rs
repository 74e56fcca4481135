//! Fundamental simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One sampled point of a trajectory: elapsed shot time and position (m).
/// x grows downrange, y is height above ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub t: f64,
    pub position: DVec2,
}

impl TrackPoint {
    pub fn new(t: f64, position: DVec2) -> Self {
        Self { t, position }
    }
}

/// Analytic hit decision for a shot, made before the animation starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HitOutcome {
    pub hit: bool,
    /// Where the projectile crosses the target plane, when it gets there at all.
    pub point: Option<DVec2>,
    /// The crossing lies below y = 0. Still counted as a hit.
    pub below_ground: bool,
}

impl HitOutcome {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Session tick tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Wall-clock equivalent of the ticks run so far (seconds).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the animation timer rate.
    pub fn dt(&self) -> f64 {
        crate::constants::TICK_INTERVAL_SECS
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
