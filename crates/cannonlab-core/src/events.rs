//! Events emitted by the session for UI feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AlertLevel, FlightPhase};

/// Shot lifecycle notifications, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShotEvent {
    /// A new flight plan was armed.
    ShotFired {
        shot: u32,
        flight_time: f64,
        hit_predicted: bool,
    },
    /// The shot was stopped before reaching a terminal phase.
    ShotCancelled { shot: u32, at_secs: f64 },
    /// The projectile reached the target. Emitted at most once per shot.
    HitRegistered { shot: u32, point: DVec2 },
    /// The shot reached a terminal phase.
    ShotFinished { shot: u32, phase: FlightPhase },
    /// A path was moved into the overlay archive.
    TrackArchived { archived: usize },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
