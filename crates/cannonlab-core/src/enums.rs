//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Config captured and hit decided; no frame rendered yet.
    #[default]
    Pending,
    /// Animation clock is advancing.
    InFlight,
    /// Projectile crossed the target plane below the target's top edge.
    Hit,
    /// Flight time elapsed without a hit.
    Missed,
    /// Drag integration stopped early on ground contact.
    Grounded,
}

impl FlightPhase {
    /// Whether no further frames will be produced.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Hit | Self::Missed | Self::Grounded)
    }
}

/// A moving body in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Projectile,
    Cannon,
}

/// Forces shown on the force chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceKind {
    /// Ground friction on the cannon carriage.
    Friction,
    /// Weight of the given body.
    Gravity(Body),
}

/// Severity for UI alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Error,
}
