//! Commands sent from the presentation layer to the session.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::FiringConfig;

/// All possible user actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Replace the firing parameters (the parameter dialog's submit).
    /// Rejected configs leave the previous one in place.
    SetConfig { config: FiringConfig },
    /// Fire a shot with the current parameters, cancelling any shot in flight.
    Fire,
    /// Stop the running animation, keeping what was drawn so far.
    Cancel,
    /// Keep previous projectile paths as overlays when firing again.
    SetTrackOverlay { enabled: bool },
    /// Archive the current projectile path now.
    SaveTrack,
    /// Drop every archived path.
    ClearArchive,
}
