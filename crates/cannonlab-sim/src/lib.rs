//! Physics core for CannonLab.
//!
//! Closed-form and drag-integrated trajectories, per-shot metrics, the
//! flight plan state machine, and the `SimulationSession` that owns them
//! and produces `SessionSnapshot`s for the presentation layer.

pub mod derived;
pub mod drag;
pub mod flight_plan;
pub mod kinematics;
pub mod metrics;
pub mod session;
pub mod snapshot;
pub mod trajectory;

pub use cannonlab_core as core;
pub use flight_plan::{FlightPlan, Frame};
pub use session::SimulationSession;
