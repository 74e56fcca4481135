//! One shot, from arming to its terminal phase.
//!
//! A `FlightPlan` is built from a config snapshot, decides the hit before any
//! frame is produced, and is then stepped forward by `advance(dt)`:
//!
//!   Pending → InFlight → Hit | Missed | Grounded
//!
//! The first `advance` emits the frame at t = 0. Later frames move by `dt`,
//! and the last one is clamped to the flight time so an analytic hit is
//! always reached in drag-free mode.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use cannonlab_core::config::FiringConfig;
use cannonlab_core::constants::FRAME_DT;
use cannonlab_core::enums::{Body, FlightPhase};
use cannonlab_core::error::ConfigError;

use crate::derived::DerivedState;
use crate::drag::{compute_projectile_position_drag, DragIntegrator};
use crate::kinematics;
use crate::metrics::Metrics;
use crate::trajectory::Trajectory;

/// Positions of both bodies at one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub t: f64,
    pub projectile: DVec2,
    pub cannon: DVec2,
    /// Set on the single frame where the hit registers.
    pub hit: Option<DVec2>,
}

#[derive(Debug, Clone)]
pub struct FlightPlan {
    config: FiringConfig,
    derived: DerivedState,
    metrics: Metrics,
    phase: FlightPhase,
    t: f64,
    drag: Option<DragIntegrator>,
    projectile: Trajectory,
    cannon: Trajectory,
    /// Cleared once the hit marker has been emitted.
    hit_armed: bool,
    hit_marker: Option<DVec2>,
}

impl FlightPlan {
    pub fn new(config: FiringConfig) -> Result<Self, ConfigError> {
        let derived = DerivedState::new(&config)?;
        let metrics = Metrics::compute(&config, derived.flight_time);
        let drag = config.drag.enabled.then(|| DragIntegrator::new(&config));

        Ok(Self {
            config,
            derived,
            metrics,
            phase: FlightPhase::Pending,
            t: 0.0,
            drag,
            projectile: Trajectory::new(Body::Projectile),
            cannon: Trajectory::new(Body::Cannon),
            hit_armed: derived.hit.hit,
            hit_marker: None,
        })
    }

    pub fn config(&self) -> &FiringConfig {
        &self.config
    }

    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Simulated time of the last emitted frame.
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    pub fn projectile_track(&self) -> &Trajectory {
        &self.projectile
    }

    pub fn cannon_track(&self) -> &Trajectory {
        &self.cannon
    }

    pub fn trajectory(&self, body: Body) -> &Trajectory {
        match body {
            Body::Projectile => &self.projectile,
            Body::Cannon => &self.cannon,
        }
    }

    pub fn hit_marker(&self) -> Option<DVec2> {
        self.hit_marker
    }

    /// Positions of both bodies at `t`, clamped to `[0, flight_time]`.
    /// Independent of the animation state.
    pub fn sample(&self, t: f64) -> (DVec2, DVec2) {
        let t = t.clamp(0.0, self.derived.flight_time);
        let projectile = if self.config.drag.enabled {
            compute_projectile_position_drag(&self.config, t)
        } else {
            kinematics::compute_projectile_position(&self.config, t)
        };
        (projectile, kinematics::compute_position(Body::Cannon, &self.config, t))
    }

    /// Step the animation and return the new frame. Terminal plans and
    /// non-positive steps produce nothing.
    pub fn advance(&mut self, dt: f64) -> Option<Frame> {
        if self.phase.is_terminal() {
            return None;
        }

        if self.phase == FlightPhase::Pending {
            self.phase = FlightPhase::InFlight;
            self.t = 0.0;
        } else if dt > 0.0 {
            self.t = (self.t + dt).min(self.derived.flight_time);
        } else {
            return None;
        }

        let projectile = match self.drag.as_mut() {
            Some(integrator) => integrator.advance_to(self.t),
            None => kinematics::compute_projectile_position(&self.config, self.t),
        };
        let cannon = kinematics::compute_position(Body::Cannon, &self.config, self.t);
        self.projectile.push(self.t, projectile);
        self.cannon.push(self.t, cannon);

        let mut hit = None;
        if self.hit_armed && projectile.x >= self.config.target_x {
            self.hit_armed = false;
            // The marker sits on the analytic crossing, not the sampled point
            hit = self.derived.hit.point;
            self.hit_marker = hit;
            self.phase = FlightPhase::Hit;
        } else if self.drag.as_ref().is_some_and(DragIntegrator::is_grounded) {
            self.phase = FlightPhase::Grounded;
        } else if self.t >= self.derived.flight_time {
            self.phase = FlightPhase::Missed;
        }

        Some(Frame {
            t: self.t,
            projectile,
            cannon,
            hit,
        })
    }

    /// Advance at the standard frame step until the plan is terminal.
    pub fn run_to_completion(&mut self) -> Vec<Frame> {
        std::iter::from_fn(|| self.advance(FRAME_DT)).collect()
    }
}
