//! Projectile flight under quadratic air drag.
//!
//! Fixed-step explicit Euler integration of drag + gravity:
//!
//!   Fd = 0.5 · ρ · v² · Cd · A
//!   a_drag = Fd / m, split along the velocity direction cosines
//!
//! Velocity is updated first, then position with the new velocity.
//! Integration stops at the first step that ends below ground; the
//! ground crossing itself is not interpolated. Recoil is unaffected by drag.

use glam::DVec2;

use cannonlab_core::config::{DragParams, FiringConfig};
use cannonlab_core::constants::DRAG_DT;

use crate::kinematics;

/// Drag force magnitude (N) at speed `v`.
pub fn drag_force(params: &DragParams, v: f64) -> f64 {
    0.5 * params.air_density * v * v * params.drag_coefficient * params.cross_section_area
}

/// Drag deceleration components for velocity `vel`. Zero when at rest.
pub fn drag_deceleration(params: &DragParams, mass: f64, vel: DVec2) -> DVec2 {
    let v = vel.length();
    if v == 0.0 {
        return DVec2::ZERO;
    }
    let fd = drag_force(params, v);
    DVec2::new(fd * (vel.x / v) / mass, fd * (vel.y / v) / mass)
}

/// Incremental Euler integrator. `advance_to` only moves forward in time,
/// so a flight plan can sample increasing times without re-integrating
/// from launch each frame.
#[derive(Debug, Clone)]
pub struct DragIntegrator {
    params: DragParams,
    mass: f64,
    gravity: f64,
    dt: f64,
    t: f64,
    position: DVec2,
    velocity: DVec2,
    grounded: bool,
}

impl DragIntegrator {
    pub fn new(config: &FiringConfig) -> Self {
        Self::with_step(config, DRAG_DT)
    }

    pub fn with_step(config: &FiringConfig, dt: f64) -> Self {
        Self {
            params: config.drag,
            mass: config.projectile_mass_kg,
            gravity: config.physics.gravity,
            dt,
            t: 0.0,
            position: config.start,
            velocity: kinematics::launch_velocity(config),
            grounded: false,
        }
    }

    /// Integrated time so far.
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// True once a step has ended below ground. No further steps are taken.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Integrate up to `t` (whole steps, then one partial step for the
    /// remainder) and return the position. Earlier times are ignored.
    pub fn advance_to(&mut self, t: f64) -> DVec2 {
        while !self.grounded && t - self.t > 1e-9 {
            let h = self.dt.min(t - self.t);
            self.step(h);
        }
        self.position
    }

    fn step(&mut self, h: f64) {
        let a = drag_deceleration(&self.params, self.mass, self.velocity);
        self.velocity.x -= a.x * h;
        self.velocity.y -= (self.gravity + a.y) * h;
        self.position += self.velocity * h;
        self.t += h;
        if self.position.y < 0.0 {
            self.grounded = true;
        }
    }
}

/// Projectile position at `t` under drag, integrated from launch.
pub fn compute_projectile_position_drag(config: &FiringConfig, t: f64) -> DVec2 {
    DragIntegrator::new(config).advance_to(t)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::kinematics::{compute_flight_time, compute_projectile_position};

    fn drag_config() -> FiringConfig {
        FiringConfig {
            gunpowder_g: 100.0,
            efficiency_pct: 60.0,
            ..Default::default()
        }
        .with_drag(true)
    }

    #[test]
    fn drag_force_formula() {
        let params = DragParams::default();
        // 0.5 * 1.225 * 100 * 0.47 * 0.05
        assert_relative_eq!(drag_force(&params, 10.0), 1.439375, epsilon = 1e-12);
    }

    #[test]
    fn zero_velocity_has_no_drag() {
        let a = drag_deceleration(&DragParams::default(), 5.0, DVec2::ZERO);
        assert_eq!(a, DVec2::ZERO);
    }

    #[test]
    fn deceleration_opposes_motion() {
        let a = drag_deceleration(&DragParams::default(), 5.0, DVec2::new(30.0, -40.0));
        assert!(a.x > 0.0);
        assert!(a.y < 0.0);
        // magnitude = Fd(50) / m
        assert_relative_eq!(
            a.length(),
            drag_force(&DragParams::default(), 50.0) / 5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn starts_at_muzzle() {
        let config = drag_config();
        assert_eq!(compute_projectile_position_drag(&config, 0.0), config.start);
    }

    #[test]
    fn one_step_matches_hand_computation() {
        let config = drag_config();
        let v0 = kinematics::launch_velocity(&config);
        let a = drag_deceleration(&config.drag, config.projectile_mass_kg, v0);
        let vx = v0.x - a.x * 0.1;
        let vy = v0.y - (config.physics.gravity + a.y) * 0.1;

        let p = compute_projectile_position_drag(&config, 0.1);
        assert_relative_eq!(p.x, vx * 0.1, epsilon = 1e-12);
        assert_relative_eq!(p.y, vy * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn zero_drag_stays_close_to_closed_form() {
        let mut config = drag_config();
        config.drag.drag_coefficient = 0.0;
        let t = 2.0;
        let euler = compute_projectile_position_drag(&config, t);
        let exact = compute_projectile_position(&config, t);
        assert_relative_eq!(euler.x, exact.x, epsilon = 1e-9);
        // Semi-implicit Euler drops g·dt·t/2 below the parabola
        assert_relative_eq!(exact.y - euler.y, 0.5 * 9.8 * 0.1 * t, epsilon = 1e-9);
    }

    #[test]
    fn drag_shortens_range() {
        let config = drag_config();
        let t = compute_flight_time(&config);
        let with_drag = compute_projectile_position_drag(&config, t);
        let without = compute_projectile_position(&config, t);
        assert!(with_drag.x < without.x);
    }

    #[test]
    fn integration_halts_on_ground_contact() {
        let config = drag_config();
        let mut integrator = DragIntegrator::new(&config);
        let landed = integrator.advance_to(1_000.0);
        assert!(integrator.is_grounded());
        assert!(landed.y < 0.0);
        assert!(integrator.time() < 1_000.0);

        // No further movement once grounded
        assert_eq!(integrator.advance_to(2_000.0), landed);
    }

    #[test]
    fn incremental_matches_from_scratch() {
        let config = drag_config();
        let mut integrator = DragIntegrator::new(&config);
        for k in 1..=20 {
            let t = k as f64 * 0.1;
            let incremental = integrator.advance_to(t);
            let fresh = compute_projectile_position_drag(&config, t);
            assert_relative_eq!(incremental.x, fresh.x, epsilon = 1e-9);
            assert_relative_eq!(incremental.y, fresh.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn partial_step_covers_remainder() {
        let config = drag_config();
        let mut integrator = DragIntegrator::new(&config);
        integrator.advance_to(0.25);
        assert_relative_eq!(integrator.time(), 0.25, epsilon = 1e-12);
    }
}
