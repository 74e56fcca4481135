//! Impulses, forces and velocities shown on the summary charts.

use cannonlab_core::config::FiringConfig;
use cannonlab_core::enums::{Body, ForceKind};
use cannonlab_core::state::MetricsView;

use crate::kinematics::{initial_speed, launch_velocity, recoil_speed};

/// Friction force on the carriage: μ · M · g / r_wheel.
pub fn force_friction(config: &FiringConfig) -> f64 {
    let p = &config.physics;
    p.friction_coefficient * config.cannon_mass_kg * p.gravity / p.wheel_radius
}

/// Weight of a body.
pub fn force_gravity(config: &FiringConfig, body: Body) -> f64 {
    let mass = match body {
        Body::Projectile => config.projectile_mass_kg,
        Body::Cannon => config.cannon_mass_kg,
    };
    mass * config.physics.gravity
}

pub fn force(config: &FiringConfig, kind: ForceKind) -> f64 {
    match kind {
        ForceKind::Friction => force_friction(config),
        ForceKind::Gravity(body) => force_gravity(config, body),
    }
}

/// Momentum of the projectile leaving the muzzle: m · v0.
pub fn impulse_projectile(config: &FiringConfig) -> f64 {
    config.projectile_mass_kg * initial_speed(config)
}

/// Cannon impulse at the instant of firing, before friction acts.
pub fn impulse_cannon_initial(config: &FiringConfig) -> f64 {
    impulse_projectile(config)
}

/// Cannon impulse after `t` seconds of friction. Clamped at zero.
pub fn impulse_cannon_at(config: &FiringConfig, t: f64) -> f64 {
    (impulse_cannon_initial(config) - force_friction(config) * t).max(0.0)
}

/// Per-shot chart values, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Projectile, cannon at firing, cannon at the end of the flight.
    pub impulses: [f64; 3],
    /// Friction on the cannon, cannon weight, projectile weight.
    pub forces: [f64; 3],
    /// Muzzle speed, its horizontal component, initial recoil speed.
    pub velocities: [f64; 3],
}

impl Metrics {
    pub fn compute(config: &FiringConfig, flight_time: f64) -> Self {
        Self {
            impulses: [
                impulse_projectile(config),
                impulse_cannon_initial(config),
                impulse_cannon_at(config, flight_time),
            ],
            forces: [
                force(config, ForceKind::Friction),
                force(config, ForceKind::Gravity(Body::Cannon)),
                force(config, ForceKind::Gravity(Body::Projectile)),
            ],
            velocities: [
                initial_speed(config),
                launch_velocity(config).x,
                recoil_speed(config),
            ],
        }
    }

    pub fn to_view(&self) -> MetricsView {
        MetricsView::new(self.impulses, self.forces, self.velocities)
    }
}
