//! Closed-form kinematics for the projectile and the recoiling cannon.
//!
//! All functions are pure in `(config, t)` and assume the config has been
//! validated (angle in (0°, 90°), positive masses, radius and friction).

use glam::DVec2;

use cannonlab_core::config::FiringConfig;
use cannonlab_core::enums::Body;
use cannonlab_core::types::HitOutcome;

/// Muzzle speed from the energy balance:
/// v0 = sqrt(2 · efficiency · E · charge / (100 · m)).
pub fn initial_speed(config: &FiringConfig) -> f64 {
    let energy = config.efficiency_pct
        * config.physics.propellant_energy_density
        * config.gunpowder_g
        / 100.0;
    (2.0 * energy / config.projectile_mass_kg).sqrt()
}

/// Muzzle velocity vector (m/s).
pub fn launch_velocity(config: &FiringConfig) -> DVec2 {
    let (sin, cos) = config.angle_rad().sin_cos();
    initial_speed(config) * DVec2::new(cos, sin)
}

/// Projectile position at `t` seconds without air resistance.
pub fn compute_projectile_position(config: &FiringConfig, t: f64) -> DVec2 {
    let v = launch_velocity(config);
    let g = config.physics.gravity;
    DVec2::new(
        config.start.x + v.x * t,
        config.start.y + v.y * t - 0.5 * g * t * t,
    )
}

/// Initial backward speed of the cannon (momentum balance along x).
pub fn recoil_speed(config: &FiringConfig) -> f64 {
    launch_velocity(config).x * (config.projectile_mass_kg / config.cannon_mass_kg)
}

/// Deceleration of the carriage under wheel friction: F_friction / M.
pub fn recoil_deceleration(config: &FiringConfig) -> f64 {
    crate::metrics::force_friction(config) / config.cannon_mass_kg
}

/// Distance the cannon rolls back before stopping.
pub fn recoil_stop_distance(config: &FiringConfig) -> f64 {
    let v = recoil_speed(config);
    v * v / (2.0 * recoil_deceleration(config))
}

/// Cannon position at `t` seconds. Decelerates until its speed would reach
/// zero, then stays at the stopping point; it never rolls forward again.
pub fn compute_cannon_position(config: &FiringConfig, t: f64) -> DVec2 {
    let v = recoil_speed(config);
    let a = recoil_deceleration(config);
    let x = if v > a * t {
        config.start.x - v * t + 0.5 * a * t * t
    } else {
        config.start.x - recoil_stop_distance(config)
    };
    DVec2::new(x, config.start.y)
}

/// Closed-form position of either body.
pub fn compute_position(body: Body, config: &FiringConfig, t: f64) -> DVec2 {
    match body {
        Body::Projectile => compute_projectile_position(config, t),
        Body::Cannon => compute_cannon_position(config, t),
    }
}

/// Time for the drag-free projectile to come back to y = 0 from its launch
/// height. Used as the animation horizon whatever the target position.
pub fn compute_flight_time(config: &FiringConfig) -> f64 {
    let vy = launch_velocity(config).y;
    let g = config.physics.gravity;
    (vy + (vy * vy + 2.0 * g * config.start.y).sqrt()) / g
}

/// Analytic hit test against the target plane at `target_x`.
///
/// The projectile must reach `target_x` within the flight time, and cross it
/// at or below `target_height`. There is no check that the crossing is above
/// ground; such hits are flagged with `below_ground`.
pub fn compute_hit(config: &FiringConfig) -> HitOutcome {
    let flight_time = compute_flight_time(config);
    if compute_projectile_position(config, flight_time).x < config.target_x {
        return HitOutcome::miss();
    }

    let t_hit = (config.target_x - config.start.x) / launch_velocity(config).x;
    let y_hit = compute_projectile_position(config, t_hit).y;
    let point = DVec2::new(config.target_x, y_hit);

    HitOutcome {
        hit: y_hit <= config.target_height,
        point: Some(point),
        below_ground: y_hit < 0.0,
    }
}
