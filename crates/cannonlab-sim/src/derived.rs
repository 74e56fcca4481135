//! Per-shot quantities computed once from a validated config.

use serde::{Deserialize, Serialize};

use cannonlab_core::config::FiringConfig;
use cannonlab_core::error::ConfigError;
use cannonlab_core::types::HitOutcome;

use crate::kinematics;
use crate::metrics::{self, Metrics};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedState {
    pub angle_rad: f64,
    /// Muzzle speed (m/s).
    pub initial_speed: f64,
    /// Drag-free time until the projectile is back at ground level.
    pub flight_time: f64,
    pub hit: HitOutcome,
}

impl DerivedState {
    /// Validate `config` and derive the shot quantities from it.
    ///
    /// Fields that pass validation can still overflow or underflow once
    /// combined (a near-zero cannon mass, a near-flat barrel). Every quantity
    /// used by the animation and charts must be finite, and the flight time
    /// positive.
    pub fn new(config: &FiringConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let initial_speed = kinematics::initial_speed(config);
        let flight_time = kinematics::compute_flight_time(config);
        let chart = Metrics::compute(config, flight_time);
        let quantities = [
            ("initial_speed", initial_speed),
            ("flight_time", flight_time),
            ("recoil_speed", kinematics::recoil_speed(config)),
            ("recoil_deceleration", kinematics::recoil_deceleration(config)),
            ("recoil_stop_distance", kinematics::recoil_stop_distance(config)),
            ("force_friction", metrics::force_friction(config)),
        ];
        let chart_values = chart
            .impulses
            .iter()
            .chain(&chart.forces)
            .chain(&chart.velocities)
            .map(|&value| ("chart value", value));
        if let Some((field, value)) = quantities
            .into_iter()
            .chain(chart_values)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConfigError::NonFinite { field, value });
        }
        if flight_time <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "flight_time",
                value: flight_time,
            });
        }

        Ok(Self {
            angle_rad: config.angle_rad(),
            initial_speed,
            flight_time,
            hit: kinematics::compute_hit(config),
        })
    }
}
