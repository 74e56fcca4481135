//! Firing configuration: the immutable parameter snapshot for one shot.
//!
//! Every struct here deserializes with `#[serde(default)]`, so a partial
//! JSON document only needs the fields it changes.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Physical constants of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Energy per gram of propellant (J/g).
    pub propellant_energy_density: f64,
    /// Carriage wheel radius (m).
    pub wheel_radius: f64,
    /// Carriage friction coefficient.
    pub friction_coefficient: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            propellant_energy_density: PROPELLANT_ENERGY_DENSITY,
            wheel_radius: WHEEL_RADIUS,
            friction_coefficient: FRICTION_COEFFICIENT,
        }
    }
}

/// Quadratic air drag on the projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragParams {
    /// Integrate the projectile under drag instead of the closed form.
    pub enabled: bool,
    /// Air density (kg/m³).
    pub air_density: f64,
    /// Drag coefficient.
    pub drag_coefficient: f64,
    /// Cross-sectional area (m²).
    pub cross_section_area: f64,
}

impl Default for DragParams {
    fn default() -> Self {
        Self {
            enabled: false,
            air_density: AIR_DENSITY,
            drag_coefficient: DRAG_COEFFICIENT,
            cross_section_area: CROSS_SECTION_AREA,
        }
    }
}

/// Parameters of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiringConfig {
    /// Barrel elevation (degrees), strictly between 0 and 90.
    pub angle_deg: f64,
    /// Propellant charge (g).
    pub gunpowder_g: f64,
    /// Share of propellant energy turned into projectile kinetic energy (%).
    pub efficiency_pct: f64,
    pub projectile_mass_kg: f64,
    pub cannon_mass_kg: f64,
    /// Muzzle position (m).
    pub start: DVec2,
    /// Downrange position of the target plane (m).
    pub target_x: f64,
    /// Height of the target's top edge (m).
    pub target_height: f64,
    pub physics: PhysicalConstants,
    pub drag: DragParams,
}

impl Default for FiringConfig {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            gunpowder_g: DEFAULT_GUNPOWDER_G,
            efficiency_pct: DEFAULT_EFFICIENCY_PCT,
            projectile_mass_kg: DEFAULT_PROJECTILE_MASS_KG,
            cannon_mass_kg: DEFAULT_CANNON_MASS_KG,
            start: DVec2::ZERO,
            target_x: DEFAULT_TARGET_X,
            target_height: DEFAULT_TARGET_HEIGHT,
            physics: PhysicalConstants::default(),
            drag: DragParams::default(),
        }
    }
}

impl FiringConfig {
    /// Firing angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Copy of this config with drag integration switched on or off.
    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag.enabled = enabled;
        self
    }

    /// Reject configurations that would divide by zero or produce
    /// non-finite trajectories.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_finite()?;

        if !(self.angle_deg > 0.0 && self.angle_deg < 90.0) {
            return Err(ConfigError::AngleOutOfRange {
                angle_deg: self.angle_deg,
            });
        }

        positive("gunpowder_g", self.gunpowder_g)?;
        positive("efficiency_pct", self.efficiency_pct)?;
        if self.efficiency_pct > 100.0 {
            return Err(ConfigError::EfficiencyTooHigh {
                efficiency_pct: self.efficiency_pct,
            });
        }
        positive("projectile_mass_kg", self.projectile_mass_kg)?;
        positive("cannon_mass_kg", self.cannon_mass_kg)?;

        let p = &self.physics;
        positive("gravity", p.gravity)?;
        positive("propellant_energy_density", p.propellant_energy_density)?;
        positive("wheel_radius", p.wheel_radius)?;
        positive("friction_coefficient", p.friction_coefficient)?;

        if self.start.y < 0.0 {
            return Err(ConfigError::StartBelowGround { y0: self.start.y });
        }

        if self.drag.enabled {
            let d = &self.drag;
            non_negative_drag("air_density", d.air_density)?;
            non_negative_drag("drag_coefficient", d.drag_coefficient)?;
            non_negative_drag("cross_section_area", d.cross_section_area)?;
        }

        Ok(())
    }

    fn check_finite(&self) -> Result<(), ConfigError> {
        let fields = [
            ("angle_deg", self.angle_deg),
            ("gunpowder_g", self.gunpowder_g),
            ("efficiency_pct", self.efficiency_pct),
            ("projectile_mass_kg", self.projectile_mass_kg),
            ("cannon_mass_kg", self.cannon_mass_kg),
            ("start.x", self.start.x),
            ("start.y", self.start.y),
            ("target_x", self.target_x),
            ("target_height", self.target_height),
            ("gravity", self.physics.gravity),
            (
                "propellant_energy_density",
                self.physics.propellant_energy_density,
            ),
            ("wheel_radius", self.physics.wheel_radius),
            ("friction_coefficient", self.physics.friction_coefficient),
            ("air_density", self.drag.air_density),
            ("drag_coefficient", self.drag.drag_coefficient),
            ("cross_section_area", self.drag.cross_section_area),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative_drag(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeDragParameter { field, value })
    }
}
