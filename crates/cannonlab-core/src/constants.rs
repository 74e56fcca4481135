//! Simulation constants and default physical parameters.

// --- Timing ---

/// Simulated seconds covered by one animation frame.
pub const FRAME_DT: f64 = 0.1;

/// Wall-clock interval between animation ticks (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 20;

/// Wall-clock seconds per animation tick.
pub const TICK_INTERVAL_SECS: f64 = TICK_INTERVAL_MS as f64 / 1000.0;

// --- Physical constants ---

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Chemical energy released per gram of propellant (J/g).
pub const PROPELLANT_ENERGY_DENSITY: f64 = 3800.0;

/// Radius of the cannon carriage wheels (m).
pub const WHEEL_RADIUS: f64 = 0.3;

/// Rolling friction coefficient of the carriage (dimensionless).
pub const FRICTION_COEFFICIENT: f64 = 0.45;

// --- Air resistance ---

/// Sea-level air density (kg/m³).
pub const AIR_DENSITY: f64 = 1.225;

/// Drag coefficient of a spherical projectile (dimensionless).
pub const DRAG_COEFFICIENT: f64 = 0.47;

/// Projectile cross-sectional area (m²).
pub const CROSS_SECTION_AREA: f64 = 0.05;

/// Fixed Euler step for drag integration (s).
pub const DRAG_DT: f64 = 0.1;

// --- Default firing parameters ---

pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_GUNPOWDER_G: f64 = 10.0;
pub const DEFAULT_EFFICIENCY_PCT: f64 = 30.0;
pub const DEFAULT_PROJECTILE_MASS_KG: f64 = 5.0;
pub const DEFAULT_CANNON_MASS_KG: f64 = 100.0;
pub const DEFAULT_TARGET_X: f64 = 450.0;
pub const DEFAULT_TARGET_HEIGHT: f64 = 20.0;

// --- Chart labels ---

/// Bar labels for the impulse chart, in display order.
pub const IMPULSE_LABELS: [&str; 3] = ["Projectile", "Cannon (1)", "Cannon (2)"];

/// Bar labels for the force chart, in display order.
pub const FORCE_LABELS: [&str; 3] = ["Friction C", "Reaction C", "Gravity P"];

/// Bar labels for the velocity chart, in display order.
pub const VELOCITY_LABELS: [&str; 3] = ["Initial P", "X-coordinate P", "Initial C"];

/// Chart titles with units.
pub const IMPULSE_TITLE: &str = "Impulses, kg*m/s";
pub const FORCE_TITLE: &str = "Forces, N";
pub const VELOCITY_TITLE: &str = "Velocities, m/s";
