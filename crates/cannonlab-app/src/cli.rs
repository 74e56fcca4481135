//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cannonlab_core::config::FiringConfig;

#[derive(Debug, Parser)]
#[command(name = "cannonlab")]
#[command(version)]
#[command(about = "Cannon recoil and projectile flight simulator", long_about = None)]
pub struct Cli {
    /// JSON file with firing parameters; missing fields use defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fire one or more shots and animate them
    Fire {
        #[command(flatten)]
        params: ParamArgs,

        /// Fire one shot per angle (degrees), comma separated
        #[arg(long, value_delimiter = ',')]
        sweep: Vec<f64>,

        /// Keep previous projectile paths as overlays
        #[arg(long)]
        overlay: bool,

        /// Pace ticks at the 20 ms animation interval
        #[arg(long)]
        realtime: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the impulse, force and velocity charts without animating
    Metrics {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print projectile and cannon positions at the given times
    Sample {
        #[command(flatten)]
        params: ParamArgs,

        /// Times in seconds, comma separated
        #[arg(short = 't', long, value_delimiter = ',', required = true)]
        at: Vec<f64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the effective firing parameters as JSON
    Config {
        #[command(flatten)]
        params: ParamArgs,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary and bar charts
    Text,
    /// One JSON document per line
    Jsonl,
}

/// Per-field overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Barrel elevation (degrees)
    #[arg(short, long)]
    pub angle: Option<f64>,

    /// Propellant charge (g)
    #[arg(short, long)]
    pub gunpowder: Option<f64>,

    /// Share of propellant energy converted to projectile motion (%)
    #[arg(short, long)]
    pub efficiency: Option<f64>,

    /// Projectile mass (kg)
    #[arg(long)]
    pub projectile_mass: Option<f64>,

    /// Cannon mass (kg)
    #[arg(long)]
    pub cannon_mass: Option<f64>,

    /// Muzzle x position (m)
    #[arg(long)]
    pub start_x: Option<f64>,

    /// Muzzle height (m)
    #[arg(long)]
    pub start_y: Option<f64>,

    /// Target distance (m)
    #[arg(long)]
    pub target_x: Option<f64>,

    /// Target height (m)
    #[arg(long)]
    pub target_height: Option<f64>,

    /// Enable quadratic air drag
    #[arg(long)]
    pub drag: bool,
}

impl ParamArgs {
    pub fn apply(&self, mut config: FiringConfig) -> FiringConfig {
        let set = |field: &mut f64, value: Option<f64>| {
            if let Some(v) = value {
                *field = v;
            }
        };
        set(&mut config.angle_deg, self.angle);
        set(&mut config.gunpowder_g, self.gunpowder);
        set(&mut config.efficiency_pct, self.efficiency);
        set(&mut config.projectile_mass_kg, self.projectile_mass);
        set(&mut config.cannon_mass_kg, self.cannon_mass);
        set(&mut config.target_x, self.target_x);
        set(&mut config.target_height, self.target_height);
        set(&mut config.start.x, self.start_x);
        set(&mut config.start.y, self.start_y);

        if self.drag {
            config.drag.enabled = true;
        }
        config
    }
}
