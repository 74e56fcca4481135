//! Simulation session: the single owner of all mutable CannonLab state.
//!
//! `SimulationSession` holds the current config, the active flight plan, the
//! overlay archive and toggle. Commands are queued and applied at the next
//! tick boundary; each tick advances the active plan by one frame step and
//! returns a `SessionSnapshot`. Completely headless, so it can be driven
//! tick by tick in tests.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use cannonlab_core::commands::SessionCommand;
use cannonlab_core::config::FiringConfig;
use cannonlab_core::constants::FRAME_DT;
use cannonlab_core::enums::AlertLevel;
use cannonlab_core::error::ConfigError;
use cannonlab_core::events::{Alert, ShotEvent};
use cannonlab_core::state::SessionSnapshot;
use cannonlab_core::types::SimTime;

use crate::flight_plan::{FlightPlan, Frame};
use crate::snapshot::{self, SnapshotInput};
use crate::trajectory::TrajectoryArchive;

pub struct SimulationSession {
    config: FiringConfig,
    plan: Option<FlightPlan>,
    archive: TrajectoryArchive,
    /// The current plan's projectile path is already in the archive.
    track_archived: bool,
    overlay: bool,
    /// The animation timer is running for the current plan.
    animating: bool,
    shot: u32,
    time: SimTime,
    command_queue: VecDeque<SessionCommand>,
    events: Vec<ShotEvent>,
    alerts: Vec<Alert>,
}

impl SimulationSession {
    /// Create a session around a validated config.
    pub fn new(config: FiringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, advance the active plan by one frame step and
    /// return the resulting snapshot.
    pub fn tick(&mut self) -> SessionSnapshot {
        self.process_commands();

        if self.animating {
            if let Some(frame) = self.plan.as_mut().and_then(|p| p.advance(FRAME_DT)) {
                self.on_frame(frame);
            }
            self.time.advance();
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        snapshot::build_snapshot(SnapshotInput {
            time: &self.time,
            shot: self.shot,
            animating: self.animating,
            config: &self.config,
            plan: self.plan.as_ref(),
            archive: &self.archive,
            show_overlays: self.overlay,
            events: std::mem::take(&mut self.events),
            alerts: std::mem::take(&mut self.alerts),
        })
    }

    pub fn config(&self) -> &FiringConfig {
        &self.config
    }

    pub fn plan(&self) -> Option<&FlightPlan> {
        self.plan.as_ref()
    }

    pub fn archive(&self) -> &TrajectoryArchive {
        &self.archive
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Id of the most recent shot; 0 before the first one.
    pub fn shot(&self) -> u32 {
        self.shot
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::SetConfig { config } => self.set_config(config),
            SessionCommand::Fire => self.fire(),
            SessionCommand::Cancel => self.cancel(),
            SessionCommand::SetTrackOverlay { enabled } => {
                debug!(enabled, "track overlay toggled");
                self.overlay = enabled;
            }
            SessionCommand::SaveTrack => self.save_track(),
            SessionCommand::ClearArchive => {
                debug!(cleared = self.archive.len(), "archive cleared");
                self.archive.clear();
                self.track_archived = false;
            }
        }
    }

    fn set_config(&mut self, config: FiringConfig) {
        match config.validate() {
            Ok(()) => {
                info!(
                    angle_deg = config.angle_deg,
                    gunpowder_g = config.gunpowder_g,
                    efficiency_pct = config.efficiency_pct,
                    drag = config.drag.enabled,
                    "config updated"
                );
                self.config = config;
            }
            Err(err) => {
                warn!(%err, "config rejected");
                self.push_alert(AlertLevel::Error, format!("Invalid parameters: {err}"));
            }
        }
    }

    /// Arm a new shot with the current config. An active shot is cancelled
    /// first; once the new plan is armed and overlays are on, the previous
    /// projectile path goes to the archive.
    fn fire(&mut self) {
        if self.animating {
            debug!(shot = self.shot, "shot still animating, cancelling before re-arm");
            self.cancel();
        }

        let plan = match FlightPlan::new(self.config) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(%err, "shot not armed");
                self.push_alert(AlertLevel::Error, format!("Cannot fire: {err}"));
                return;
            }
        };

        if self.overlay {
            self.archive_current();
        }

        self.shot += 1;
        let derived = *plan.derived();
        info!(
            shot = self.shot,
            initial_speed = derived.initial_speed,
            flight_time = derived.flight_time,
            hit = derived.hit.hit,
            "shot fired"
        );
        if derived.hit.hit && derived.hit.below_ground {
            warn!(
                shot = self.shot,
                point = ?derived.hit.point,
                "hit registered below ground level"
            );
            self.push_alert(
                AlertLevel::Warning,
                "Target plane crossed below ground level".to_string(),
            );
        }

        self.events.push(ShotEvent::ShotFired {
            shot: self.shot,
            flight_time: derived.flight_time,
            hit_predicted: derived.hit.hit,
        });
        self.plan = Some(plan);
        self.track_archived = false;
        self.animating = true;
    }

    /// Stop the animation timer. The drawn paths stay as they are.
    fn cancel(&mut self) {
        if !self.animating {
            return;
        }
        self.animating = false;
        let at_secs = self.plan.as_ref().map_or(0.0, FlightPlan::elapsed);
        info!(shot = self.shot, at_secs, "shot cancelled");
        self.events.push(ShotEvent::ShotCancelled {
            shot: self.shot,
            at_secs,
        });
    }

    fn save_track(&mut self) {
        if !self.archive_current() {
            self.push_alert(AlertLevel::Info, "No track to save".to_string());
        }
    }

    /// Copy the current projectile path into the archive, at most once per
    /// plan. Returns false when there is nothing to archive.
    fn archive_current(&mut self) -> bool {
        let Some(track) = self.plan.as_ref().map(|p| p.projectile_track()) else {
            return false;
        };
        if track.is_empty() {
            return false;
        }
        if self.track_archived {
            debug!(shot = self.shot, "track already archived");
            return true;
        }
        self.archive.add(track.clone());
        self.track_archived = true;
        let archived = self.archive.len();
        debug!(archived, "track archived");
        self.events.push(ShotEvent::TrackArchived { archived });
        true
    }

    fn on_frame(&mut self, frame: Frame) {
        if let Some(point) = frame.hit {
            info!(shot = self.shot, x = point.x, y = point.y, "target hit");
            self.events.push(ShotEvent::HitRegistered {
                shot: self.shot,
                point,
            });
        }

        let Some(phase) = self.plan.as_ref().map(FlightPlan::phase) else {
            return;
        };
        if phase.is_terminal() {
            self.animating = false;
            info!(shot = self.shot, ?phase, t = frame.t, "shot finished");
            self.events.push(ShotEvent::ShotFinished {
                shot: self.shot,
                phase,
            });
        }
    }

    fn push_alert(&mut self, level: AlertLevel, message: String) {
        self.alerts.push(Alert {
            level,
            message,
            tick: self.time.tick,
        });
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self {
            config: FiringConfig::default(),
            plan: None,
            archive: TrajectoryArchive::new(),
            track_archived: false,
            overlay: false,
            animating: false,
            shot: 0,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            alerts: Vec::new(),
        }
    }
}
