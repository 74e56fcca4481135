//! Animation loop: drives a `SimulationSession` one tick at a time.
//!
//! The wall clock is injected through `AnimationClock` so the same loop runs
//! in real time for the terminal front end and without sleeping in tests.

use std::time::{Duration, Instant};

use tracing::trace;

use cannonlab_core::constants::TICK_INTERVAL_MS;
use cannonlab_core::state::SessionSnapshot;
use cannonlab_sim::SimulationSession;

/// Nominal wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Paces the animation loop between ticks.
pub trait AnimationClock {
    /// Block until the next tick is due.
    fn wait_for_next_tick(&mut self);
}

/// Sleeps so that ticks land on a fixed period.
pub struct RealtimeClock {
    tick_duration: Duration,
    next_tick_time: Instant,
}

impl RealtimeClock {
    pub fn new(tick_duration: Duration) -> Self {
        Self {
            tick_duration,
            next_tick_time: Instant::now(),
        }
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new(TICK_DURATION)
    }
}

impl AnimationClock for RealtimeClock {
    fn wait_for_next_tick(&mut self) {
        self.next_tick_time += self.tick_duration;
        let now = Instant::now();
        if self.next_tick_time > now {
            std::thread::sleep(self.next_tick_time - now);
        } else if now - self.next_tick_time > self.tick_duration * 2 {
            // Too far behind, reset instead of bursting through missed ticks
            self.next_tick_time = now;
        }
    }
}

/// Never waits. Used for batch output and tests.
#[derive(Debug, Default)]
pub struct ImmediateClock {
    pub ticks: u64,
}

impl AnimationClock for ImmediateClock {
    fn wait_for_next_tick(&mut self) {
        self.ticks += 1;
    }
}

/// Tick `session` until its animation stops, handing every snapshot to
/// `on_snapshot`. Returns the final snapshot.
///
/// Commands must already be queued; the first tick applies them.
pub fn run_until_idle<C, F, E>(
    session: &mut SimulationSession,
    clock: &mut C,
    mut on_snapshot: F,
) -> Result<SessionSnapshot, E>
where
    C: AnimationClock,
    F: FnMut(&SessionSnapshot) -> Result<(), E>,
{
    loop {
        // 1. Advance one tick (applies queued commands first)
        let snapshot = session.tick();
        trace!(tick = snapshot.time.tick, shot_time = snapshot.shot_time, "tick");

        // 2. Hand the snapshot to the presentation layer
        on_snapshot(&snapshot)?;

        // 3. Stop once the timer is off
        if !snapshot.animating {
            return Ok(snapshot);
        }

        // 4. Wait for the next tick
        clock.wait_for_next_tick();
    }
}
