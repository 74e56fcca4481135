//! Sampled trajectories and the overlay archive.

use glam::DVec2;

use cannonlab_core::enums::Body;
use cannonlab_core::state::TrackView;
use cannonlab_core::types::TrackPoint;

/// Append-only sample buffer for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    body: Body,
    points: Vec<TrackPoint>,
}

impl Trajectory {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            points: Vec::new(),
        }
    }

    pub fn body(&self) -> Body {
        self.body
    }

    /// Append a sample. A sample at the same position as the previous one
    /// (the cannon after it stops) is skipped. Returns whether it was kept.
    pub fn push(&mut self, t: f64, position: DVec2) -> bool {
        if self.last_position() == Some(position) {
            return false;
        }
        self.points.push(TrackPoint::new(t, position));
        true
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn last_position(&self) -> Option<DVec2> {
        self.points.last().map(|p| p.position)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_view(&self) -> TrackView {
        TrackView {
            body: self.body,
            points: self.points.clone(),
        }
    }
}

/// Previously fired paths kept for overlay comparison, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryArchive {
    tracks: Vec<Trajectory>,
}

impl TrajectoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, trajectory: Trajectory) {
        self.tracks.push(trajectory);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn all(&self) -> &[Trajectory] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_repeated_position() {
        let mut track = Trajectory::new(Body::Cannon);
        assert!(track.push(0.0, DVec2::new(0.0, 0.0)));
        assert!(track.push(0.1, DVec2::new(-0.5, 0.0)));
        assert!(!track.push(0.2, DVec2::new(-0.5, 0.0)));
        assert!(!track.push(0.3, DVec2::new(-0.5, 0.0)));
        assert_eq!(track.len(), 2);
        assert_eq!(track.points()[1].t, 0.1);
    }

    #[test]
    fn archive_preserves_order() {
        let mut archive = TrajectoryArchive::new();
        for i in 0..3 {
            let mut track = Trajectory::new(Body::Projectile);
            track.push(0.0, DVec2::new(i as f64, 0.0));
            archive.add(track);
        }
        let firsts: Vec<f64> = archive
            .all()
            .iter()
            .map(|t| t.points()[0].position.x)
            .collect();
        assert_eq!(firsts, vec![0.0, 1.0, 2.0]);

        archive.clear();
        assert!(archive.is_empty());
    }
}
