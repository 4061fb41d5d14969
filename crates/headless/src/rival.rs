//! Scripted rival for the headless loop.

use game_npc::{Point, SharedRival};

/// Walks back and forth between two points at a fixed speed.
pub struct ScriptedRival {
    handle: SharedRival,
    waypoints: [Point; 2],
    heading_to: usize,
    speed: f64,
}

impl ScriptedRival {
    pub fn new(from: Point, to: Point, speed: f64) -> Self {
        Self {
            handle: SharedRival::new(from, 0),
            waypoints: [from, to],
            heading_to: 1,
            speed,
        }
    }

    /// Handle the agent observes the rival through.
    pub fn handle(&self) -> SharedRival {
        self.handle.clone()
    }

    pub fn position(&self) -> Point {
        self.handle.snapshot().position
    }

    pub fn add_score(&self, points: u32) {
        let score = self.handle.snapshot().score;
        self.handle.set_score(score.saturating_add(points));
    }

    /// Advances the rival by one frame, turning around at each waypoint.
    pub fn step(&mut self, elapsed: f64) {
        let position = self.position();
        let goal = self.waypoints[self.heading_to];
        let remaining = position.distance(goal);
        let step = self.speed * elapsed;

        if step >= remaining {
            self.handle.set_position(goal);
            self.heading_to = 1 - self.heading_to;
        } else {
            let angle = game_npc::direction_angle(position, goal);
            self.handle.set_position(position.offset(angle, step));
        }
    }
}
