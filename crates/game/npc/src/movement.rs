//! Movement model: the primitives behavior nodes use to move the agent.
//!
//! Every primitive integrates the configured walking speed over the tick's
//! elapsed time and reports a [`Status`]: `Running` while the goal is not
//! reached, `Success` once it is.

use core::f64::consts::PI;

use behavior_tree::Status;
use rand::Rng;

use crate::error::AgentError;
use crate::geometry::{Point, direction_angle, within_radius};
use crate::state::{AgentState, VisualState};

impl AgentState {
    /// Walks toward the current target.
    pub fn move_toward_target(&mut self, arrival_m: f64) -> Status {
        let goal = self.target;
        self.move_toward(goal, arrival_m)
    }

    /// Walks toward `goal`, stopping on it rather than stepping past.
    ///
    /// Returns `Success` once `goal` is within `arrival_m` meters after the step.
    pub fn move_toward(&mut self, goal: Point, arrival_m: f64) -> Status {
        self.walk();

        let remaining = self.position.distance(goal);
        if remaining > 0.0 {
            self.heading = direction_angle(self.position, goal);
        }
        let step = self.speed_pps * self.elapsed;
        let next = if step >= remaining {
            goal
        } else {
            self.position.offset(self.heading, step)
        };
        self.position = next.clamp(self.config.arena());

        if within_radius(goal, self.position, arrival_m) {
            Status::Success
        } else {
            Status::Running
        }
    }

    /// Steps directly away from `threat`, staying inside the flee bounds.
    ///
    /// Keeps returning `Running` while `threat` is inside the flee radius. A
    /// cornered agent cannot gain distance and stays `Running` until the
    /// threat itself moves off.
    pub fn flee_step(&mut self, threat: Point) -> Status {
        self.walk();

        self.heading = direction_angle(self.position, threat) + PI;
        let step = self.speed_pps * self.elapsed;
        self.position = self
            .position
            .offset(self.heading, step)
            .clamp(self.config.flee_bounds());

        if within_radius(self.position, threat, self.config.flee_radius_m) {
            Status::Running
        } else {
            Status::Success
        }
    }

    /// Picks a uniformly random target inside the wander bounds.
    pub fn set_random_target(&mut self) -> Status {
        let bounds = self.config.wander_bounds();
        self.target = Point::new(
            self.rng.gen_range(bounds.min.x..=bounds.max.x),
            self.rng.gen_range(bounds.min.y..=bounds.max.y),
        );
        tracing::trace!(goal = ?self.target, "random target");
        Status::Success
    }

    /// Targets the next patrol stop and advances the route cursor.
    ///
    /// Fails only when the route has no stops.
    pub fn next_patrol_target(&mut self) -> Status {
        let index = self.patrol.index();
        match self.patrol.advance() {
            Some(stop) => {
                self.target = stop;
                tracing::debug!(index, goal = ?stop, "patrol leg");
                Status::Success
            }
            None => Status::Failure,
        }
    }

    /// Sets the target from explicit coordinates.
    ///
    /// Both coordinates must be present, non-zero and finite.
    pub fn set_explicit_target(
        &mut self,
        x: Option<f64>,
        y: Option<f64>,
    ) -> Result<Status, AgentError> {
        self.target = explicit_point(x, y)?;
        Ok(Status::Success)
    }

    fn walk(&mut self) {
        self.visual = VisualState::Walk;
        self.moved = true;
    }
}

/// Validates an explicitly supplied target.
///
/// A zero coordinate counts as missing.
pub(crate) fn explicit_point(x: Option<f64>, y: Option<f64>) -> Result<Point, AgentError> {
    let usable = |value: Option<f64>| value.filter(|v| v.is_finite() && *v != 0.0);
    match (usable(x), usable(y)) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(AgentError::InvalidArgument {
            what: "target location needs both coordinates",
        }),
    }
}
