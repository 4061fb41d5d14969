//! Action nodes for the agent's behavior tree.
//!
//! Action nodes drive the movement model. Long movements report `Running`
//! until they arrive, which parks the enclosing sequence on them.

use behavior_tree::{Behavior, Status};

use crate::AgentState;
use crate::error::AgentError;
use crate::geometry::{Point, within_radius};
use crate::movement::explicit_point;
use crate::state::VisualState;

/// Chases the rival's current position.
///
/// Reads `rival.position`. Writes `target`, `position`, `heading`, `visual`.
pub struct ChaseRival {
    pub arrival_m: f64,
}

impl Behavior<AgentState> for ChaseRival {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        ctx.target = ctx.rival.position;
        ctx.move_toward_target(self.arrival_m)
    }
}

/// Walks toward the current target.
///
/// Reads `target`. Writes `position`, `heading`, `visual`.
pub struct MoveToTarget {
    pub arrival_m: f64,
}

impl Behavior<AgentState> for MoveToTarget {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        ctx.move_toward_target(self.arrival_m)
    }
}

/// Runs directly away from the rival until it is outside the flee radius.
///
/// Reads `rival.position`. Writes `position`, `heading`, `visual`.
pub struct FleeFromRival;

impl Behavior<AgentState> for FleeFromRival {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        let threat = ctx.rival.position;
        let status = ctx.flee_step(threat);
        if status.is_success() {
            tracing::debug!(position = ?ctx.position, "escaped rival");
        }
        status
    }
}

/// After a flee: fails if the rival is still within `radius_m`, otherwise
/// goes `Idle` and succeeds.
///
/// Reads `position`, `rival.position`. Writes `visual`.
pub struct SettleAfterFlee {
    pub radius_m: f64,
}

impl Behavior<AgentState> for SettleAfterFlee {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        if within_radius(ctx.position, ctx.rival.position, self.radius_m) {
            return Status::Failure;
        }
        ctx.visual = VisualState::Idle;
        Status::Success
    }
}

/// Picks a random target inside the wander bounds.
///
/// Reads `rng`. Writes `target`.
pub struct SetRandomTarget;

impl Behavior<AgentState> for SetRandomTarget {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        ctx.set_random_target()
    }
}

/// Targets the next patrol stop.
///
/// Reads and advances `patrol`. Writes `target`.
pub struct NextPatrolTarget;

impl Behavior<AgentState> for NextPatrolTarget {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        ctx.next_patrol_target()
    }
}

/// Sets a fixed target.
///
/// Writes `target`. The coordinates are checked when the node is built, so a
/// missing coordinate is reported to whoever assembles the tree.
pub struct SetTarget {
    target: Point,
}

impl SetTarget {
    pub fn new(x: Option<f64>, y: Option<f64>) -> Result<Self, AgentError> {
        Ok(Self {
            target: explicit_point(x, y)?,
        })
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

impl Behavior<AgentState> for SetTarget {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        ctx.target = self.target;
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::rival::RivalSnapshot;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn state_with_rival(rival: Point) -> AgentState {
        let mut state = AgentState::new(
            AgentConfig::default(),
            Point::new(400.0, 400.0),
            SmallRng::seed_from_u64(3),
        );
        state.begin_tick(RivalSnapshot::new(rival, 0), 0.05);
        state
    }

    #[test]
    fn chase_targets_live_rival_position() {
        let mut chase = ChaseRival { arrival_m: 0.5 };
        let mut ctx = state_with_rival(Point::new(500.0, 400.0));

        assert_eq!(chase.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.target, Point::new(500.0, 400.0));
        assert!(ctx.position.x > 400.0);

        ctx.begin_tick(RivalSnapshot::new(Point::new(500.0, 300.0), 0), 0.05);
        assert_eq!(chase.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.target, Point::new(500.0, 300.0));
    }

    #[test]
    fn settle_fails_while_rival_is_near() {
        let mut settle = SettleAfterFlee { radius_m: 7.0 };
        let mut ctx = state_with_rival(Point::new(450.0, 400.0));
        ctx.visual = VisualState::Walk;

        assert_eq!(settle.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.visual, VisualState::Walk);
    }

    #[test]
    fn settle_goes_idle_once_rival_is_far() {
        let mut settle = SettleAfterFlee { radius_m: 7.0 };
        let mut ctx = state_with_rival(Point::new(1100.0, 400.0));
        ctx.visual = VisualState::Walk;

        assert_eq!(settle.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.visual, VisualState::Idle);
    }

    #[test]
    fn set_target_validates_on_construction() {
        assert!(matches!(
            SetTarget::new(Some(1000.0), None),
            Err(AgentError::InvalidArgument { .. })
        ));

        let mut node = SetTarget::new(Some(1000.0), Some(1000.0)).unwrap();
        let mut ctx = state_with_rival(Point::new(0.0, 0.0));
        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.target, Point::new(1000.0, 1000.0));
    }
}
