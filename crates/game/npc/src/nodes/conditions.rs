//! Condition nodes for the agent's behavior tree.
//!
//! Condition nodes inspect the agent state and return Success or Failure.
//! They never modify state.

use behavior_tree::{Behavior, Status};

use crate::AgentState;
use crate::geometry::within_radius;

/// Succeeds when the rival is strictly closer than `radius_m` meters.
///
/// Reads `position`, `rival.position`.
pub struct RivalWithin {
    pub radius_m: f64,
}

impl Behavior<AgentState> for RivalWithin {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        Status::from(within_radius(
            ctx.rival.position,
            ctx.position,
            self.radius_m,
        ))
    }
}

/// Succeeds when the agent's score is strictly greater than the rival's.
///
/// Reads `score`, `rival.score`. A tie fails.
pub struct OutscoresRival;

impl Behavior<AgentState> for OutscoresRival {
    fn tick(&mut self, ctx: &mut AgentState) -> Status {
        Status::from(ctx.score > ctx.rival.score)
    }
}
