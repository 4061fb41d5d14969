//! The agent's behavior graph.
//!
//! ```text
//! choose_behavior (reactive selector)
//!  ├─ engage_if_near
//!  │   ├─ RivalWithin(sense radius)
//!  │   └─ confront_or_evade (reactive selector)
//!  │       ├─ confront:          OutscoresRival → ChaseRival
//!  │       └─ evade_then_wander: FleeFromRival → SettleAfterFlee → wander
//!  ├─ patrol: NextPatrolTarget → MoveToTarget
//!  └─ wander: SetRandomTarget → MoveToTarget
//! ```
//!
//! Engagement wins whenever the rival is inside the sense radius. The
//! selectors are reactive, so a rival walking into range interrupts a patrol
//! leg on the very next tick and the interrupted leg is reset.
//!
//! Patrol only fails on an empty route, so the trailing wander is unreachable
//! with the default configuration.

use behavior_tree::builder::{reactive_selector, sequence};
use behavior_tree::{Behavior, BehaviorTree};

use crate::AgentState;
use crate::config::AgentConfig;
use crate::nodes::{
    ChaseRival, FleeFromRival, MoveToTarget, NextPatrolTarget, OutscoresRival, RivalWithin,
    SetRandomTarget, SettleAfterFlee,
};

/// Type alias for agent subtrees.
pub type Subtree = Box<dyn Behavior<AgentState>>;

/// Root handle owned by the agent.
pub type Brain = BehaviorTree<AgentState>;

/// Builds the complete decision tree for `config`.
pub fn brain(config: &AgentConfig) -> Brain {
    BehaviorTree::new(choose_behavior(config))
}

pub fn choose_behavior(config: &AgentConfig) -> Subtree {
    reactive_selector(vec![
        engage_if_near(config),
        patrol(config),
        wander(config),
    ])
}

/// Confront or evade, but only while the rival is inside the sense radius.
pub fn engage_if_near(config: &AgentConfig) -> Subtree {
    sequence(vec![
        Box::new(RivalWithin {
            radius_m: config.sense_radius_m,
        }),
        reactive_selector(vec![confront(config), evade_then_wander(config)]),
    ])
}

/// Chase the rival while strictly ahead on score.
pub fn confront(config: &AgentConfig) -> Subtree {
    sequence(vec![
        Box::new(OutscoresRival),
        Box::new(ChaseRival {
            arrival_m: config.arrival_radius_m,
        }),
    ])
}

/// Flee out of the flee radius, settle once the rival is out of sense range,
/// then wander off.
pub fn evade_then_wander(config: &AgentConfig) -> Subtree {
    sequence(vec![
        Box::new(FleeFromRival),
        Box::new(SettleAfterFlee {
            radius_m: config.sense_radius_m,
        }),
        wander(config),
    ])
}

/// Walk the next patrol leg.
pub fn patrol(config: &AgentConfig) -> Subtree {
    sequence(vec![
        Box::new(NextPatrolTarget),
        Box::new(MoveToTarget {
            arrival_m: config.arrival_radius_m,
        }),
    ])
}

/// Walk to a random point.
pub fn wander(config: &AgentConfig) -> Subtree {
    sequence(vec![
        Box::new(SetRandomTarget),
        Box::new(MoveToTarget {
            arrival_m: config.arrival_radius_m,
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::rival::RivalSnapshot;
    use crate::state::VisualState;
    use behavior_tree::Status;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn state(config: AgentConfig, position: Point) -> AgentState {
        AgentState::new(config, position, SmallRng::seed_from_u64(11))
    }

    #[test]
    fn patrol_leg_resumes_until_arrival() {
        let config = AgentConfig::default()
            .with_patrol_route(vec![Point::new(300.0, 300.0), Point::new(900.0, 300.0)]);
        let mut patrol = patrol(&config);
        let mut ctx = state(config, Point::new(250.0, 300.0));
        ctx.begin_tick(RivalSnapshot::default(), 0.1);

        // 50 px to go at ~9.26 px per tick: three running ticks, then arrival.
        for _ in 0..3 {
            assert_eq!(patrol.tick(&mut ctx), Status::Running);
            assert_eq!(ctx.target, Point::new(300.0, 300.0));
            assert_eq!(ctx.patrol.index(), 1);
        }
        assert_eq!(patrol.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.patrol.index(), 1);

        assert_eq!(patrol.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.target, Point::new(900.0, 300.0));
        assert_eq!(ctx.patrol.index(), 0);
    }

    #[test]
    fn empty_route_falls_back_to_wander() {
        let config = AgentConfig::default().with_patrol_route(Vec::new());
        let mut root = choose_behavior(&config);
        let mut ctx = state(config, Point::new(600.0, 500.0));
        ctx.begin_tick(RivalSnapshot::new(Point::new(100.0, 100.0), 0), 0.05);

        let status = root.tick(&mut ctx);

        assert!(status.is_running() || status.is_success());
        assert_ne!(ctx.target, Point::new(600.0, 500.0));
        assert!(ctx.config.wander_bounds().contains(ctx.target));
        assert_eq!(ctx.visual, VisualState::Walk);
    }
}
