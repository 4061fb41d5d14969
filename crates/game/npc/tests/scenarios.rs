//! End-to-end behavior scenarios driven through the agent facade.

use std::rc::Rc;

use game_npc::{
    Agent, AgentConfig, PIXELS_PER_METER, Point, SCORE_COLLISION_GROUP, SharedRival,
    VisualState, within_radius,
};

const FRAME: f64 = 0.05;

fn spawn(position: Point, rival: &SharedRival, config: AgentConfig) -> Agent {
    Agent::builder(Rc::new(rival.clone()))
        .config(config)
        .spawn(position)
        .seed(42)
        .build()
        .expect("default-derived config is valid")
}

fn give_score(agent: &mut Agent, points: u32) {
    for _ in 0..points {
        agent.handle_collision(SCORE_COLLISION_GROUP, &());
    }
}

#[test]
fn outscoring_agent_chases_live_rival_position() {
    let start = Point::new(600.0, 500.0);
    let rival = SharedRival::new(Point::new(start.x + 5.0 * PIXELS_PER_METER, 500.0), 1);
    let mut agent = spawn(start, &rival, AgentConfig::default());
    give_score(&mut agent, 3);

    for step in 0..10 {
        let live = Point::new(start.x + 5.0 * PIXELS_PER_METER, 500.0 + 3.0 * step as f64);
        rival.set_position(live);

        agent.update(FRAME);

        assert_eq!(agent.target(), live, "tick {step}");
        assert_eq!(agent.visual(), VisualState::Walk);
        assert!(within_radius(agent.position(), live, 7.0));
    }
    assert!(agent.position().x > start.x);
    assert_eq!(agent.patrol_index(), 0);
}

#[test]
fn outscored_agent_flees_then_wanders() {
    let start = Point::new(600.0, 500.0);
    let threat = Point::new(start.x + 5.0 * PIXELS_PER_METER, 500.0);
    let rival = SharedRival::new(threat, 3);
    let mut agent = spawn(start, &rival, AgentConfig::default());
    give_score(&mut agent, 1);

    let mut ticks = 0;
    loop {
        let before = agent.position().distance(threat);
        agent.update(FRAME);
        ticks += 1;
        assert!(ticks < 200, "flee never resolved");

        if agent.target() != start {
            break;
        }
        // Still fleeing: straight away from the rival.
        assert_eq!(agent.visual(), VisualState::Walk);
        assert!(agent.position().distance(threat) > before);
        assert!(agent.position().x < start.x);
    }

    // Out of sensing range, settled, and already walking a wander leg.
    assert!(!within_radius(agent.position(), threat, 7.0));
    let wander_target = agent.target();
    assert!(AgentConfig::default().wander_bounds().contains(wander_target));
    assert_eq!(agent.visual(), VisualState::Walk);
    assert_eq!(agent.patrol_index(), 0);

    agent.update(FRAME);
    assert_eq!(agent.target(), wander_target);
}

#[test]
fn flee_ends_when_rival_walks_out_of_range() {
    let start = Point::new(600.0, 500.0);
    let rival = SharedRival::new(Point::new(start.x + 5.0 * PIXELS_PER_METER, 500.0), 3);
    let mut agent = spawn(start, &rival, AgentConfig::default());
    give_score(&mut agent, 1);

    for _ in 0..3 {
        agent.update(FRAME);
        assert_eq!(agent.target(), start);
        assert!(agent.position().x < start.x);
    }
    let fled_to = agent.position();

    // The rival walks off while the agent is still inside the flee radius.
    let away = Point::new(1200.0, 950.0);
    assert!(within_radius(fled_to, rival.snapshot().position, 10.0));
    rival.set_position(away);
    agent.update(FRAME);

    // One last flee step, then the agent settles (Idle) and the wander leg
    // picked in the same tick switches it straight back to Walk.
    assert!(!within_radius(agent.position(), away, 7.0));
    let wander_target = agent.target();
    assert_ne!(wander_target, start);
    assert!(AgentConfig::default().wander_bounds().contains(wander_target));
    assert_eq!(agent.visual(), VisualState::Walk);

    agent.update(FRAME);
    assert_eq!(agent.target(), wander_target);
    assert_eq!(agent.patrol_index(), 0);
}

#[test]
fn cornered_agent_keeps_fleeing_until_rival_leaves() {
    let corner = Point::new(50.0, 500.0);
    let rival = SharedRival::new(Point::new(corner.x + 5.0 * PIXELS_PER_METER, 500.0), 3);
    let mut agent = spawn(corner, &rival, AgentConfig::default());
    give_score(&mut agent, 1);

    for _ in 0..30 {
        agent.update(FRAME);
        assert_eq!(agent.position().x, 50.0);
        assert_eq!(agent.visual(), VisualState::Walk);
        assert_eq!(agent.target(), corner);
    }

    rival.set_position(Point::new(1200.0, 950.0));
    agent.update(FRAME);

    assert!(agent.position().x >= 50.0);
    assert_ne!(agent.target(), corner);
    assert!(AgentConfig::default().wander_bounds().contains(agent.target()));
    assert_eq!(agent.patrol_index(), 0);
}

#[test]
fn distant_rival_leaves_agent_patrolling_one_stop_per_leg() {
    let start = Point::new(600.0, 500.0);
    let rival = SharedRival::new(Point::new(600.0, 500.0 + 20.0 * PIXELS_PER_METER), 0);
    let config = AgentConfig::default();
    let route = config.patrol_route.clone();
    let mut agent = spawn(start, &rival, config);

    let arrival_px = 0.5 * PIXELS_PER_METER;
    let mut legs = 0;
    let mut leg_ticks = 0;
    let mut previous_index = agent.patrol_index();
    let mut previous_target = agent.target();

    for _ in 0..2000 {
        let position_before = agent.position();
        agent.update(FRAME);
        leg_ticks += 1;

        if agent.patrol_index() != previous_index {
            assert_eq!(agent.patrol_index(), (previous_index + 1) % route.len());
            assert_eq!(agent.target(), route[previous_index]);
            if legs > 0 {
                // The previous leg ended on its stop, and took many ticks.
                assert!(position_before.distance(previous_target) < arrival_px);
                assert!(leg_ticks > 1);
            }
            legs += 1;
            leg_ticks = 0;
            previous_index = agent.patrol_index();
            previous_target = agent.target();
        } else {
            assert_eq!(agent.target(), previous_target);
        }
        assert_eq!(agent.visual(), VisualState::Walk);
    }

    assert!(legs > route.len(), "walked {legs} legs");
}

#[test]
fn approaching_rival_interrupts_patrol_and_patrol_restarts_afterwards() {
    let start = Point::new(600.0, 500.0);
    let far = Point::new(1200.0, 1000.0);
    let rival = SharedRival::new(far, 0);
    let config = AgentConfig::default();
    let route = config.patrol_route.clone();
    let mut agent = spawn(start, &rival, config);
    give_score(&mut agent, 1);

    for _ in 0..10 {
        agent.update(FRAME);
    }
    assert_eq!(agent.patrol_index(), 1);
    assert_eq!(agent.target(), route[0]);

    // Rival steps into range: the chase starts on this very tick.
    let close = Point::new(agent.position().x + 5.0 * PIXELS_PER_METER, agent.position().y);
    rival.set_position(close);
    agent.update(FRAME);
    assert_eq!(agent.target(), close);
    assert_eq!(agent.patrol_index(), 1);

    // Caught: the engagement completes.
    rival.set_position(agent.position());
    agent.update(FRAME);

    // Rival gone: the interrupted leg is not resumed, a fresh one begins.
    rival.set_position(far);
    agent.update(FRAME);
    assert_eq!(agent.patrol_index(), 2);
    assert_eq!(agent.target(), route[1]);
}

#[test]
fn empty_route_wanders_instead() {
    let rival = SharedRival::new(Point::new(1200.0, 1000.0), 0);
    let config = AgentConfig::default().with_patrol_route(Vec::new());
    let mut agent = spawn(Point::new(300.0, 300.0), &rival, config);

    agent.update(FRAME);

    assert_ne!(agent.target(), Point::new(300.0, 300.0));
    assert!(AgentConfig::default().wander_bounds().contains(agent.target()));
    assert_eq!(agent.visual(), VisualState::Walk);
}

#[test]
fn seeded_agents_are_deterministic() {
    let rival = SharedRival::new(Point::new(1200.0, 1000.0), 0);
    let config = AgentConfig::default().with_patrol_route(Vec::new());
    let mut first = spawn(Point::new(300.0, 300.0), &rival, config.clone());
    let mut second = spawn(Point::new(300.0, 300.0), &rival, config);

    for _ in 0..300 {
        first.update(FRAME);
        second.update(FRAME);
        assert_eq!(first.position(), second.position());
        assert_eq!(first.target(), second.target());
    }
}
