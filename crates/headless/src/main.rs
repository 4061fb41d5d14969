//! Headless host: drives one agent against a scripted rival and logs what it does.
mod config;
mod renderer;
mod rival;

use std::rc::Rc;

use anyhow::Result;
use config::HeadlessConfig;
use game_npc::{Agent, Point, SCORE_COLLISION_GROUP};
use renderer::TraceRenderer;
use rival::ScriptedRival;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = HeadlessConfig::from_env();
    let agent_config = config.load_agent_config()?;
    tracing::info!(?config, "starting headless run");

    // The rival paces across the middle of the arena.
    let mid_y = agent_config.arena_height / 2.0;
    let mut rival = ScriptedRival::new(
        Point::new(agent_config.arena_width * 0.2, mid_y),
        Point::new(agent_config.arena_width * 0.8, mid_y),
        config.rival_speed,
    );

    let mut builder = Agent::builder(Rc::new(rival.handle())).config(agent_config);
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let mut agent = builder.build()?;
    let mut renderer = TraceRenderer;

    for tick in 1..=config.ticks {
        rival.step(config.frame_time);
        agent.update(config.frame_time);

        if config.score_every > 0 && tick % config.score_every == 0 {
            // Alternate who gets hit so both branches of the engagement show up.
            if (tick / config.score_every) % 2 == 1 {
                agent.handle_collision(SCORE_COLLISION_GROUP, &tick);
            } else {
                rival.add_score(1);
            }
        }

        if config.draw {
            agent.draw(&mut renderer);
        }

        if tick % config.log_every == 0 {
            tracing::info!(
                tick,
                x = agent.position().x,
                y = agent.position().y,
                visual = agent.visual().as_str(),
                patrol = agent.patrol_index(),
                score = agent.score(),
                rival = ?rival.position(),
                "agent"
            );
        }
    }

    tracing::info!(
        ticks = config.ticks,
        score = agent.score(),
        position = ?agent.position(),
        "run finished"
    );
    Ok(())
}
