//! Agent facade: the per-frame entry points the host simulation calls.

use std::rc::Rc;

use behavior_tree::Status;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::geometry::{Point, Rect};
use crate::policy::{self, Brain};
use crate::render::{Facing, Renderer, Sprite};
use crate::rival::{Rival, RivalSnapshot};
use crate::state::{AgentState, VisualState};

/// Collision group whose notifications earn the agent a point.
pub const SCORE_COLLISION_GROUP: &str = "zombie:ball";

/// Side of the square sprite in pixels.
const SPRITE_SIZE: f64 = 100.0;

/// Offset of the score label from the agent's position.
const LABEL_OFFSET: (f64, f64) = (-10.0, 60.0);

/// An autonomous agent driven by its own behavior tree.
pub struct Agent {
    state: AgentState,
    brain: Brain,
    rival: Rc<dyn Rival>,
    frame: f64,
}

impl Agent {
    /// Creates an agent at a random spawn point with an entropy-seeded RNG.
    pub fn new(config: AgentConfig, rival: Rc<dyn Rival>) -> Result<Self, AgentError> {
        AgentBuilder::new(rival).config(config).build()
    }

    pub fn builder(rival: Rc<dyn Rival>) -> AgentBuilder {
        AgentBuilder::new(rival)
    }

    /// Advances the agent by one simulation frame.
    ///
    /// Negative or non-finite frame times are treated as zero.
    pub fn update(&mut self, elapsed: f64) {
        let elapsed = if elapsed.is_finite() && elapsed > 0.0 {
            elapsed
        } else {
            0.0
        };

        self.frame = (self.frame
            + AgentConfig::FRAMES_PER_ACTION * AgentConfig::ACTION_PER_TIME * elapsed)
            % AgentConfig::FRAMES_PER_ACTION;

        let visual_before = self.state.visual();
        self.state
            .begin_tick(RivalSnapshot::of(self.rival.as_ref()), elapsed);
        let status = self.brain.tick(&mut self.state);
        self.state.end_tick();

        tracing::trace!(
            tick = self.brain.ticks(),
            ?status,
            position = ?self.state.position(),
            "agent ticked"
        );
        if visual_before != self.state.visual() {
            tracing::debug!(
                from = visual_before.as_str(),
                to = self.state.visual().as_str(),
                "visual state changed"
            );
        }
    }

    /// Hands the current frame to `renderer`: sprite, score label, bounding box.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let position = self.state.position();
        renderer.draw_sprite(&Sprite {
            visual: self.state.visual(),
            frame: self.frame_index(),
            center: position,
            size: SPRITE_SIZE,
            facing: Facing::from_heading(self.state.heading()),
        });
        renderer.draw_label(
            Point::new(position.x + LABEL_OFFSET.0, position.y + LABEL_OFFSET.1),
            &self.state.score().to_string(),
        );
        renderer.draw_bounds(self.bounding_box());
    }

    /// Square box of the configured half extent centered on the agent.
    pub fn bounding_box(&self) -> Rect {
        Rect::centered(
            self.state.position(),
            self.state.config().bounding_half_extent,
        )
    }

    /// Collision notification from the host. Only the score group counts.
    pub fn handle_collision<T: ?Sized>(&mut self, group: &str, _other: &T) {
        if group == SCORE_COLLISION_GROUP {
            self.state.add_score(1);
            tracing::debug!(score = self.state.score(), "scored");
        }
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn position(&self) -> Point {
        self.state.position()
    }

    pub fn heading(&self) -> f64 {
        self.state.heading()
    }

    pub fn visual(&self) -> VisualState {
        self.state.visual()
    }

    pub fn target(&self) -> Point {
        self.state.target()
    }

    pub fn patrol_index(&self) -> usize {
        self.state.patrol().index()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Fractional animation frame in `[0, FRAMES_PER_ACTION)`.
    pub fn frame(&self) -> f64 {
        self.frame
    }

    /// Animation frame the renderer should show.
    pub fn frame_index(&self) -> usize {
        self.frame as usize
    }

    /// Root status of the latest tick, `None` before the first update.
    pub fn last_status(&self) -> Option<Status> {
        self.brain.last_status()
    }
}

/// Builder for [`Agent`].
pub struct AgentBuilder {
    rival: Rc<dyn Rival>,
    config: AgentConfig,
    spawn: Option<Point>,
    seed: Option<u64>,
}

impl AgentBuilder {
    pub fn new(rival: Rc<dyn Rival>) -> Self {
        Self {
            rival,
            config: AgentConfig::default(),
            spawn: None,
            seed: None,
        }
    }

    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Spawn point. Defaults to a random point inside the wander bounds.
    ///
    /// [`build`](Self::build) rejects points outside the arena.
    pub fn spawn(mut self, position: Point) -> Self {
        self.spawn = Some(position);
        self
    }

    /// Seed for the agent's RNG. Unseeded agents draw from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Agent, AgentError> {
        self.config.validate()?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let position = match self.spawn {
            Some(position) if self.config.arena().contains(position) => position,
            Some(_) => {
                return Err(AgentError::InvalidArgument {
                    what: "spawn point must lie inside the arena",
                });
            }
            None => {
                let bounds = self.config.wander_bounds();
                Point::new(
                    rng.gen_range(bounds.min.x..=bounds.max.x),
                    rng.gen_range(bounds.min.y..=bounds.max.y),
                )
            }
        };
        let frame = f64::from(rng.gen_range(0u8..=9));

        let brain = policy::brain(&self.config);
        tracing::debug!(?position, seed = ?self.seed, "agent spawned");

        Ok(Agent {
            state: AgentState::new(self.config, position, rng),
            brain,
            rival: self.rival,
            frame,
        })
    }
}
