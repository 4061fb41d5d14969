//! Agent state shared with every behavior node (the blackboard).

use rand::rngs::SmallRng;

use crate::config::AgentConfig;
use crate::geometry::Point;
use crate::rival::RivalSnapshot;

/// Which animation strip the renderer plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisualState {
    Walk,
    #[default]
    Idle,
}

impl VisualState {
    /// Name of the sprite sheet for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::Walk => "Walk",
            VisualState::Idle => "Idle",
        }
    }
}

/// Ordered patrol stops with a cyclic cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct PatrolRoute {
    stops: Vec<Point>,
    index: usize,
}

impl PatrolRoute {
    pub fn new(stops: Vec<Point>) -> Self {
        Self { stops, index: 0 }
    }

    /// Returns the current stop and advances the cursor, wrapping at the end.
    ///
    /// `None` only for an empty route.
    pub fn advance(&mut self) -> Option<Point> {
        let stop = *self.stops.get(self.index)?;
        self.index = (self.index + 1) % self.stops.len();
        Some(stop)
    }

    /// Index of the stop handed out next.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Everything the decision policy reads and writes.
///
/// The movement primitives live in [`crate::movement`]; behavior nodes in
/// [`crate::nodes`] call them and touch the fields documented on each node.
pub struct AgentState {
    pub(crate) config: AgentConfig,
    pub(crate) speed_pps: f64,
    pub(crate) position: Point,
    pub(crate) heading: f64,
    pub(crate) visual: VisualState,
    pub(crate) target: Point,
    pub(crate) patrol: PatrolRoute,
    pub(crate) score: u32,
    pub(crate) rival: RivalSnapshot,
    pub(crate) elapsed: f64,
    pub(crate) moved: bool,
    pub(crate) rng: SmallRng,
}

impl AgentState {
    /// Creates the state of an agent standing idle at `position`.
    ///
    /// The target starts at the spawn point; the first patrol or wander leg
    /// replaces it.
    pub fn new(config: AgentConfig, position: Point, rng: SmallRng) -> Self {
        Self {
            speed_pps: config.run_speed_pps(),
            patrol: PatrolRoute::new(config.patrol_route.clone()),
            config,
            position,
            heading: 0.0,
            visual: VisualState::Idle,
            target: position,
            score: 0,
            rival: RivalSnapshot::default(),
            elapsed: 0.0,
            moved: false,
            rng,
        }
    }

    /// Loads the per-tick inputs before the tree is evaluated.
    pub fn begin_tick(&mut self, rival: RivalSnapshot, elapsed: f64) {
        self.rival = rival;
        self.elapsed = elapsed;
        self.moved = false;
    }

    /// Drops back to `Idle` when nothing moved the agent this tick.
    pub fn end_tick(&mut self) {
        if !self.moved {
            self.visual = VisualState::Idle;
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn visual(&self) -> VisualState {
        self.visual
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn patrol(&self) -> &PatrolRoute {
        &self.patrol
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rival(&self) -> RivalSnapshot {
        self.rival
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
