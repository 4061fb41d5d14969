//! Agent configuration constants and tunable parameters.

use crate::error::AgentError;
use crate::geometry::{PIXELS_PER_METER, Point, Rect};

/// Tunable parameters of a single agent.
///
/// Defaults reproduce the shipped behavior: a 1280x1024 arena, a 10 km/h
/// walk and an eight-stop patrol loop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Arena width in pixels.
    pub arena_width: f64,
    /// Arena height in pixels.
    pub arena_height: f64,
    /// Walking speed in km/h. Used for patrol, wander, chase and flee.
    pub run_speed_kmph: f64,
    /// Rival distance (meters) that triggers confront-or-evade.
    pub sense_radius_m: f64,
    /// Flee keeps going until the rival is at least this far (meters).
    pub flee_radius_m: f64,
    /// A move-toward step succeeds once the goal is closer than this (meters).
    pub arrival_radius_m: f64,
    /// Fleeing never takes the agent closer than this to an arena edge (pixels).
    pub flee_margin: f64,
    /// Random targets keep this distance from every arena edge (pixels).
    pub wander_margin: f64,
    /// Half side of the square bounding box (pixels).
    pub bounding_half_extent: f64,
    /// Ordered patrol stops, visited cyclically.
    pub patrol_route: Vec<Point>,
}

impl AgentConfig {
    // ===== animation =====
    /// Frames in every animation strip.
    pub const FRAMES_PER_ACTION: f64 = 10.0;
    /// Seconds to play one full strip.
    pub const TIME_PER_ACTION: f64 = 0.5;
    pub const ACTION_PER_TIME: f64 = 1.0 / Self::TIME_PER_ACTION;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ARENA_WIDTH: f64 = 1280.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 1024.0;
    pub const DEFAULT_RUN_SPEED_KMPH: f64 = 10.0;
    pub const DEFAULT_SENSE_RADIUS_M: f64 = 7.0;
    pub const DEFAULT_FLEE_RADIUS_M: f64 = 10.0;
    pub const DEFAULT_ARRIVAL_RADIUS_M: f64 = 0.5;
    pub const DEFAULT_FLEE_MARGIN: f64 = 50.0;
    pub const DEFAULT_WANDER_MARGIN: f64 = 100.0;
    pub const DEFAULT_BOUNDING_HALF_EXTENT: f64 = 50.0;
    pub const DEFAULT_PATROL_ROUTE: [(f64, f64); 8] = [
        (43.0, 274.0),
        (1118.0, 274.0),
        (1050.0, 494.0),
        (575.0, 804.0),
        (235.0, 991.0),
        (575.0, 804.0),
        (1050.0, 494.0),
        (1118.0, 274.0),
    ];

    pub fn new() -> Self {
        Self {
            arena_width: Self::DEFAULT_ARENA_WIDTH,
            arena_height: Self::DEFAULT_ARENA_HEIGHT,
            run_speed_kmph: Self::DEFAULT_RUN_SPEED_KMPH,
            sense_radius_m: Self::DEFAULT_SENSE_RADIUS_M,
            flee_radius_m: Self::DEFAULT_FLEE_RADIUS_M,
            arrival_radius_m: Self::DEFAULT_ARRIVAL_RADIUS_M,
            flee_margin: Self::DEFAULT_FLEE_MARGIN,
            wander_margin: Self::DEFAULT_WANDER_MARGIN,
            bounding_half_extent: Self::DEFAULT_BOUNDING_HALF_EXTENT,
            patrol_route: Self::DEFAULT_PATROL_ROUTE
                .iter()
                .copied()
                .map(Point::from)
                .collect(),
        }
    }

    pub fn with_patrol_route(mut self, route: Vec<Point>) -> Self {
        self.patrol_route = route;
        self
    }

    pub fn with_run_speed_kmph(mut self, run_speed_kmph: f64) -> Self {
        self.run_speed_kmph = run_speed_kmph;
        self
    }

    /// Walking speed converted to pixels per second.
    pub fn run_speed_pps(&self) -> f64 {
        let meters_per_second = self.run_speed_kmph * 1000.0 / 3600.0;
        meters_per_second * PIXELS_PER_METER
    }

    /// The whole arena.
    pub fn arena(&self) -> Rect {
        Rect::sized(self.arena_width, self.arena_height)
    }

    /// Region a fleeing agent is clamped into.
    pub fn flee_bounds(&self) -> Rect {
        self.arena().shrink(self.flee_margin)
    }

    /// Region random targets and random spawn points are drawn from.
    pub fn wander_bounds(&self) -> Rect {
        self.arena().shrink(self.wander_margin)
    }

    /// Rejects configurations the movement model cannot honour.
    pub fn validate(&self) -> Result<(), AgentError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("run_speed_kmph", self.run_speed_kmph),
            ("sense_radius_m", self.sense_radius_m),
            ("flee_radius_m", self.flee_radius_m),
            ("arrival_radius_m", self.arrival_radius_m),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AgentError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("flee_margin", self.flee_margin),
            ("wander_margin", self.wander_margin),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AgentError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if !self.flee_bounds().is_valid() {
            return Err(AgentError::InvalidConfig(format!(
                "flee_margin {} leaves no room in the arena",
                self.flee_margin
            )));
        }
        if !self.wander_bounds().is_valid() {
            return Err(AgentError::InvalidConfig(format!(
                "wander_margin {} leaves no room in the arena",
                self.wander_margin
            )));
        }
        let arena = self.arena();
        if let Some((index, stop)) = self
            .patrol_route
            .iter()
            .enumerate()
            .find(|(_, stop)| !arena.contains(**stop))
        {
            return Err(AgentError::InvalidConfig(format!(
                "patrol stop {index} at ({}, {}) lies outside the arena",
                stop.x, stop.y
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
