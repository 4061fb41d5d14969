//! Decision core of an autonomous NPC.
//!
//! The agent patrols a fixed route, and when its rival comes within sensing
//! range it either chases the rival (when ahead on score) or flees and then
//! wanders off. Decisions come from a behavior tree ticked once per frame;
//! long movements stay `Running` across frames.
//!
//! Modules are organized by responsibility:
//! - [`geometry`]: points, rectangles and the distance/angle checks
//! - [`movement`]: move-toward, flee, random and patrol targets
//! - [`nodes`] and [`policy`]: behavior tree leaves and the decision graph
//! - [`agent`]: the facade the host calls every frame
//! - [`rival`] and [`render`]: boundaries to the host simulation

pub mod agent;
pub mod config;
pub mod error;
pub mod geometry;
pub mod movement;
pub mod nodes;
pub mod policy;
pub mod render;
pub mod rival;
pub mod state;

pub use agent::{Agent, AgentBuilder, SCORE_COLLISION_GROUP};
pub use config::AgentConfig;
pub use error::AgentError;
pub use geometry::{PIXELS_PER_METER, Point, Rect, direction_angle, within_radius};
pub use render::{Facing, Renderer, Sprite};
pub use rival::{Rival, RivalSnapshot, SharedRival};
pub use state::{AgentState, PatrolRoute, VisualState};
