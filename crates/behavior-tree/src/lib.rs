//! Lightweight behavior tree library for tick-driven, real-time agents.
//!
//! The tree is evaluated once per simulation frame. Long actions report
//! [`Status::Running`] and the composites above them remember where to resume,
//! so a multi-frame walk continues next tick instead of restarting.
//!
//! - **Three statuses**: Success, Failure and Running
//! - **Resume pointers**: the only mutable state a composite carries
//! - **Explicit reset**: abandoned branches are reset, never left stale
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Leaf nodes: [`Action`], [`Condition`]
//! - [`BehaviorTree`]: root handle ticked by the host

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Resume, Selector, Sequence};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use tree::BehaviorTree;
