//! Agent-specific behavior tree nodes.
//!
//! Nodes are divided into:
//!
//! - `conditions`: read-only checks that return Success/Failure
//! - `actions`: nodes that move the agent or change its target or visual state
//!
//! Each node documents the [`AgentState`](crate::AgentState) fields it reads
//! and the ones it writes.

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
