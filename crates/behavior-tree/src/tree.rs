//! Root handle that drives a tree once per frame.

use crate::{Behavior, Status};

/// Owns the root node and records how the last tick went.
pub struct BehaviorTree<C> {
    root: Box<dyn Behavior<C>>,
    ticks: u64,
    last: Option<Status>,
}

impl<C> BehaviorTree<C> {
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self {
            root,
            ticks: 0,
            last: None,
        }
    }

    /// Evaluates the whole tree once.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.root.tick(ctx);
        self.ticks += 1;
        self.last = Some(status);
        status
    }

    /// Drops all resume state so the next tick starts at the root's first child.
    pub fn reset(&mut self) {
        self.root.reset();
        self.last = None;
    }

    /// Number of ticks evaluated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Root status of the most recent tick.
    pub fn last_status(&self) -> Option<Status> {
        self.last
    }
}
