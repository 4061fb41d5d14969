//! Read-only view of the rival the agent reacts to.
//!
//! The host owns the rival and hands the agent an `Rc<dyn Rival>` at
//! construction. The agent copies it into a [`RivalSnapshot`] once per tick,
//! so every node in that tick sees the same rival.

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::Point;

/// What the agent may observe about its rival.
pub trait Rival {
    fn position(&self) -> Point;
    fn score(&self) -> u32;
}

/// Rival state frozen at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RivalSnapshot {
    pub position: Point,
    pub score: u32,
}

impl RivalSnapshot {
    pub const fn new(position: Point, score: u32) -> Self {
        Self { position, score }
    }

    pub fn of(rival: &dyn Rival) -> Self {
        Self::new(rival.position(), rival.score())
    }
}

impl Rival for RivalSnapshot {
    fn position(&self) -> Point {
        self.position
    }

    fn score(&self) -> u32 {
        self.score
    }
}

/// Shared, host-mutable rival handle.
///
/// Clones share the same cell: the host keeps one clone to move the rival
/// around, the agent keeps another to read it.
#[derive(Clone, Debug, Default)]
pub struct SharedRival {
    inner: Rc<Cell<RivalSnapshot>>,
}

impl SharedRival {
    pub fn new(position: Point, score: u32) -> Self {
        Self {
            inner: Rc::new(Cell::new(RivalSnapshot::new(position, score))),
        }
    }

    pub fn snapshot(&self) -> RivalSnapshot {
        self.inner.get()
    }

    pub fn set_position(&self, position: Point) {
        self.inner.set(RivalSnapshot {
            position,
            ..self.inner.get()
        });
    }

    pub fn set_score(&self, score: u32) {
        self.inner.set(RivalSnapshot {
            score,
            ..self.inner.get()
        });
    }
}

impl Rival for SharedRival {
    fn position(&self) -> Point {
        self.inner.get().position
    }

    fn score(&self) -> u32 {
        self.inner.get().score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_updates() {
        let host = SharedRival::new(Point::new(1.0, 2.0), 0);
        let seen_by_agent: Rc<dyn Rival> = Rc::new(host.clone());

        host.set_position(Point::new(5.0, 6.0));
        host.set_score(3);

        assert_eq!(
            RivalSnapshot::of(seen_by_agent.as_ref()),
            RivalSnapshot::new(Point::new(5.0, 6.0), 3)
        );
    }
}
