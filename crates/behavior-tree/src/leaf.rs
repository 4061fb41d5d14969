//! Closure-backed leaf nodes.
//!
//! Most agents implement [`Behavior`] on small named structs, which keeps the
//! fields each node touches visible in one place. These wrappers cover the
//! remaining cases: quick predicates and one-off actions built from closures.

use crate::{Behavior, Status};

/// Runs a callable against the context and returns its status unchanged.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    /// Wraps `run` as a leaf node.
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Status + Send,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}

/// Side-effect free check: `Success` when the predicate holds, `Failure` otherwise.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    /// Wraps `check` as a leaf node.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        Status::from((self.check)(ctx))
    }
}
