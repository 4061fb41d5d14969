//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, Behavior, Condition, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a selector that re-checks higher-priority children every tick.
///
/// Shorthand for `Box::new(Selector::reactive(children))`.
#[inline]
pub fn reactive_selector<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::reactive(children))
}

/// Creates an action leaf from a closure.
#[inline]
pub fn action<C: 'static, F>(run: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut C) -> Status + Send + 'static,
{
    Box::new(Action::new(run))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static, F>(check: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&C) -> bool + Send + 'static,
{
    Box::new(Condition::new(check))
}
