//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both composites remember the child that returned `Running` (the resume
//! pointer) so that long actions continue across ticks instead of restarting.

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If a child returns `Running`, the sequence returns `Running` and resumes at
///   that child on the next tick, without re-running the children before it
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    running: Option<usize>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` has fewer than two entries.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            children.len() >= 2,
            "Sequence must have at least two children"
        );
        Self {
            children,
            running: None,
        }
    }

    /// Index of the child this sequence resumes at on the next tick.
    pub fn resume_index(&self) -> Option<usize> {
        self.running
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let start = self.running.take().unwrap_or(0);

        for (index, child) in self.children.iter_mut().enumerate().skip(start) {
            match child.tick(ctx) {
                Status::Success => continue,               // Move to next child
                Status::Failure => return Status::Failure, // Short-circuit
                Status::Running => {
                    self.running = Some(index);
                    return Status::Running;
                }
            }
        }
        // All children succeeded
        Status::Success
    }

    fn reset(&mut self) {
        self.running = None;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// How a [`Selector`] treats its resume pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// Continue straight at the remembered child.
    Memory,
    /// Re-check the higher-priority children first; if one of them no longer
    /// fails, the remembered child is abandoned and reset.
    Reactive,
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If a child returns `Running`, the selector returns `Running` and remembers it
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
///
/// With [`Resume::Reactive`] the children in front of the remembered one are
/// re-evaluated every tick, which lets a guarded high-priority branch take
/// over from a long-running low-priority one.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    running: Option<usize>,
    resume: Resume,
}

impl<C> Selector<C> {
    /// Creates a new selector that resumes directly at a running child.
    ///
    /// # Panics
    ///
    /// Panics if `children` has fewer than two entries. A selector with a
    /// single child is just that child and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::with_resume(children, Resume::Memory)
    }

    /// Creates a new selector that re-checks higher-priority children every tick.
    ///
    /// # Panics
    ///
    /// Panics if `children` has fewer than two entries.
    pub fn reactive(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self::with_resume(children, Resume::Reactive)
    }

    fn with_resume(children: Vec<Box<dyn Behavior<C>>>, resume: Resume) -> Self {
        assert!(
            children.len() >= 2,
            "Selector must have at least two children"
        );
        Self {
            children,
            running: None,
            resume,
        }
    }

    /// Index of the child left running on the previous tick.
    pub fn resume_index(&self) -> Option<usize> {
        self.running
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let pending = self.running.take();
        let start = match self.resume {
            Resume::Memory => pending.unwrap_or(0),
            Resume::Reactive => 0,
        };

        // Try children in order until one does not fail
        for index in start..self.children.len() {
            let status = self.children[index].tick(ctx);
            if status.is_failure() {
                continue;
            }

            // A higher-priority child took over; the one left running last
            // tick must start from scratch if it is ever selected again.
            if let Some(abandoned) = pending
                && index < abandoned
            {
                self.children[abandoned].reset();
            }

            if status.is_running() {
                self.running = Some(index);
            }
            return status;
        }
        // All children failed
        Status::Failure
    }

    fn reset(&mut self) {
        self.running = None;
        for child in &mut self.children {
            child.reset();
        }
    }
}
