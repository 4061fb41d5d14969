//! Boundary to the host's renderer.
//!
//! Sprite sheets, fonts and the actual drawing belong to the host. The agent
//! only says what to draw and where.

use crate::geometry::{Point, Rect};
use crate::state::VisualState;

/// Which way the sprite faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Left whenever the heading has a negative x component.
    pub fn from_heading(heading: f64) -> Self {
        if heading.cos() < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// One animation frame to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub visual: VisualState,
    pub frame: usize,
    pub center: Point,
    pub size: f64,
    pub facing: Facing,
}

/// Drawing surface supplied by the host.
pub trait Renderer {
    /// Draws `sprite`, mirrored horizontally when it faces left.
    fn draw_sprite(&mut self, sprite: &Sprite);

    /// Draws `text` with its anchor at `at`.
    fn draw_label(&mut self, at: Point, text: &str);

    /// Outlines a bounding box.
    fn draw_bounds(&mut self, bounds: Rect);
}
