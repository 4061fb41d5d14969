//! Renderer that writes draw calls to the trace log.

use game_npc::{Facing, Point, Rect, Renderer, Sprite};

pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        tracing::trace!(
            sheet = sprite.visual.as_str(),
            frame = sprite.frame,
            x = sprite.center.x,
            y = sprite.center.y,
            mirrored = sprite.facing == Facing::Left,
            "sprite"
        );
    }

    fn draw_label(&mut self, at: Point, text: &str) {
        tracing::trace!(x = at.x, y = at.y, text, "label");
    }

    fn draw_bounds(&mut self, bounds: Rect) {
        tracing::trace!(?bounds, "bounds");
    }
}
