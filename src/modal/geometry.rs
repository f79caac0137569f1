use egui::{Context, Pos2, Rect, Vec2};

/// Viewport size in points. The constraint solver treats the viewport
/// origin as (0, 0), matching `Context::screen_rect`.
pub(super) fn viewport_size(ctx: &Context) -> Vec2 {
    ctx.screen_rect().size()
}

pub(super) fn pointer_pos(ctx: &Context) -> Option<Pos2> {
    ctx.input(|i| i.pointer.latest_pos())
}

/// Untransformed top-left for a dialog of `size` centered in `viewport`.
/// Never above/left of the viewport origin, so an oversized dialog keeps
/// its header reachable.
pub(super) fn centered_min(viewport: Rect, size: Vec2) -> Pos2 {
    let min = viewport.center() - size / 2.0;
    min.max(viewport.min)
}
