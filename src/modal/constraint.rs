use egui::{Rect, Vec2};

/// Maps a proposed translation offset to one that keeps the dialog's
/// rectangle inside the viewport.
///
/// All variants read the dialog's size from the live rectangle passed to
/// [`Self::constrain`], never from a cached value, so a dialog that resizes
/// while open stays constrained correctly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintPolicy {
    /// Snap the overshooting edge exactly onto the viewport edge, per axis.
    ///
    /// Derives the untransformed rectangle by subtracting the currently
    /// applied offset from the live one, so the dialog stays fully visible
    /// for any starting layout position. The two axes are independent: a
    /// diagonal drag that overshoots only one edge is corrected on that
    /// axis alone.
    #[default]
    StrictEdgeSnap,

    /// Clamp the raw offset to `[0, viewport - size]` per axis.
    ///
    /// Only exact when the untransformed top-left sits at the viewport
    /// origin; kept as the cheaper approximation it is.
    AxisClamp,

    /// Clamp the dialog's *center* to stay within the viewport, then back
    /// out the equivalent offset.
    ///
    /// Feels softer near the edges than [`Self::StrictEdgeSnap`]; clamps
    /// the center rather than the edges, which differs at the boundary for
    /// asymmetric layouts.
    CenterClamp,
}

impl ConstraintPolicy {
    /// Corrects `proposed` so the dialog rectangle stays inside the viewport.
    ///
    /// - `rect`: the content rectangle as currently rendered, i.e. with
    ///   `current` already applied.
    /// - `current`: the offset that produced `rect`.
    /// - `viewport`: viewport size in points, origin at (0, 0).
    pub fn constrain(self, proposed: Vec2, rect: Rect, current: Vec2, viewport: Vec2) -> Vec2 {
        if !(rect.is_finite() && viewport.x.is_finite() && viewport.y.is_finite()) {
            return proposed;
        }

        match self {
            Self::StrictEdgeSnap => constrain_edge_snap(proposed, rect, current, viewport),
            Self::AxisClamp => constrain_axis_clamp(proposed, rect, viewport),
            Self::CenterClamp => constrain_center_clamp(proposed, rect, current, viewport),
        }
    }
}

fn constrain_edge_snap(proposed: Vec2, rect: Rect, current: Vec2, viewport: Vec2) -> Vec2 {
    // Edges of the untransformed rectangle, with the applied offset backed
    // out. Re-derived from the live rect every call, so external layout
    // shifts mid-drag (e.g. a viewport resize) are picked up.
    let original_min = rect.min - current;
    let original_max = rect.max - current;

    let candidate_min = original_min + proposed;
    let candidate_max = original_max + proposed;

    let x = if candidate_min.x < 0.0 {
        -original_min.x
    } else if candidate_max.x > viewport.x {
        viewport.x - original_max.x
    } else {
        proposed.x
    };

    let y = if candidate_min.y < 0.0 {
        -original_min.y
    } else if candidate_max.y > viewport.y {
        viewport.y - original_max.y
    } else {
        proposed.y
    };

    Vec2::new(x, y)
}

fn constrain_axis_clamp(proposed: Vec2, rect: Rect, viewport: Vec2) -> Vec2 {
    let max = (viewport - rect.size()).max(Vec2::ZERO);
    proposed.clamp(Vec2::ZERO, max)
}

fn constrain_center_clamp(proposed: Vec2, rect: Rect, current: Vec2, viewport: Vec2) -> Vec2 {
    let half = rect.size() / 2.0;
    let center = rect.center();

    // Oversized dialogs collapse the valid band to a point; keep min <= max.
    let max_center = (viewport - half).max(half);

    let new_center = center + (proposed - current);
    let clamped = egui::pos2(
        new_center.x.clamp(half.x, max_center.x),
        new_center.y.clamp(half.y, max_center.y),
    );

    current + (clamped - center)
}
