use egui::{PointerButton, Pos2, Rect, Vec2};

use super::constraint::ConstraintPolicy;

/// One primary-button press → release interval on the header.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Pointer position at drag start, in viewport coordinates.
    pointer_origin: Pos2,
    /// Confirmed translation offset at drag start.
    offset_origin: Vec2,
}

/// Converts header pointer events into a viewport-constrained translation
/// offset.
///
/// Two states: idle (`session == None`) and dragging. At most one session
/// exists at a time; a press while one is active is ignored. Moves and
/// releases with no active session are no-ops, so stray events after
/// teardown are harmless.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct DragController {
    offset: Vec2,
    session: Option<DragSession>,
}

impl DragController {
    /// The confirmed offset, relative to the dialog's untransformed layout
    /// position. Survives between drags until [`Self::reset`].
    pub(super) fn offset(&self) -> Vec2 {
        self.offset
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Idle → dragging. Only the primary button starts a session.
    pub(super) fn pointer_pressed(&mut self, button: PointerButton, pointer: Pos2) {
        if button != PointerButton::Primary || self.session.is_some() {
            return;
        }
        log::trace!("drag session start at {pointer:?}");
        self.session = Some(DragSession {
            pointer_origin: pointer,
            offset_origin: self.offset,
        });
    }

    /// One pointer move while dragging.
    ///
    /// `content_rect` must be the dialog content's rectangle as currently
    /// rendered (with the confirmed offset applied); it is re-read from the
    /// live widget every move rather than cached at drag start.
    pub(super) fn pointer_moved(
        &mut self,
        pointer: Pos2,
        content_rect: Rect,
        viewport: Vec2,
        policy: ConstraintPolicy,
    ) {
        let Some(session) = self.session else {
            return;
        };
        let proposed = session.offset_origin + (pointer - session.pointer_origin);
        self.offset = policy.constrain(proposed, content_rect, self.offset, viewport);
    }

    /// Dragging → idle. Only the primary button ends a session; the
    /// confirmed offset keeps its last value.
    pub(super) fn pointer_released(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if self.session.take().is_some() {
            log::trace!("drag session end, offset {:?}", self.offset);
        }
    }

    /// Cancels any active session and returns the offset to identity.
    ///
    /// Used on closed → open transitions and on teardown.
    pub(super) fn reset(&mut self) {
        self.session = None;
        self.offset = Vec2::ZERO;
    }

    /// Cancels any active session without touching the offset (the dialog
    /// closed mid-drag; the reset happens when it reopens).
    pub(super) fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::trace!("drag session cancelled");
        }
    }
}
