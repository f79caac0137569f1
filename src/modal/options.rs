use egui::{Pos2, Vec2};

use super::constraint::ConstraintPolicy;

/// Options for [`super::DraggableModal`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableModalOptions {
    /// Title shown in the header bar.
    ///
    /// The header is the only drag surface: without a title the dialog
    /// renders without a header and cannot be dragged at all.
    pub title: Option<String>,

    /// Show a close button at the right end of the header.
    pub closable: bool,

    /// Dim the rest of the viewport behind the dialog.
    pub backdrop: bool,

    /// Close the dialog when the backdrop is clicked.
    ///
    /// Only meaningful when `backdrop` is enabled.
    pub close_on_backdrop_click: bool,

    /// Content size in points.
    ///
    /// The constraint solver always reads the *live* rendered rectangle, so
    /// changing this while the dialog is open keeps dragging correct.
    pub default_size: Vec2,

    /// Fixed top-left for the untransformed dialog, before any drag offset.
    ///
    /// `None` centers the dialog in the viewport.
    pub default_pos: Option<Pos2>,

    /// Active viewport-constraint policy.
    pub policy: ConstraintPolicy,

    /// Frames to wait for the content rect to be measured after opening
    /// before giving up on drag initialization for this open cycle.
    ///
    /// The content `Area` is measured one frame after it first shows, so
    /// this normally resolves on the second frame; the budget only matters
    /// when the host throttles or skips frames.
    pub init_retry_frames: u8,
}

impl Default for DraggableModalOptions {
    fn default() -> Self {
        Self {
            title: None,
            closable: true,
            backdrop: true,
            close_on_backdrop_click: false,
            default_size: Vec2::new(420.0, 260.0),
            default_pos: None,
            policy: ConstraintPolicy::default(),
            init_retry_frames: 8,
        }
    }
}
