//! Draggable modal dialog for [`egui`].
//!
//! Renders a lightweight modal (dimmed backdrop, centered content window
//! with a header bar) whose content can be dragged by the header. Every
//! pointer move runs through a pure viewport-constraint policy, so the
//! dialog always stays fully inside the viewport.

#![forbid(unsafe_code)]

pub mod modal;

pub use modal::{ConstraintPolicy, DraggableModal, DraggableModalOptions};
