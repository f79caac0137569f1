use egui::{
    Align, Color32, Context, CursorIcon, Id, Layout, Order, PointerButton, Pos2, Rect, RichText,
    Sense, StrokeKind, UiBuilder, Vec2,
};

mod constraint;
mod geometry;
mod lifecycle;
mod options;
mod session;

#[cfg(test)]
mod modal_tests;

pub use constraint::ConstraintPolicy;
pub use options::DraggableModalOptions;

use lifecycle::Lifecycle;
use session::DragController;

const HEADER_HEIGHT: f32 = 28.0;
const CORNER_RADIUS: f32 = 6.0;
const BACKDROP_ALPHA: u8 = 96;

/// A modal dialog whose content window can be dragged by its header, always
/// clamped inside the viewport.
///
/// Current scope:
/// - One drag surface (the header) per dialog; translation only, no resize.
/// - Three viewport-constraint policies, strict edge-snap by default.
/// - The translation offset resets to identity whenever the dialog reopens.
///
/// Notes:
/// - The content rectangle is re-read from the live `Area` on every move,
///   so a dialog that changes size while open stays correctly constrained.
/// - All ids are salted with the instance id, so several simultaneously
///   open modals never collide.
/// - Without a title there is no header surface and dragging never
///   initializes; the dialog renders static.
#[derive(Debug)]
pub struct DraggableModal {
    pub options: DraggableModalOptions,

    id: Id,
    open: bool,
    controller: DragController,
    lifecycle: Lifecycle,
    last_content_rect: Option<Rect>,
}

impl DraggableModal {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self::new_with_options(id_salt, DraggableModalOptions::default())
    }

    pub fn new_with_options(id_salt: impl std::hash::Hash, options: DraggableModalOptions) -> Self {
        Self {
            options,
            id: Id::new(id_salt),
            open: false,
            controller: DragController::default(),
            lifecycle: Lifecycle::default(),
            last_content_rect: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The confirmed translation offset relative to the dialog's
    /// untransformed layout position. Zero until a drag moves the dialog.
    pub fn offset(&self) -> Vec2 {
        self.controller.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Shows the dialog (when open) and runs its drag handling.
    ///
    /// Call this every frame from your update loop, whether or not the
    /// dialog is open; visibility transitions are detected here.
    pub fn ui(&mut self, ctx: &Context, add_contents: impl FnOnce(&mut egui::Ui)) {
        let has_header = self.options.title.is_some();
        let reopened =
            self.lifecycle
                .observe_open(self.open, has_header, self.options.init_retry_frames);
        if reopened {
            // Fresh open cycle: identity transform, stale geometry dropped.
            self.controller.reset();
            self.last_content_rect = None;
        }

        if !self.open {
            self.controller.cancel();
            return;
        }

        let viewport = ctx.screen_rect();
        let armed = self.lifecycle.observe_content_rect(self.last_content_rect);

        let mut wants_close = false;

        if self.options.backdrop {
            let close_on_click = self.options.close_on_backdrop_click;
            egui::Area::new(self.id.with("modal_backdrop"))
                .order(Order::Middle)
                .fixed_pos(viewport.min)
                .interactable(true)
                .show(ctx, |ui| {
                    let resp = ui.allocate_response(viewport.size(), Sense::click());
                    ui.painter().rect_filled(
                        resp.rect,
                        0.0,
                        Color32::from_black_alpha(BACKDROP_ALPHA),
                    );
                    if close_on_click && resp.clicked() {
                        wants_close = true;
                    }
                });
        }

        let size = self.options.default_size;
        let base = self
            .options
            .default_pos
            .unwrap_or_else(|| geometry::centered_min(viewport, size));
        let pos = base + self.controller.offset();

        let title = self.options.title.clone();
        let closable = self.options.closable;
        let controller = &mut self.controller;

        let response = egui::Area::new(self.id.with("modal_content"))
            .order(Order::Foreground)
            .fixed_pos(pos)
            .interactable(true)
            .show(ctx, |ui| {
                let (alloc_rect, _alloc_resp) = ui.allocate_exact_size(size, Sense::hover());

                let visuals = ui.visuals();
                ui.painter()
                    .rect_filled(alloc_rect, CORNER_RADIUS, visuals.window_fill());
                ui.painter().rect_stroke(
                    alloc_rect,
                    CORNER_RADIUS,
                    visuals.widgets.noninteractive.bg_stroke,
                    StrokeKind::Inside,
                );

                let content_top = if let Some(title) = title {
                    let title_rect = Rect::from_min_size(
                        alloc_rect.min,
                        Vec2::new(alloc_rect.width(), HEADER_HEIGHT),
                    );

                    if armed {
                        let title_resp = ui.interact(
                            title_rect,
                            ui.id().with("modal_header"),
                            Sense::click_and_drag(),
                        );

                        if title_resp.drag_started_by(PointerButton::Primary)
                            && let Some(pointer) = geometry::pointer_pos(ctx)
                        {
                            controller.pointer_pressed(PointerButton::Primary, pointer);
                        }
                        if !controller.is_dragging() && title_resp.hovered() {
                            ctx.set_cursor_icon(CursorIcon::Grab);
                        }
                    }

                    let mut title_ui = ui.new_child(UiBuilder::new().max_rect(title_rect));
                    title_ui.style_mut().interaction.selectable_labels = false;
                    title_ui.horizontal(|ui| {
                        ui.add_space(4.0);
                        ui.label(RichText::new(title).strong());
                        if closable {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.button("✕").clicked() {
                                    wants_close = true;
                                }
                            });
                        }
                    });

                    title_rect.bottom()
                } else {
                    alloc_rect.top()
                };

                let content_rect = Rect::from_min_max(
                    Pos2::new(alloc_rect.left(), content_top),
                    alloc_rect.max,
                );
                let mut content_ui = ui.new_child(UiBuilder::new().max_rect(content_rect));
                content_ui.set_clip_rect(content_ui.clip_rect().intersect(content_rect));
                add_contents(&mut content_ui);
            });

        // The live rectangle for this frame; the constraint solver never
        // sees a cached size.
        let content_rect = response.response.rect;
        self.last_content_rect = Some(content_rect);

        if self.controller.is_dragging() {
            // Move/release interception happens at the context level, so
            // the drag survives the pointer leaving the header or dialog.
            ctx.set_cursor_icon(CursorIcon::Grabbing);

            if let Some(pointer) = geometry::pointer_pos(ctx) {
                self.controller.pointer_moved(
                    pointer,
                    content_rect,
                    geometry::viewport_size(ctx),
                    self.options.policy,
                );
            }
            if ctx.input(|i| i.pointer.primary_released()) {
                self.controller.pointer_released(PointerButton::Primary);
            }
            ctx.request_repaint();
        }

        if wants_close {
            self.open = false;
            self.controller.cancel();
        }
    }
}
