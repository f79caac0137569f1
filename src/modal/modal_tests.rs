use egui::{Context, PointerButton, Pos2, Rect, Vec2};

use super::options::DraggableModalOptions;
use super::DraggableModal;

fn begin_pass(ctx: &Context) {
    let raw = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0))),
        ..Default::default()
    };
    ctx.begin_pass(raw);
}

fn run_frame(ctx: &Context, modal: &mut DraggableModal) {
    begin_pass(ctx);
    modal.ui(ctx, |ui| {
        ui.label("body");
    });
    let _ = ctx.end_pass();
}

fn titled_modal(salt: &str) -> DraggableModal {
    DraggableModal::new_with_options(
        salt,
        DraggableModalOptions {
            title: Some("Settings".to_owned()),
            ..Default::default()
        },
    )
}

#[test]
fn drag_arms_on_the_second_frame_after_opening() {
    let ctx = Context::default();
    let mut modal = titled_modal("arms_second_frame");
    modal.open();

    run_frame(&ctx, &mut modal);
    assert!(!modal.lifecycle.is_armed(), "no measured rect on the first frame");
    assert!(modal.last_content_rect.is_some(), "first frame must measure the content");

    run_frame(&ctx, &mut modal);
    assert!(modal.lifecycle.is_armed());
}

#[test]
fn reopening_resets_the_offset_to_identity() {
    let ctx = Context::default();
    let mut modal = titled_modal("reset_on_reopen");
    modal.open();
    run_frame(&ctx, &mut modal);
    run_frame(&ctx, &mut modal);

    // A previous session left the dialog displaced.
    let rect = modal.last_content_rect.expect("content rect must be measured");
    modal
        .controller
        .pointer_pressed(PointerButton::Primary, Pos2::new(500.0, 400.0));
    modal.controller.pointer_moved(
        Pos2::new(560.0, 430.0),
        rect,
        Vec2::new(1000.0, 800.0),
        modal.options.policy,
    );
    modal.controller.pointer_released(PointerButton::Primary);
    assert_eq!(modal.offset(), Vec2::new(60.0, 30.0));

    modal.close();
    run_frame(&ctx, &mut modal);
    assert_eq!(modal.offset(), Vec2::new(60.0, 30.0), "close alone keeps the offset");

    modal.open();
    run_frame(&ctx, &mut modal);
    assert_eq!(modal.offset(), Vec2::ZERO);
}

#[test]
fn closing_mid_drag_cancels_the_session() {
    let ctx = Context::default();
    let mut modal = titled_modal("close_mid_drag");
    modal.open();
    run_frame(&ctx, &mut modal);
    run_frame(&ctx, &mut modal);

    modal
        .controller
        .pointer_pressed(PointerButton::Primary, Pos2::new(500.0, 400.0));
    assert!(modal.is_dragging());

    modal.close();
    run_frame(&ctx, &mut modal);
    assert!(!modal.is_dragging());
}

#[test]
fn untitled_dialog_never_arms_dragging() {
    let ctx = Context::default();
    let mut modal = DraggableModal::new("untitled");
    modal.open();

    for _ in 0..4 {
        run_frame(&ctx, &mut modal);
    }

    assert!(!modal.lifecycle.is_armed());
    assert_eq!(modal.offset(), Vec2::ZERO);
}

#[test]
fn closed_dialog_renders_nothing_and_measures_nothing() {
    let ctx = Context::default();
    let mut modal = titled_modal("stays_closed");

    run_frame(&ctx, &mut modal);
    assert!(modal.last_content_rect.is_none());
    assert!(!modal.lifecycle.is_armed());
}

#[test]
fn two_open_modals_keep_independent_offsets() {
    let ctx = Context::default();
    let mut first = titled_modal("instance_a");
    let mut second = titled_modal("instance_b");
    first.open();
    second.open();

    for _ in 0..2 {
        begin_pass(&ctx);
        first.ui(&ctx, |ui| {
            ui.label("a");
        });
        second.ui(&ctx, |ui| {
            ui.label("b");
        });
        let _ = ctx.end_pass();
    }

    let rect = first.last_content_rect.expect("content rect must be measured");
    first
        .controller
        .pointer_pressed(PointerButton::Primary, Pos2::new(500.0, 400.0));
    first.controller.pointer_moved(
        Pos2::new(520.0, 410.0),
        rect,
        Vec2::new(1000.0, 800.0),
        first.options.policy,
    );
    first.controller.pointer_released(PointerButton::Primary);

    assert_eq!(first.offset(), Vec2::new(20.0, 10.0));
    assert_eq!(second.offset(), Vec2::ZERO);
}
