#![allow(clippy::float_cmp)]

use super::*;

const FRAME: f64 = 1.0 / 60.0;

const ITEMS: &[VisualItem] = &[
    VisualItem {
        key: 1,
        preview_image_url: "https://shots.test/home.png",
        target_url: "https://example.test/",
        label: "Home",
    },
    VisualItem {
        key: 2,
        preview_image_url: "https://shots.test/blog.png",
        target_url: "https://example.test/blog",
        label: "Blog",
    },
    VisualItem {
        key: 3,
        preview_image_url: "https://shots.test/gallery.png",
        target_url: "https://example.test/gallery",
        label: "Gallery",
    },
];

fn large() -> RevealState {
    let mut state = RevealState::new(ITEMS);
    state.resize(1024.0);
    state
}

fn run(state: &mut RevealState, frames: usize) {
    for _ in 0..frames {
        state.tick(FRAME);
    }
}

fn settle(state: &mut RevealState) {
    for _ in 0..1200 {
        if !state.tick(FRAME) {
            return;
        }
    }
    panic!("reveal state never settled");
}

// =============================================================
// Focus state machine
// =============================================================

#[test]
fn starts_idle_with_no_panel() {
    let state = large();
    assert_eq!(state.phase(), RevealPhase::Idle);
    assert!(state.focused().is_none());
    assert!(state.panel().is_none());
    assert!(!state.is_animating());
}

#[test]
fn hover_enter_previews_item() {
    let mut state = large();
    assert!(state.hover_enter(1));
    assert_eq!(state.phase(), RevealPhase::Previewing(1));
    assert!(state.is_focused(1));
    assert!(!state.is_focused(2));
    assert_eq!(state.focused().map(|item| item.label), Some("Home"));
}

#[test]
fn hover_enter_unknown_key_is_rejected() {
    let mut state = large();
    assert!(!state.hover_enter(99));
    assert_eq!(state.phase(), RevealPhase::Idle);

    state.hover_enter(2);
    assert!(!state.hover_enter(99));
    assert_eq!(state.phase(), RevealPhase::Previewing(2));
}

#[test]
fn moving_between_items_never_passes_through_idle() {
    let mut state = large();
    state.pointer_move(100.0, 100.0);
    state.hover_enter(1);
    settle(&mut state);

    state.hover_enter(2);
    assert_eq!(state.phase(), RevealPhase::Previewing(2));
    let panel = state.panel().expect("panel stays mounted");
    assert_eq!(panel.item.key, 2);
    assert_eq!(panel.phase, PresencePhase::Visible);
    assert_eq!(state.exits_started(), 0);

    run(&mut state, 30);
    assert!(state.panel().is_some());
    assert_eq!(state.exits_started(), 0);
}

#[test]
fn leaving_container_after_hover_clears_focus_and_exits_once() {
    let mut state = large();
    state.hover_enter(1);
    settle(&mut state);

    state.leave_container();
    assert_eq!(state.phase(), RevealPhase::Idle);
    assert_eq!(state.exits_started(), 1);

    // The exit plays out with the last item still inside the panel.
    let exiting = state.panel().expect("exit keeps panel mounted");
    assert_eq!(exiting.phase, PresencePhase::Exiting);
    assert_eq!(exiting.item.key, 1);

    state.leave_container();
    assert_eq!(state.exits_started(), 1);

    settle(&mut state);
    assert!(state.panel().is_none());
    assert_eq!(state.exits_started(), 1);
}

#[test]
fn leaving_container_without_hover_is_idle_and_silent() {
    let mut state = large();
    state.leave_container();
    assert_eq!(state.phase(), RevealPhase::Idle);
    assert_eq!(state.exits_started(), 0);
    assert!(state.panel().is_none());
}

#[test]
fn rehover_during_exit_finishes_exit_before_reentering() {
    let mut state = large();
    state.hover_enter(1);
    settle(&mut state);
    state.leave_container();
    run(&mut state, 2);

    state.hover_enter(3);
    assert_eq!(state.phase(), RevealPhase::Previewing(3));
    let panel = state.panel().expect("still exiting");
    assert_eq!(panel.phase, PresencePhase::Exiting);
    assert_eq!(panel.item.key, 1);

    let mut saw_unmount = false;
    for _ in 0..1200 {
        state.tick(FRAME);
        match state.panel() {
            None => saw_unmount = true,
            Some(frame) if frame.phase == PresencePhase::Entering => break,
            Some(_) => {}
        }
    }
    assert!(saw_unmount || state.presence_phase() == PresencePhase::Entering);
    let panel = state.panel().expect("re-entered");
    assert_eq!(panel.item.key, 3);
    assert_eq!(state.exits_started(), 1);
}

// =============================================================
// Panel geometry & animation
// =============================================================

#[test]
fn panel_enters_from_faded_and_shrunk() {
    let mut state = large();
    state.pointer_move(400.0, 300.0);
    state.hover_enter(1);

    let first = state.panel().expect("mounted on hover");
    assert_eq!(first.phase, PresencePhase::Entering);
    assert_eq!(first.opacity, 0.0);
    assert!((first.scale - 0.8).abs() < 1e-9);
    assert_eq!(first.item.target_url, "https://example.test/");

    settle(&mut state);
    let rest = state.panel().expect("visible");
    assert_eq!(rest.phase, PresencePhase::Visible);
    assert_eq!(rest.opacity, 1.0);
    assert_eq!(rest.scale, 1.0);
}

#[test]
fn panel_center_trails_pointer() {
    let mut state = large();
    state.pointer_move(100.0, 100.0);
    state.hover_enter(1);
    settle(&mut state);
    assert_eq!(state.panel().map(|p| p.center), Some(Point::new(100.0, 100.0)));

    state.pointer_move(500.0, 100.0);
    state.tick(FRAME);
    let center = state.panel().map(|p| p.center).expect("panel");
    assert!(center.x > 100.0 && center.x < 500.0);
    assert_eq!(state.pointer(), Point::new(500.0, 100.0));

    settle(&mut state);
    assert_eq!(state.smoothed(), Point::new(500.0, 100.0));
}

#[test]
fn pointer_motion_keeps_animating_until_settled() {
    let mut state = large();
    state.pointer_move(0.0, 0.0);
    assert!(!state.is_animating());
    state.pointer_move(50.0, 0.0);
    assert!(state.is_animating());
    settle(&mut state);
    assert!(!state.is_animating());
}

// =============================================================
// Viewport modes
// =============================================================

#[test]
fn breakpoint_toggles_modes_exactly() {
    let mut state = RevealState::new(ITEMS);
    assert_eq!(state.resize(767.0), Some(ViewportClass::Small));
    assert!(state.shows_inline_previews());
    assert_eq!(state.resize(768.0), Some(ViewportClass::Large));
    assert!(!state.shows_inline_previews());
    assert_eq!(state.resize(1440.0), None);
}

#[test]
fn small_viewport_never_mounts_panel() {
    let mut state = RevealState::with_viewport(ITEMS, ViewportClass::Small);
    assert!(state.hover_enter(2));
    assert!(state.is_focused(2));
    run(&mut state, 30);
    assert!(state.panel().is_none());
    assert!(state.shows_inline_previews());
}

#[test]
fn shrinking_below_breakpoint_unmounts_open_panel() {
    let mut state = large();
    state.hover_enter(1);
    settle(&mut state);
    assert!(state.panel().is_some());

    state.resize(600.0);
    assert!(state.panel().is_none());
    assert!(state.shows_inline_previews());
    assert_eq!(state.phase(), RevealPhase::Previewing(1));
}

#[test]
fn growing_past_breakpoint_restores_panel_for_focused_item() {
    let mut state = RevealState::with_viewport(ITEMS, ViewportClass::Small);
    state.hover_enter(3);
    state.resize(1024.0);
    let panel = state.panel().expect("focused item previews on large");
    assert_eq!(panel.item.key, 3);
    assert_eq!(panel.phase, PresencePhase::Entering);
}

#[test]
fn modes_are_mutually_exclusive_through_a_session() {
    let mut state = large();
    let widths = [1024.0, 700.0, 900.0, 767.0, 768.0, 320.0, 1280.0];
    state.hover_enter(1);
    for width in widths {
        state.resize(width);
        for _ in 0..5 {
            state.tick(FRAME);
            let floating = state.panel().is_some();
            assert!(!(floating && state.shows_inline_previews()), "both modes active at {width}px");
        }
    }
}

// =============================================================
// Worked example
// =============================================================

#[test]
fn whitespace_inside_container_keeps_panel_mounted() {
    let mut state = RevealState::new(ITEMS);
    state.resize(1024.0);
    state.pointer_move(200.0, 80.0);
    state.hover_enter(1);

    let panel = state.panel().expect("panel mounted");
    assert_eq!(panel.item.target_url, "https://example.test/");

    // Pointer drifts off Home into whitespace but stays over the container:
    // only pointer moves arrive, no container leave.
    state.pointer_move(200.0, 140.0);
    run(&mut state, 60);
    assert_eq!(state.phase(), RevealPhase::Previewing(1));
    assert!(state.panel().is_some());
    assert_eq!(state.exits_started(), 0);
}

#[test]
fn empty_item_list_stays_idle() {
    let mut state = RevealState::new(&[]);
    assert!(!state.hover_enter(1));
    state.leave_container();
    assert!(state.items().is_empty());
    assert!(state.panel().is_none());
}
