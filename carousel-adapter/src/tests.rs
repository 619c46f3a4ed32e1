use crate::*;

use carousel::{CarouselOptions, DataSource, Delegate, Phase, Size, SyncPeer};
use std::sync::{Arc, Mutex};

fn controller(options: CarouselOptions) -> Controller<usize> {
    let ds = DataSource::fixed(5, Size::new(100.0, 80.0), |i| i).with_item_spacing(10.0);
    let mut c = Controller::new(options.with_circulating(true));
    c.carousel_mut().set_data_source(Some(ds));
    assert!(c.on_host_size(Size::new(300.0, 120.0)));
    c
}

#[test]
fn easing_curves_hit_endpoints() {
    for e in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(e.sample(0.0), 0.0);
        assert_eq!(e.sample(1.0), 1.0);
        assert_eq!(e.sample(0.5), 0.5);
    }
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 50.0);
    t.retarget(50, -20.0, 10);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.sample(60), -20.0);
    assert!(t.is_done(60));
    assert!(!t.is_done(59));
}

#[test]
fn controller_tween_drives_page_move() {
    let mut c = controller(CarouselOptions::new());
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    c.carousel_mut()
        .set_delegate(Delegate::default().with_did_change_index(move |i| sink.lock().unwrap().push(i)));

    assert_eq!(c.carousel().offset(), 455.0);
    let to = c.move_page(1, true, 0).unwrap();
    assert_eq!(to, 565.0);
    assert!(c.is_animating());

    let mut last = 455.0;
    for now_ms in [0u64, 30, 100, 150, 250] {
        let off = c.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert!(changes.lock().unwrap().is_empty());
    assert_eq!(c.carousel().phase(), Phase::ProgrammaticMove);

    assert_eq!(c.tick(DEFAULT_MOVE_DURATION_MS), Some(565.0));
    assert!(!c.is_animating());
    assert_eq!(c.carousel().current_display_index(), Some(1));
    assert_eq!(*changes.lock().unwrap(), vec![1]);
    assert_eq!(c.tick(1_000), None);
}

#[test]
fn wrapping_move_reports_rehomed_offset() {
    let mut c = controller(CarouselOptions::new()).with_animation(100, Easing::Linear);
    // display 0 -> 4 scrolls back into the leading padding (real 4)
    assert_eq!(c.move_page(4, true, 0), Some(345.0));
    assert_eq!(c.tick(50), Some(400.0));
    // settled at real 4, then rehomed to real 9
    assert_eq!(c.tick(100), Some(895.0));
    assert_eq!(c.carousel().current_real_index(), Some(9));
}

#[test]
fn drag_cancels_tween() {
    let mut c = controller(CarouselOptions::new());
    c.move_page(2, true, 0);
    c.tick(100);
    c.on_drag_begin();
    assert!(!c.is_animating());
    assert_eq!(c.carousel().phase(), Phase::Dragging);
    assert_eq!(c.tick(400), None);
    assert_eq!(c.carousel().current_display_index(), Some(0));
}

#[test]
fn interrupted_tween_returns_engine_to_idle() {
    let mut c = controller(CarouselOptions::new().with_auto_slide_interval(1.0));
    c.move_page(2, true, 0);
    c.tick(50);
    c.on_scroll(500.0);
    assert!(!c.is_animating());
    assert_eq!(c.carousel().phase(), Phase::Idle);

    let settled = c.on_scroll_end(500.0).unwrap();
    assert_eq!(settled.real_index, 5);
    assert_eq!(c.carousel().offset(), 500.0);

    // auto-slide keeps running after the interruption
    assert_eq!(c.tick(1_000), None);
    assert!(c.tick(2_000).is_some());
    assert!(c.is_animating());
}

#[test]
fn second_move_retargets_running_tween() {
    let mut c = controller(CarouselOptions::new());
    c.move_page(2, true, 0);
    let mid = c.tick(100).unwrap();
    assert!(mid > 455.0 && mid < 675.0);

    assert_eq!(c.move_page(3, true, 100), Some(785.0));
    assert!(c.is_animating());
    // the retargeted tween starts where the first one was
    assert_eq!(c.tick(100), Some(mid));
    assert_eq!(c.tick(400), Some(785.0));
    assert_eq!(c.carousel().current_display_index(), Some(3));
}

#[test]
fn drag_end_snaps_when_auto_aligning() {
    let mut c = controller(CarouselOptions::new().with_auto_align(true));
    c.on_drag_begin();
    c.on_scroll(160.0);
    let target = c.on_drag_end(169.0, 1.2);
    assert_eq!(target, 125.0);
    let settled = c.on_scroll_end(target).unwrap();
    assert_eq!(settled.real_index, 7);
    assert_eq!(settled.display_index, 2);
    assert!(settled.rehomed);
}

#[test]
fn tick_drives_auto_slide() {
    let mut c = controller(CarouselOptions::new().with_auto_slide_interval(1.0));
    assert_eq!(c.tick(0), None);
    assert_eq!(c.tick(999), None);
    assert_eq!(c.tick(1_000), Some(455.0));
    assert!(c.is_animating());
    assert_eq!(c.tick(1_300), Some(565.0));
    assert_eq!(c.carousel().current_display_index(), Some(1));

    // dragging suspends the timer
    c.on_drag_begin();
    assert_eq!(c.tick(2_300), None);
    assert_eq!(c.tick(5_000), None);
    c.on_drag_end(565.0, 0.0);
    c.on_scroll_end(565.0);
    assert_eq!(c.tick(6_000), None);
    assert!(c.tick(7_000).is_some());
}

#[test]
fn sync_group_mirrors_single_hop() {
    let mut group = SyncGroup::new();
    let a = group.push(controller(CarouselOptions::new()));
    let b = group.push(controller(CarouselOptions::new()));
    assert!(group.link(a, b));
    assert!(group.link(b, a));
    assert!(!group.link(a, SyncPeer(9)));
    assert!(!group.link(a, a));

    group.get_mut(a).unwrap().move_page(3, false, 0);
    assert_eq!(group.dispatch(), 1);
    assert_eq!(group.get(b).unwrap().carousel().current_display_index(), Some(3));
    assert_eq!(group.dispatch(), 0);

    group.get_mut(b).unwrap().move_page(1, true, 0);
    assert_eq!(group.tick(150), 0);
    assert_eq!(group.tick(300), 1);
    assert_eq!(group.get(a).unwrap().carousel().current_display_index(), Some(1));
    assert_eq!(group.dispatch(), 0);

    group.unlink(a);
    group.get_mut(a).unwrap().move_page(4, false, 0);
    assert_eq!(group.dispatch(), 0);
    assert_eq!(group.get(b).unwrap().carousel().current_display_index(), Some(1));
}
