use crate::*;

use carousel::{
    Carousel, CarouselOptions, Container, ItemDesc, MovementType, angular_half_width,
};

fn source(extents: &[f32]) -> Vec<ItemDesc> {
    extents.iter().copied().map(ItemDesc::new).collect()
}

fn controller() -> Controller {
    Controller::new(CarouselOptions::new(), Container::new(100.0)).unwrap()
}

#[test]
fn tween_centres_an_item_and_snap_holds_it() {
    let items = source(&[10.0, 20.0, 10.0, 20.0]);
    let mut c = controller();
    c.layout_if_dirty(items.iter().copied());

    let to = c.start_tween_to_item(2, 0, 100, Easing::SmoothStep).unwrap();
    assert_eq!(to, c.carousel().items()[2].theta);
    assert_eq!(c.carousel().nearest_index(), Some(2));

    let mut last = c.carousel().value();
    for now_ms in [0u64, 16, 32, 48, 64, 80, 96, 112] {
        c.tick(now_ms);
        c.layout_if_dirty(items.iter().copied());
        assert!(c.carousel().value() >= last);
        last = c.carousel().value();
    }
    assert!(!c.is_animating());
    assert_eq!(c.carousel().value(), to);
    assert_eq!(c.carousel().nearest_index(), Some(2));

    for now_ms in (128u64..1000).step_by(16) {
        c.tick(now_ms);
        c.layout_if_dirty(items.iter().copied());
    }
    assert!((c.carousel().value() - to).abs() < 1e-5);
    assert_eq!(c.carousel().nearest_index(), Some(2));
}

#[test]
fn input_cancels_the_tween() {
    let items = source(&[10.0, 20.0, 10.0]);
    let mut c = controller();
    c.layout_if_dirty(items.iter().copied());

    c.start_tween_to_item(2, 0, 200, Easing::Linear).unwrap();
    c.tick(50);
    assert!(c.is_animating());

    c.on_scroll(1.0);
    assert!(!c.is_animating());
}

#[test]
fn tween_rejects_unknown_items() {
    let mut c = controller();
    c.layout_if_dirty(source(&[10.0]));
    assert!(c.start_tween_to_item(5, 0, 100, Easing::Linear).is_err());
    assert!(c.scroll_to_item(1).is_err());
    assert!(!c.is_animating());
}

#[test]
fn scroll_to_item_jumps_immediately() {
    let items = source(&[10.0, 20.0, 10.0]);
    let mut c = controller();
    c.layout_if_dirty(items.iter().copied());

    let to = c.scroll_to_item(1).unwrap();
    assert_eq!(c.carousel().value(), to);
    assert!(c.carousel().is_dirty());
    c.layout_if_dirty(items.iter().copied());
    assert_eq!(c.carousel().nearest_index(), Some(1));
}

/// Unrestricted and without snap, so only a leftover throw could move the value.
fn thrown(items: &[ItemDesc]) -> Controller {
    let options = CarouselOptions::new()
        .with_movement_type(MovementType::Unrestricted)
        .with_snap(None);
    let mut c = Controller::new(options, Container::new(100.0)).unwrap();
    c.layout_if_dirty(items.iter().copied());

    c.on_potential_drag_begin(0);
    c.on_drag_begin(0.0, 16);
    c.on_drag_end(5.0, 32);
    assert!(c.carousel().velocity() > 1.0);
    c
}

#[test]
fn tween_drops_a_leftover_throw() {
    let items = source(&[10.0, 20.0, 10.0, 20.0, 10.0]);
    let mut c = thrown(&items);

    let to = c.start_tween_to_item(3, 32, 100, Easing::Linear).unwrap();
    assert_eq!(c.carousel().velocity(), 0.0);

    let mut now_ms = 32;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        c.layout_if_dirty(items.iter().copied());
    }
    assert_eq!(c.carousel().value(), to);

    for _ in 0..10 {
        now_ms += 16;
        c.tick(now_ms);
        c.layout_if_dirty(items.iter().copied());
    }
    assert_eq!(c.carousel().value(), to);
    assert_eq!(c.carousel().nearest_index(), Some(3));
}

#[test]
fn scroll_to_item_drops_a_leftover_throw() {
    let items = source(&[10.0, 20.0, 10.0, 20.0, 10.0]);
    let mut c = thrown(&items);

    let to = c.scroll_to_item(3).unwrap();
    assert_eq!(c.carousel().velocity(), 0.0);

    for now_ms in (48u64..=208).step_by(16) {
        c.tick(now_ms);
        c.layout_if_dirty(items.iter().copied());
    }
    assert_eq!(c.carousel().value(), to);
    assert_eq!(c.carousel().nearest_index(), Some(3));
}

#[test]
fn drag_timestamps_become_delta_times() {
    let mut c = controller();
    let r = c.carousel().radius();

    c.on_potential_drag_begin(1_000);
    c.on_drag_begin(4.0, 1_010);
    assert_eq!(c.carousel().velocity(), angular_half_width(4.0, r) / 0.01);

    c.on_drag(6.0, 1_030);
    c.on_drag_end(2.0, 1_050);
    assert!(!c.carousel().is_dragging());
    assert_eq!(c.carousel().velocity(), angular_half_width(2.0, r) / 0.02);
}

#[test]
fn long_frames_are_capped() {
    let mut c = Controller::new(
        CarouselOptions::new()
            .with_movement_type(carousel::MovementType::Unrestricted)
            .with_snap(None),
        Container::new(100.0),
    )
    .unwrap();
    c.carousel_mut().restore(carousel::CarouselSnapshot {
        value: 0.0,
        velocity: 2.0,
    });

    c.tick(0);
    let after_first = c.carousel().value();
    let v = 2.0 * 0.135f32.powf(DEFAULT_DELTA_TIME);
    assert!((after_first - v * DEFAULT_DELTA_TIME).abs() < 1e-6);

    c.tick(60_000);
    let v2 = v * 0.135f32.powf(MAX_DELTA_TIME);
    assert!((c.carousel().value() - (after_first + v2 * MAX_DELTA_TIME)).abs() < 1e-5);
}

#[test]
fn anchor_keeps_the_centred_item_across_a_prepend() {
    let keys_before = [100u32, 101, 102];
    let items_before = source(&[10.0, 20.0, 10.0]);
    let mut c = Carousel::new(CarouselOptions::new(), Container::new(100.0)).unwrap();
    c.layout(items_before.iter().copied());
    c.set_value(c.items()[1].theta);
    c.layout(items_before.iter().copied());

    let anchor = capture_nearest_anchor(&c, |i| keys_before[i]).unwrap();
    assert_eq!(anchor.key, 101);
    assert!(anchor.offset.abs() < 1e-6);

    // Prepend two items: the anchored item moves further along the arc.
    let keys_after = [200u32, 201, 100, 101, 102];
    let items_after = source(&[30.0, 15.0, 10.0, 20.0, 10.0]);
    c.layout(items_after.iter().copied());
    assert_ne!(c.nearest_item().map(|it| it.source_index), Some(3));

    assert!(apply_anchor(&mut c, &anchor, |k| {
        keys_after.iter().position(|x| x == k)
    }));
    c.layout(items_after.iter().copied());
    let nearest = c.nearest_item().unwrap();
    assert_eq!(nearest.source_index, 3);
    assert!(nearest.relative_theta.abs() < 1e-5);

    assert!(!apply_anchor(&mut c, &ItemAnchor { key: 999u32, offset: 0.0 }, |k| {
        keys_after.iter().position(|x| x == k)
    }));
}

#[test]
fn tween_samples_and_retargets() {
    let mut t = Tween::new(0.0, 1.0, 100, 100, Easing::Linear);
    assert_eq!(t.sample(100), 0.0);
    assert!((t.sample(150) - 0.5).abs() < 1e-6);
    assert_eq!(t.sample(500), 1.0);

    t.retarget(150, 2.0, 100);
    assert!((t.from - 0.5).abs() < 1e-6);
    assert_eq!(t.start_ms, 150);
    assert!(!t.is_done(200));
    assert!(t.is_done(250));

    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert_eq!(Easing::EaseInOutCubic.sample(1.0), 1.0);
}
