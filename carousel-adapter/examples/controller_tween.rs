use carousel::{CarouselOptions, Container, ItemDesc};
use carousel_adapter::{Controller, Easing};

fn main() {
    let items: Vec<ItemDesc> = (0..20).map(|_| ItemDesc::new(50.0)).collect();
    let mut c = Controller::new(CarouselOptions::new(), Container::new(300.0))
        .expect("valid configuration");
    c.layout_if_dirty(items.iter().copied());

    let to = c
        .start_tween_to_item(7, 0, 240, Easing::EaseInOutCubic)
        .expect("item 7 exists");

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if c.tick(now_ms) {
            c.layout_if_dirty(items.iter().copied());
        }
        println!(
            "t={now_ms}ms value={:.4} nearest={:?}",
            c.carousel().value(),
            c.carousel().nearest_index()
        );
    }
    println!("done: value={:.4} target={to:.4}", c.carousel().value());
}
