// Example: a host frame loop with a drag gesture, an inertial throw and the snap that follows.
use carousel::{Carousel, CarouselOptions, Container, ItemDesc, ScrollInput};

fn main() {
    let items: Vec<ItemDesc> = (0..12)
        .map(|i| ItemDesc::new(40.0 + (i % 3) as f32 * 10.0))
        .collect();
    let mut c = Carousel::new(CarouselOptions::new(), Container::new(300.0))
        .expect("valid configuration");
    c.layout(items.iter().copied());

    let dt = 1.0 / 60.0;

    // Simulate a pointer drag: four frames moving 12 units each.
    c.on_potential_drag_begin();
    c.on_drag_begin(12.0, dt);
    for _ in 0..2 {
        c.on_drag(12.0, dt);
        c.layout_if_dirty(items.iter().copied());
    }
    c.on_drag_end(12.0, dt);
    println!("released at value={:.3} velocity={:.3}", c.value(), c.velocity());

    for frame in 0..240 {
        c.tick(dt);
        c.layout_if_dirty(items.iter().copied());
        if frame % 20 == 0 {
            println!(
                "frame={frame} value={:.4} velocity={:.4} nearest={:?}",
                c.value(),
                c.velocity(),
                c.nearest_index()
            );
        }
    }

    let nearest = c.nearest_item().expect("items are laid out");
    println!(
        "settled: value={:.4} nearest={} theta={:.4}",
        c.value(),
        nearest.index,
        nearest.theta
    );
}
