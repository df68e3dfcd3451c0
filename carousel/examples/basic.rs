use carousel::{Carousel, CarouselOptions, Container, ItemDesc};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new().with_alpha(0.5), Container::new(400.0))
        .expect("valid configuration");

    let extents = [60.0, 80.0, 60.0, 120.0, 60.0];
    c.layout(extents.iter().copied().map(ItemDesc::new));

    println!("radius={} total_arc={:.3}", c.radius(), c.total_arc());
    c.for_each_item(|it| {
        println!(
            "item {} theta={:.3} pos={:?} opacity={:?}",
            it.index, it.theta, it.pose.translation, it.opacity
        );
    });
    println!("nearest={:?}", c.nearest_index());
}
