// Example: keep the centred item in place while older items are prepended.
use carousel::{Carousel, CarouselOptions, Container, ItemDesc};
use carousel_adapter::{apply_anchor, capture_nearest_anchor};

fn main() {
    let mut keys: Vec<u64> = (100..110).collect();
    let extents = |n: usize| {
        (0..n)
            .map(|i| ItemDesc::new(30.0 + (i % 4) as f32 * 5.0))
            .collect::<Vec<_>>()
    };

    let mut c = Carousel::new(CarouselOptions::new(), Container::new(240.0))
        .expect("valid configuration");
    c.layout(extents(keys.len()));
    c.set_value(c.items()[4].theta);
    c.layout(extents(keys.len()));

    let anchor = capture_nearest_anchor(&c, |i| keys[i]).expect("an item is centred");
    println!("anchored key={} value={:.4}", anchor.key, c.value());

    // Prepend 3 older items.
    keys = [97, 98, 99].into_iter().chain(keys).collect();
    c.layout(extents(keys.len()));
    apply_anchor(&mut c, &anchor, |k| keys.iter().position(|x| x == k));
    c.layout(extents(keys.len()));

    let nearest = c.nearest_item().expect("an item is centred");
    println!(
        "after prepend: key={} value={:.4}",
        keys[nearest.source_index],
        c.value()
    );
}
