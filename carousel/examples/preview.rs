// Example: how many slots of a given size fit around the cylinder.
use carousel::{Carousel, CarouselOptions, Container, ItemDesc};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new().with_spacing(8.0), Container::new(200.0))
        .expect("valid configuration");
    c.layout([50.0, 50.0, 50.0].map(ItemDesc::new));

    let mut real = 0;
    let mut placeholders = 0;
    c.for_each_preview_slot(50.0, |slot| {
        if slot.placeholder {
            placeholders += 1;
        } else {
            real += 1;
        }
    });
    println!("real={real} placeholders={placeholders}");
}
