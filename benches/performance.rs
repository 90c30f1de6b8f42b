use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filterview::image_loader::default_image;
use filterview::processing::{apply_high_pass, equalize_and_chart, PixelBuffer};
use image::{Rgba, RgbaImage};

fn full_hd() -> PixelBuffer {
    PixelBuffer::from_rgba(RgbaImage::from_fn(1920, 1080, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    }))
}

fn bench_high_pass(c: &mut Criterion) {
    let test_image = full_hd();

    c.bench_function("high_pass_1920x1080", |b| {
        b.iter(|| {
            let _result = apply_high_pass(black_box(&test_image));
        })
    });
}

fn bench_equalize(c: &mut Criterion) {
    let test_image = full_hd();

    c.bench_function("equalize_and_chart_1920x1080", |b| {
        b.iter(|| {
            let _result = equalize_and_chart(black_box(&test_image));
        })
    });
}

fn bench_default_image(c: &mut Criterion) {
    c.bench_function("default_image_both_filters", |b| {
        b.iter(|| {
            let image = default_image();
            black_box(apply_high_pass(&image).ok());
            black_box(equalize_and_chart(&image).ok());
        })
    });
}

criterion_group!(benches, bench_high_pass, bench_equalize, bench_default_image);
criterion_main!(benches);
