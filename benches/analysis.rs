use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shade::{
    image::{Rgb, RgbImage},
    Analysis, Histogram,
};

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, ((x + y) % 256) as u8])
    })
}

fn benchmark_analysis(c: &mut Criterion) {
    let photo = gradient(1024, 768);
    c.bench_function("analyze_1024x768", |b| {
        b.iter(|| Analysis::from_image(black_box(photo.clone())).generate())
    });

    let grid = gradient(128, 128);
    c.bench_function("histogram_128", |b| b.iter(|| Histogram::from_grid(black_box(&grid), 20)));
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
