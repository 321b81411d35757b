use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tincture::{interpolate, Color, Options, Space};

fn criterion_benchmark(c: &mut Criterion) {
    let first = Color::from_rgb(250, 128, 114);
    let second = Color::from_rgb(0, 68, 85);

    for space in [Space::Rgb, Space::Hsv, Space::Hsl, Space::Lab, Space::Luv] {
        let options = Options::new().with_ratio(0.3).in_space(space);
        c.bench_function(&format!("interpolate {}", space), |b| {
            b.iter(|| interpolate(black_box(&first), black_box(&second), options))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
