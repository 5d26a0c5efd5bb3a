// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_gallery::media::PhotoId;
use iced_gallery::ui::gallery::CellFrameMap;
use std::hint::black_box;

fn frame_map_with_cells(count: u64) -> CellFrameMap {
    let mut map = CellFrameMap::new();
    for i in 0..count {
        let col = (i % 3) as f32;
        let row = (i / 3) as f32;
        map.report(
            PhotoId(i),
            Rectangle::new(
                Point::new(col * 110.0, row * 110.0),
                Size::new(100.0, 100.0),
            ),
        );
    }
    map
}

fn hit_testing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing");

    // A screenful of cells, the expected working size.
    let viewport_map = frame_map_with_cells(30);
    group.bench_function("hits_viewport_sized_grid", |b| {
        b.iter(|| {
            let hits: Vec<_> = viewport_map.hits(black_box(Point::new(150.0, 150.0))).collect();
            black_box(hits)
        });
    });

    // Pathological size, documenting the linear-scan cost envelope.
    let large_map = frame_map_with_cells(3000);
    group.bench_function("hits_large_grid", |b| {
        b.iter(|| {
            let hits: Vec<_> = large_map.hits(black_box(Point::new(150.0, 150.0))).collect();
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(benches, hit_testing_benchmark);
criterion_main!(benches);
