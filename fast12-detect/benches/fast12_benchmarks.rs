use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast12_detect::{
    CornerScorer, DetectorBuilder, FeatureScanner, IntensityGrid, Limit, NonMaxSuppressor,
    SegmentTest,
};

/// Paint a peak that falls off with squared distance out to radius 2
fn stamp(data: &mut [i32], width: usize, height: usize, cx: usize, cy: usize, peak: i32) {
    for dy in -2i32..=2 {
        for dx in -2i32..=2 {
            let d2 = dx * dx + dy * dy;
            let x = (cx as i32 + dx) as usize;
            let y = (cy as i32 + dy) as usize;
            if d2 <= 4 && x < width && y < height {
                data[y * width + x] = peak - 12 * d2;
            }
        }
    }
}

/// Create benchmark image with corner-producing blobs
fn create_benchmark_grid(width: usize, height: usize, complexity: &str) -> IntensityGrid {
    let mut data = vec![128; width * height];

    match complexity {
        "sparse" => {
            stamp(&mut data, width, height, width / 2, height / 2, 255);
        }
        "blobs" => {
            // regular lattice of alternating bright and dark blobs
            for (i, cy) in (8..height.saturating_sub(8)).step_by(12).enumerate() {
                for (j, cx) in (8..width.saturating_sub(8)).step_by(12).enumerate() {
                    let peak = if (i + j) % 2 == 0 { 250 } else { 40 };
                    stamp(&mut data, width, height, cx, cy, peak);
                }
            }
        }
        "realistic" => {
            // gradient with texture and scattered blobs
            for y in 0..height {
                for x in 0..width {
                    let gradient = ((x as f32 / width as f32) * 50.0) as i32;
                    let noise = ((x * 7 + y * 13) % 11) as i32;
                    data[y * width + x] = 100 + gradient + noise;
                }
            }
            for i in 0..40 {
                let cx = 6 + (i * 37) % width.saturating_sub(12).max(1);
                let cy = 6 + (i * 53) % height.saturating_sub(12).max(1);
                stamp(&mut data, width, height, cx, cy, if i % 3 == 0 { 20 } else { 240 });
            }
        }
        _ => {}
    }

    IntensityGrid::from_vec(width, height, data).unwrap()
}

/// Benchmark full detection pipeline
fn bench_full_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_detection");

    let sizes = [(64, 64), (256, 256), (640, 480)];
    let complexities = ["sparse", "blobs", "realistic"];

    for &(width, height) in &sizes {
        for complexity in &complexities {
            let grid = create_benchmark_grid(width, height, complexity);

            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", width, height), complexity),
                &grid,
                |b, grid| {
                    b.iter(|| {
                        black_box(NonMaxSuppressor::detect_with_nonmax(
                            black_box(grid),
                            20,
                            Limit::Unbounded,
                        ))
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark each pipeline stage separately
fn bench_pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");
    let grid = create_benchmark_grid(640, 480, "realistic");
    let candidates = FeatureScanner::scan(&grid, 20);
    let features = FeatureScanner::detect(&grid, 20, Limit::Unbounded);

    group.bench_function("segment_test", |b| {
        b.iter(|| black_box(SegmentTest::is_corner(black_box(&grid), 320, 240, 20)))
    });

    if let Some(first) = candidates.first() {
        let (x, y) = (first.x, first.y);
        group.bench_function("corner_score", |b| {
            b.iter(|| black_box(CornerScorer::score(black_box(&grid), x, y)))
        });
    }

    group.bench_function("scan", |b| {
        b.iter(|| black_box(FeatureScanner::scan(black_box(&grid), 20)))
    });

    group.bench_function("score_candidates", |b| {
        b.iter(|| black_box(FeatureScanner::score_candidates(&grid, black_box(&candidates))))
    });

    group.bench_function("suppress", |b| {
        b.iter(|| black_box(NonMaxSuppressor::suppress(640, 480, black_box(&features))))
    });

    group.finish();
}

/// Benchmark the threshold sweep of the CLI
fn bench_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("thresholds");
    let grid = create_benchmark_grid(640, 480, "realistic");

    for threshold in [30, 25, 22, 20, 19] {
        group.bench_with_input(BenchmarkId::from_parameter(threshold), &threshold, |b, &t| {
            b.iter(|| black_box(FeatureScanner::detect(&grid, t, Limit::Unbounded)))
        });
    }

    group.finish();
}

/// Sequential against row-parallel detection
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let grid = create_benchmark_grid(640, 480, "blobs");

    for parallel in [false, true] {
        let detector = DetectorBuilder::new(640, 480)
            .threshold(20)
            .parallel(parallel)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "rayon" } else { "sequential" }),
            &detector,
            |b, detector| b.iter(|| black_box(detector.detect(black_box(&grid)).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_detection,
    bench_pipeline_stages,
    bench_thresholds,
    bench_parallel
);
criterion_main!(benches);
