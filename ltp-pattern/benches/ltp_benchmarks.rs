use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ltp_pattern::{
    compute_all_codes, compute_all_codes_sequential, compute_codes, ExtractorBuilder, Image,
    ImageProcessor, PatternParams,
};

/// Create benchmark image with texture and a smooth gradient
fn create_benchmark_image(width: usize, height: usize) -> Image {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let gradient = (x as f32 / width as f32) * 50.0;
            let noise = ((x * 7 + y * 13) % 17) as f32;
            pixels.push(100.0 + gradient + noise);
        }
    }
    Image::from_vec(width, height, pixels).unwrap()
}

/// Benchmark the whole-image driver across sizes
fn bench_full_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_image");
    let params = PatternParams::new(1.0, 8, 5.0).unwrap();

    for &(width, height) in &[(64, 64), (128, 128), (256, 256), (512, 512)] {
        let img = create_benchmark_image(width, height);

        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{}x{}", width, height)),
            &img,
            |b, img| b.iter(|| black_box(compute_all_codes(black_box(img), &params))),
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}x{}", width, height)),
            &img,
            |b, img| b.iter(|| black_box(compute_all_codes_sequential(black_box(img), &params))),
        );
    }

    group.finish();
}

/// Benchmark how the sample count drives the per-pixel cost
fn bench_sample_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_counts");
    let img = create_benchmark_image(128, 128);

    for &(radius, samples) in &[(1.0, 8), (2.0, 16), (3.0, 24), (3.0, 31)] {
        let params = PatternParams::new(radius, samples, 5.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(samples), &params, |b, params| {
            b.iter(|| black_box(compute_all_codes(black_box(&img), params)))
        });
    }

    group.finish();
}

/// Benchmark a single pixel and the processor wrapper
fn bench_pipeline_stages(c: &mut Criterion) {
    let img = create_benchmark_image(256, 256);
    let params = PatternParams::new(2.0, 16, 5.0).unwrap();
    let mut group = c.benchmark_group("pipeline_stages");

    group.bench_function("single_pixel", |b| {
        b.iter(|| black_box(compute_codes(black_box(&img), &params, 128, 128).unwrap()))
    });

    let mut ltp = ExtractorBuilder::new().preset_extended().build().unwrap();
    group.bench_function("process_image", |b| {
        b.iter(|| {
            ltp.process_image(black_box(&img), &[]);
            black_box(ltp.ternary_pattern().is_some())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_full_image, bench_sample_counts, bench_pipeline_stages);
criterion_main!(benches);
