// Criterion benchmarks for the two sketch pipelines on a synthetic image.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sketch_filters::{color_sketch, grayscale_sketch, render_preset, PixelBuffer, SketchPreset};

/// Square RGB gradient with a dark disc in the middle, so the blur and the
/// dodge both have edges to work on.
fn synthetic_rgb(size: usize) -> PixelBuffer {
    let center = size as f32 / 2.0;
    let radius = size as f32 / 4.0;
    let mut samples = Vec::with_capacity(size * size * 3);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if (dx * dx + dy * dy).sqrt() < radius {
                samples.extend_from_slice(&[40, 30, 20]);
            } else {
                samples.push((x * 255 / size) as u8);
                samples.push((y * 255 / size) as u8);
                samples.push(180);
            }
        }
    }
    PixelBuffer::from_raw(size, size, 3, samples).expect("valid synthetic image")
}

fn bench_grayscale_sketch(c: &mut Criterion) {
    let image = synthetic_rgb(256);

    c.bench_function("grayscale_sketch (256x256, k=21)", |b| {
        b.iter(|| grayscale_sketch(black_box(&image), 21, 40.0).expect("sketch"));
    });
}

fn bench_color_sketch(c: &mut Criterion) {
    let image = synthetic_rgb(256);

    c.bench_function("color_sketch (256x256, k=21)", |b| {
        b.iter(|| color_sketch(black_box(&image), 21, 40.0, 0.8).expect("sketch"));
    });
}

fn bench_largest_preset_kernel(c: &mut Criterion) {
    let image = synthetic_rgb(256);

    // detail = 1.0 maps to the largest kernel (39 taps)
    c.bench_function("render_preset clean_line (256x256, k=39)", |b| {
        b.iter(|| {
            render_preset(black_box(&image), SketchPreset::CleanLine, None, Some(1.0)).expect("render")
        });
    });
}

criterion_group!(
    benches,
    bench_grayscale_sketch,
    bench_color_sketch,
    bench_largest_preset_kernel
);
criterion_main!(benches);
