// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the docquad-document crate: the full corner
// detection pipeline on a synthetic page, and the geometric stage alone on a
// fixed set of peak lines.

use std::f64::consts::FRAC_PI_2;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{GrayImage, Luma};

use docquad_core::config::DEFAULT_ANGLE_TOLERANCE;
use docquad_core::{PolarLine, SampleRange};
use docquad_document::CornerDetector;
use docquad_document::scan::{classify, resolve_intersections};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark corner detection on a 200x160 synthetic grayscale image.
///
/// A bright page on a dark background, the same pattern used in the
/// `CornerDetector` unit tests. The filter chain (median blur with a 25 pixel
/// window) dominates the cost.
fn bench_corner_detection(c: &mut Criterion) {
    let (width, height) = (200u32, 160u32);
    let mut img = GrayImage::from_pixel(width, height, Luma([30u8]));
    for y in 30..130 {
        for x in 40..160 {
            img.put_pixel(x, y, Luma([240u8]));
        }
    }
    let detector = CornerDetector::default();

    c.bench_function("corner_detection (200x160)", |b| {
        b.iter(|| {
            let detection = detector.detect(black_box(&img)).ok();
            black_box(detection.map(|d| d.corners.len()));
        });
    });
}

/// Benchmark classification + intersection for 16 horizontal and 16
/// vertical lines (256 pairs).
fn bench_intersections(c: &mut Criterion) {
    let lines: Vec<PolarLine> = (0..32)
        .map(|i| {
            let jitter = (i % 5) as f64 * 0.01;
            if i % 2 == 0 {
                PolarLine::new(FRAC_PI_2 - jitter, 20.0 * i as f64, 100.0)
            } else {
                PolarLine::new(jitter, 15.0 * i as f64, 100.0)
            }
        })
        .collect();

    c.bench_function("classify + resolve (16x16 lines)", |b| {
        b.iter(|| {
            let classified = classify(black_box(&lines), DEFAULT_ANGLE_TOLERANCE);
            black_box(resolve_intersections(&classified, SampleRange::default()));
        });
    });
}

criterion_group!(benches, bench_corner_detection, bench_intersections);
criterion_main!(benches);
