// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use loupe_transform::{FitPolicy, TransformComposer};

fn composer(policy: FitPolicy) -> TransformComposer {
    let mut c = TransformComposer::new();
    c.set_fit_policy(policy);
    c.set_viewport(Size::new(1_080.0, 1_920.0));
    c.bind_content(Size::new(4_032.0, 3_024.0));
    c
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("composer/pan");

    // Every pan runs a full clamp-and-publish pass; zoom decides which
    // branch of the clamp is taken.
    for zoom in [1.0_f64, 3.0] {
        let mut comp = composer(FitPolicy::FitCenter);
        comp.apply_scale(zoom, Point::new(540.0, 960.0));
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("apply_translate", zoom), &zoom, |b, _| {
            let mut flip = 1.0;
            b.iter(|| {
                flip = -flip;
                black_box(comp.apply_translate(Vec2::new(12.0 * flip, -7.0 * flip)));
            });
        });
    }

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("composer/pinch");

    for policy in [FitPolicy::FitCenter, FitPolicy::CenterCrop, FitPolicy::FitEnd] {
        let mut comp = composer(policy);
        group.bench_function(BenchmarkId::new("apply_scale", format!("{policy:?}")), |b| {
            let mut factor = 1.01;
            b.iter(|| {
                factor = 1.0 / factor;
                black_box(comp.apply_scale(factor, Point::new(300.0, 700.0)));
            });
        });
    }

    group.finish();
}

fn bench_refit(c: &mut Criterion) {
    let mut group = c.benchmark_group("composer/refit");
    let mut comp = composer(FitPolicy::FitCenter);
    let sizes = [Size::new(1_080.0, 1_920.0), Size::new(1_920.0, 1_080.0)];
    let mut i = 0;
    group.bench_function("set_viewport", |b| {
        b.iter(|| {
            i ^= 1;
            black_box(comp.set_viewport(sizes[i]));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_pan, bench_pinch, bench_refit);
criterion_main!(benches);
