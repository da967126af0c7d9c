// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Size};
use loupe::PhotoController;
use loupe_gesture::{
    GestureConfig, GestureRecognizer, Pointer, PointerAction, PointerEvent, TapDetector,
};

/// A one-finger drag followed by a two-finger pinch.
fn script() -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::down(0, 1, (500.0, 900.0))];
    for i in 1..=60_u32 {
        let t = u64::from(i) * 8;
        events.push(PointerEvent::moved(t, 1, (500.0 - f64::from(i) * 3.0, 900.0)));
    }
    events.push(PointerEvent::new(
        PointerAction::PointerDown { index: 1 },
        500,
        [Pointer::new(1, (320.0, 900.0)), Pointer::new(2, (420.0, 900.0))],
    ));
    for i in 1..=60_u32 {
        let t = 500 + u64::from(i) * 8;
        let spread = f64::from(i) * 2.0;
        events.push(PointerEvent::new(
            PointerAction::Move,
            t,
            [
                Pointer::new(1, (320.0 - spread, 900.0)),
                Pointer::new(2, (420.0 + spread, 900.0)),
            ],
        ));
    }
    events.push(PointerEvent::new(
        PointerAction::PointerUp { index: 1 },
        990,
        [Pointer::new(1, (200.0, 900.0)), Pointer::new(2, (540.0, 900.0))],
    ));
    events.push(PointerEvent::up(1_000, 1, (200.0, 900.0)));
    events
}

fn bench_recognizers(c: &mut Criterion) {
    let events = script();
    let mut group = c.benchmark_group("gestures/recognizers");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("gesture_recognizer", |b| {
        b.iter_batched(
            || GestureRecognizer::new(GestureConfig::default()),
            |mut r| {
                let mut out = Vec::new();
                for ev in &events {
                    r.process_event(ev, &mut out);
                }
                black_box(out);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("tap_detector", |b| {
        b.iter_batched(
            || TapDetector::new(GestureConfig::default()),
            |mut d| {
                let mut out = Vec::new();
                for ev in &events {
                    d.process_event(ev, &mut out);
                }
                black_box(out);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let events = script();
    let mut group = c.benchmark_group("gestures/controller");
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("on_pointer_event", |b| {
        b.iter_batched(
            || {
                let mut photo = PhotoController::default();
                photo.bind_viewport(Size::new(1_080.0, 1_920.0), Insets::ZERO);
                photo.bind_content(Size::new(4_032.0, 3_024.0));
                photo
            },
            |mut photo| {
                for ev in &events {
                    black_box(photo.on_pointer_event(ev));
                }
                black_box(photo.draw_transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_recognizers, bench_controller);
criterion_main!(benches);
