// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slideshow navigation operations.
//!
//! These transitions run on every autoplay tick and every touch, so they
//! should stay trivially cheap even for long slide sets.

use criterion::{criterion_group, criterion_main, Criterion};
use kioskonnekt::slideshow::Slideshow;
use std::hint::black_box;

fn sample_show(len: usize) -> Slideshow {
    Slideshow::new((0..len).map(|i| format!("maps/slide-{i}.svg")).collect())
}

/// Benchmark the tick path: advance until the terminal slide pauses the show.
fn bench_tick_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("slideshow_navigation");

    group.bench_function("tick_to_end", |b| {
        b.iter(|| {
            let mut show = sample_show(64);
            while show.autoplay_running() {
                show.tick();
            }
            black_box(&show);
        });
    });

    group.finish();
}

/// Benchmark manual navigation: a visitor scrubbing back and forth.
fn bench_manual_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("slideshow_navigation");

    group.bench_function("next_previous_scrub", |b| {
        b.iter(|| {
            let mut show = sample_show(64);
            for _ in 0..32 {
                show.next();
            }
            for _ in 0..32 {
                show.previous();
            }
            black_box(&show);
        });
    });

    group.bench_function("go_to_jumps", |b| {
        b.iter(|| {
            let mut show = sample_show(64);
            for index in [5usize, 60, 0, 31, 63, 1] {
                show.go_to(black_box(index));
            }
            black_box(&show);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick_to_end, bench_manual_navigation);
criterion_main!(benches);
