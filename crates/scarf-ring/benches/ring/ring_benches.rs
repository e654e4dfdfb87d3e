// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{Criterion, criterion_group, criterion_main};
use scarf_ring::prelude::{Instance, Placement, Query, SegmentRing};
use std::{hint::black_box, time::Instant};

// -----------------------
// Problem size constants
// -----------------------
const NUM_ELEMENTS: usize = 100_000;
const NUM_QUERIES: usize = 10_000;

// ---------------------------------------------------------
// 1) Single relocate (measure ONLY the splice)
//    Alternate A/B so the ring oscillates between two states.
// ---------------------------------------------------------
fn bench_single_relocate(c: &mut Criterion) {
    c.bench_function("ring/single_relocate_after", |b| {
        b.iter_custom(|iters| {
            let mut ring = SegmentRing::new(NUM_ELEMENTS);

            let start = Instant::now();
            for i in 0..iters {
                let target = if i % 2 == 0 { 50_000 } else { 9 };
                ring.relocate(black_box(10), black_box(20), Placement::After(target));
                black_box(&mut ring);
            }
            start.elapsed()
        })
    });

    c.bench_function("ring/single_relocate_front", |b| {
        b.iter_custom(|iters| {
            let mut ring = SegmentRing::new(NUM_ELEMENTS);

            let start = Instant::now();
            for i in 0..iters {
                // Alternately bring 10..=20 and 30..=40 to the front.
                let l = if i % 2 == 0 { 10 } else { 30 };
                ring.relocate(black_box(l), black_box(l + 10), Placement::Front);
                black_box(&mut ring);
            }
            start.elapsed()
        })
    });
}

// ---------------------------------------------------------
// 2) Replay a full instance, unchecked vs checked
// ---------------------------------------------------------
fn build_instance() -> Instance {
    // Rotating single-element moves keep every query valid without a model.
    let queries = (0..NUM_QUERIES)
        .map(|i| {
            let x = 2 + (i % (NUM_ELEMENTS - 2));
            if i % 3 == 0 {
                Query::new(x, x, Placement::Front)
            } else {
                Query::new(x, x, Placement::After(1))
            }
        })
        .collect();
    Instance::new(NUM_ELEMENTS, queries)
}

fn bench_solve(c: &mut Criterion) {
    let inst = build_instance();

    c.bench_function("ring/solve_unchecked_100k_10kq", |b| {
        b.iter(|| black_box(inst.solve().head()))
    });
    c.bench_function("ring/solve_checked_100k_10kq", |b| {
        b.iter(|| black_box(inst.solve_checked().map(|r| r.head()).ok()))
    });
}

// ---------------------------------------------------------
// 3) Linearize the whole ring
// ---------------------------------------------------------
fn bench_linearize(c: &mut Criterion) {
    let ring = build_instance().solve();

    c.bench_function("ring/linearize_100k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for x in ring.linearize() {
                acc = acc.wrapping_add(x);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_single_relocate, bench_solve, bench_linearize);
criterion_main!(benches);
