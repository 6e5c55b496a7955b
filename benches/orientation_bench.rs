// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Criterion benchmarks for the orientation predicate.
//! Compares the filtered path against the double-double and rational tiers
//! on well-separated and near-collinear inputs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use georobust::Coordinate;
use georobust::kernel::orientation::{index, index_dd};
use georobust::kernel::predicates::orientation_exact;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn triples(near_collinear: bool, n: usize, seed: u64) -> Vec<[Coordinate; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let p1 = Coordinate::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3));
            let p2 = Coordinate::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3));
            let q = if near_collinear {
                let t: f64 = rng.random_range(0.0..1.0);
                Coordinate::new(p1.x + t * (p2.x - p1.x), p1.y + t * (p2.y - p1.y))
            } else {
                Coordinate::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3))
            };
            [p1, p2, q]
        })
        .collect()
}

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");
    for (label, near) in [("random", false), ("near_collinear", true)] {
        let input = triples(near, 1024, 7);
        group.bench_with_input(BenchmarkId::new("index", label), &input, |b, input| {
            b.iter(|| {
                for [p1, p2, q] in input {
                    black_box(index(p1, p2, q));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("index_dd", label), &input, |b, input| {
            b.iter(|| {
                for [p1, p2, q] in input {
                    black_box(index_dd(p1, p2, q));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("exact", label), &input, |b, input| {
            b.iter(|| {
                for [p1, p2, q] in input {
                    black_box(orientation_exact(p1, p2, q));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orientation);
criterion_main!(benches);
