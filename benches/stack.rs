// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use cogent_collections::base::{range_step, LifoStack, Stack, VecStack};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn churn<S: LifoStack<u64>>(stack: &mut S, depth: u64) -> u64 {
    for i in 0..depth {
        stack.push(i);
    }
    let mut sum = 0;
    while let Ok(v) = stack.pop() {
        sum += v;
    }
    sum
}

fn bench_stacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for depth in [16u64, 128, 1024, 16_384] {
        group.throughput(Throughput::Elements(depth));
        group.bench_with_input(BenchmarkId::new("linked", depth), &depth, |b, &depth| {
            let mut stack = Stack::new();
            b.iter(|| churn(&mut stack, black_box(depth)))
        });
        group.bench_with_input(BenchmarkId::new("vec", depth), &depth, |b, &depth| {
            let mut stack = VecStack::new();
            b.iter(|| churn(&mut stack, black_box(depth)))
        });
    }
    group.finish();
}

fn bench_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_sum");
    let len = 100_000;
    group.throughput(Throughput::Elements(len as u64 / 3));
    group.bench_function("range_step", |b| {
        b.iter(|| {
            let r = range_step(0, black_box(len), 3).expect("valid range");
            r.into_iter().map(i64::from).sum::<i64>()
        })
    });
    group.bench_function("std", |b| {
        b.iter(|| (0..black_box(len)).step_by(3).map(i64::from).sum::<i64>())
    });
    group.finish();
}

criterion_group!(benches, bench_stacks, bench_ranges);
criterion_main!(benches);
