// Copyright 2026 the Tagfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use tagfield_control::field::TagsField;
use tagfield_wrap::solver::solve;
use tagfield_wrap::types::{FieldMode, WrapMetrics};

struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_sizes(count: usize, min_w: f64, max_w: f64) -> Vec<Size> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = min_w + rng.next_f64() * (max_w - min_w);
        out.push(Size::new(w, 25.0));
    }
    out
}

fn gen_uniform_sizes(count: usize, w: f64) -> Vec<Size> {
    vec![Size::new(w, 25.0); count]
}

fn gen_tag_texts(count: usize) -> Vec<String> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let len = 2 + (rng.next_u64() % 10) as usize;
        out.push(format!("{}-{}", "x".repeat(len), i));
    }
    out
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let metrics = WrapMetrics::default();
    for &n in &[64usize, 256, 1024] {
        let sizes = gen_random_sizes(n, 20.0, 140.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("inline_n{}", n), |b| {
            b.iter(|| {
                let layout = solve(black_box(360.0), &metrics, &sizes, FieldMode::Inline);
                black_box(layout.rows);
            })
        });
    }
    let sizes = gen_uniform_sizes(1024, 48.0);
    group.bench_function("hidden_n1024", |b| {
        b.iter(|| {
            let layout = solve(black_box(360.0), &metrics, &sizes, FieldMode::Hidden);
            black_box(layout.rows);
        })
    });
    group.finish();
}

fn bench_field_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    for &n in &[16usize, 64, 256] {
        let tags = gen_tag_texts(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("resize_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut field = TagsField::new(360.0);
                    field.add_tags(tags.iter().cloned());
                    field
                },
                |mut field| {
                    field.set_width(240.0);
                    black_box(field.height());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let tags = gen_tag_texts(64);
    group.bench_function("add_commit_n64", |b| {
        b.iter_batched(
            || TagsField::new(360.0),
            |mut field| {
                for text in &tags {
                    let _ = field.add_tag(text.as_str());
                }
                black_box(field.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_field_reflow);
criterion_main!(benches);
