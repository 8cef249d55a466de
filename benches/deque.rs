use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reversible_list::ReversibleDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs ReversibleDeque (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i));
                }
                d
            })
        });

        group.bench_function("ReversibleDeque", |b| {
            b.iter(|| {
                let mut d = ReversibleDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ReversibleDeque (Reverse 1024)");
        let mut d_std: VecDeque<i32> = (0..n).collect();
        let mut d_rev = ReversibleDeque::new();
        for i in 0..n {
            d_rev.push_back(i);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                d_std.make_contiguous().reverse();
                black_box(d_std.front().copied())
            })
        });

        group.bench_function("ReversibleDeque", |b| {
            b.iter(|| {
                d_rev.revert();
                black_box(d_rev.front().ok().copied())
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs ReversibleDeque (Get middle 1024)");
        let d_std: VecDeque<i32> = (0..n).collect();
        let mut d_rev = ReversibleDeque::new();
        for i in 0..n {
            d_rev.push_back(i);
        }
        let middle = (n / 2) as usize;

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| black_box(d_std.get(black_box(middle)).copied()))
        });

        group.bench_function("ReversibleDeque", |b| {
            b.iter(|| black_box(d_rev.get(black_box(middle)).ok().copied()))
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
