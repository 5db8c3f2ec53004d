use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xseq::{from_iter, merge, pull, zip};

fn bench_direct_push(c: &mut Criterion) {
    c.bench_function("push_each_10k", |b| {
        let seq = from_iter(0..10_000);
        b.iter(|| {
            let mut sum = 0i64;
            seq.for_each(|v| sum += v as i64);
            black_box(sum)
        })
    });
}

fn bench_pull_cursor(c: &mut Criterion) {
    c.bench_function("pull_drain_10k", |b| {
        b.iter(|| {
            let mut cursor = pull(from_iter(0..10_000));
            let mut sum = 0i64;
            while let Some(v) = cursor.next() {
                sum += v as i64;
            }
            black_box(sum)
        })
    });
}

fn bench_merge(c: &mut Criterion) {
    c.bench_function("merge_sorted_2x5k", |b| {
        let x = from_iter((0..10_000).step_by(2));
        let y = from_iter((1..10_000).step_by(2));
        b.iter(|| black_box(merge(x.clone(), y.clone()).to_vec()))
    });
}

fn bench_zip(c: &mut Criterion) {
    c.bench_function("zip_2x5k", |b| {
        let x = from_iter(0..5_000);
        let y = from_iter(0..5_000);
        b.iter(|| {
            let mut n = 0usize;
            zip(x.clone(), y.clone()).for_each(|_| n += 1);
            black_box(n)
        })
    });
}

criterion_group!(
    benches,
    bench_direct_push,
    bench_pull_cursor,
    bench_merge,
    bench_zip
);
criterion_main!(benches);
